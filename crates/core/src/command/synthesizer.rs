//! Turns a resolved project, a test target and settings into one command line
//!
//! The decision procedure is split into small pure resolvers so each rule can
//! be checked on its own; [`CommandSynthesizer::synthesize`] only composes them.

use crate::{
    build_system::BuildSystemKind,
    command::run_command::{RunCommand, join_segments},
    config::Config,
    error::{Error, Result},
    types::{ExecutionMode, ProjectDetail, TestExecutionDetail},
};

/// Main class of the Karate command line, used when bypassing the runner class
pub const KARATE_CLI_MAIN: &str = "com.intuit.karate.cli.Main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

pub fn resolve_build_system_kind(project: &ProjectDetail) -> BuildSystemKind {
    if !project.is_resolved() {
        return BuildSystemKind::Unresolved;
    }
    project.build_system()
}

/// `mvn` / `gradle`, or the project-local wrapper script
pub fn resolve_runner_executable(
    kind: BuildSystemKind,
    use_wrapper: bool,
    platform: Platform,
) -> Option<&'static str> {
    let executable = match (kind, use_wrapper, platform) {
        (BuildSystemKind::Maven, false, _) => "mvn",
        (BuildSystemKind::Maven, true, Platform::Posix) => "./mvnw",
        (BuildSystemKind::Maven, true, Platform::Windows) => "mvnw",
        (k, false, _) if k.is_gradle() => "gradle",
        (k, true, Platform::Posix) if k.is_gradle() => "./gradlew",
        (k, true, Platform::Windows) if k.is_gradle() => "gradlew",
        _ => return None,
    };
    Some(executable)
}

/// Build phases ahead of the test invocation.
///
/// The direct-CLI path only compiles tests; running them is left to the main class.
pub fn resolve_phases(clean_before_run: bool, direct_cli: bool) -> &'static str {
    match (direct_cli, clean_before_run) {
        (false, true) => "clean test",
        (false, false) => "test",
        (true, true) => "clean test-compile",
        (true, false) => "",
    }
}

/// Gradle has no `test-compile`; `testClasses` is the equivalent task
fn phases_for(kind: BuildSystemKind, phases: &str) -> String {
    if kind.is_gradle() {
        phases.replace("test-compile", "testClasses")
    } else {
        phases.to_string()
    }
}

fn build_file_switch(kind: BuildSystemKind) -> &'static str {
    if kind.is_gradle() { "-b" } else { "-f" }
}

/// Switch selecting the Karate environment, empty when none is configured
pub fn resolve_env_switch(kind: BuildSystemKind, environment: &str) -> String {
    let environment = environment.trim();
    if environment.is_empty() {
        return String::new();
    }
    match kind {
        BuildSystemKind::StandaloneJar => format!("-e {environment}"),
        BuildSystemKind::Maven | BuildSystemKind::GradleGroovy | BuildSystemKind::GradleKotlin => {
            format!("-Dkarate.env={environment}")
        }
        BuildSystemKind::NodePackage | BuildSystemKind::Unresolved => String::new(),
    }
}

/// The part of a Maven/Gradle command that selects and runs Karate
pub fn resolve_runner_invocation(
    kind: BuildSystemKind,
    runner_class: Option<&str>,
    karate_options: &str,
    direct_cli: bool,
) -> Result<String> {
    if direct_cli {
        return Ok(if kind.is_gradle() {
            format!("karateExecute -DmainClass={KARATE_CLI_MAIN} --args=\"{karate_options}\"")
        } else {
            format!(
                "exec:java -Dexec.mainClass={KARATE_CLI_MAIN} \"-Dexec.args={karate_options}\" -Dexec.classpathScope=test"
            )
        });
    }

    let runner_class = runner_class
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| Error::Unresolved("no runner class chosen".to_string()))?;

    let selector = if kind.is_gradle() {
        format!("--tests {runner_class}")
    } else {
        format!("-Dtest={runner_class}")
    };
    Ok(format!("{selector} \"-Dkarate.options={karate_options}\""))
}

/// Command synthesis over a read-only config snapshot
pub struct CommandSynthesizer<'a> {
    config: &'a Config,
    platform: Platform,
}

impl<'a> CommandSynthesizer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            platform: Platform::current(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Produce the command for one request.
    ///
    /// `Error::Unresolved` and `Error::ConfigurationMissing` mean "nothing to
    /// run"; no partial command is ever returned. Debug mode yields the same
    /// command as run mode since the debugger attaches separately.
    pub fn synthesize(
        &self,
        project: &ProjectDetail,
        ted: &TestExecutionDetail,
        mode: ExecutionMode,
        runner_class: Option<&str>,
    ) -> Result<RunCommand> {
        let kind = resolve_build_system_kind(project);
        tracing::debug!(
            "Synthesizing {:?} command for {} with {:?}",
            mode,
            ted.target_path.display(),
            kind
        );

        let command_line = match kind {
            BuildSystemKind::Unresolved => {
                return Err(Error::Unresolved(format!(
                    "no build descriptor for {}",
                    ted.target_path.display()
                )));
            }
            BuildSystemKind::StandaloneJar => self.jar_command(ted)?,
            BuildSystemKind::NodePackage => self.node_command(ted)?,
            BuildSystemKind::Maven
            | BuildSystemKind::GradleGroovy
            | BuildSystemKind::GradleKotlin => {
                self.build_tool_command(kind, project, ted, runner_class)?
            }
        };

        Ok(RunCommand::new(command_line, &project.project_root))
    }

    fn jar_command(&self, ted: &TestExecutionDetail) -> Result<String> {
        let jar_args = configured(
            self.config.karate_jar.command_line_args.as_deref(),
            "karate_jar.command_line_args",
        )?;
        let env_switch =
            resolve_env_switch(BuildSystemKind::StandaloneJar, &self.config.core.environment);

        Ok(join_segments(&[jar_args, ted.karate_jar_options.as_str(), env_switch.as_str()]))
    }

    fn node_command(&self, ted: &TestExecutionDetail) -> Result<String> {
        let node_args = configured(
            self.config.node.command_line_args.as_deref(),
            "node.command_line_args",
        )?;

        Ok(format!("{node_args} \"{}\"", ted.karate_options))
    }

    fn build_tool_command(
        &self,
        kind: BuildSystemKind,
        project: &ProjectDetail,
        ted: &TestExecutionDetail,
        runner_class: Option<&str>,
    ) -> Result<String> {
        let direct_cli = self.config.karate_cli.override_karate_runner;

        let executable =
            resolve_runner_executable(kind, self.config.core.use_wrapper, self.platform)
                .ok_or_else(|| Error::Unresolved(format!("no build tool for {kind:?}")))?;

        let phases = phases_for(
            kind,
            resolve_phases(self.config.build_directory.clean_before_each_run, direct_cli),
        );

        let (extra_args, extra_args_key) = if direct_cli {
            (&self.config.karate_cli.command_line_args, "karate_cli.command_line_args")
        } else if kind.is_gradle() {
            (&self.config.gradle.command_line_args, "gradle.command_line_args")
        } else {
            (&self.config.maven.command_line_args, "maven.command_line_args")
        };
        let extra_args = extra_args
            .as_deref()
            .ok_or_else(|| Error::ConfigurationMissing(extra_args_key.to_string()))?;

        let invocation =
            resolve_runner_invocation(kind, runner_class, &ted.karate_options, direct_cli)?;
        let run_file = format!("\"{}\"", project.run_file.display());
        let env_switch = resolve_env_switch(kind, &self.config.core.environment);

        Ok(join_segments(&[
            executable,
            phases.as_str(),
            build_file_switch(kind),
            run_file.as_str(),
            invocation.as_str(),
            extra_args,
            env_switch.as_str(),
        ]))
    }
}

/// A configured invocation string; undefined or blank aborts synthesis
fn configured<'c>(value: Option<&'c str>, key: &str) -> Result<&'c str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::ConfigurationMissing(key.to_string()))
}
