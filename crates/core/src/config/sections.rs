use serde::{Deserialize, Serialize};

// `Option<String>` keys distinguish "not configured" (explicit `null`) from
// "configured as empty". Missing keys take the default.

fn default_runner_class() -> Option<String> {
    Some("TestRunner".to_string())
}

fn default_jar_args() -> Option<String> {
    Some("java -jar karate.jar".to_string())
}

fn default_node_args() -> Option<String> {
    Some("npx karate".to_string())
}

fn default_extra_args() -> Option<String> {
    Some(String::new())
}

fn default_report_glob() -> String {
    "**/karate-reports/*.html".to_string()
}

fn default_port() -> i32 {
    -1
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct CoreConfig {
    /// Value for `karate.env`; empty means no environment switch
    pub environment: String,
    /// Use `./mvnw` / `./gradlew` instead of `mvn` / `gradle`
    pub use_wrapper: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KarateRunnerConfig {
    /// Fully qualified or simple name of the JUnit runner class
    #[serde(default = "default_runner_class")]
    pub default: Option<String>,
    #[serde(default)]
    pub prompt_to_specify: bool,
}

impl Default for KarateRunnerConfig {
    fn default() -> Self {
        Self {
            default: default_runner_class(),
            prompt_to_specify: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct BuildDirectoryConfig {
    pub clean_before_each_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KarateJarConfig {
    /// Invocation prefix for the standalone jar
    #[serde(default = "default_jar_args")]
    pub command_line_args: Option<String>,
}

impl Default for KarateJarConfig {
    fn default() -> Self {
        Self {
            command_line_args: default_jar_args(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NodeConfig {
    /// Invocation prefix for the npm Karate wrapper
    #[serde(default = "default_node_args")]
    pub command_line_args: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            command_line_args: default_node_args(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KarateCliConfig {
    /// Bypass the runner class and invoke the Karate CLI main class directly
    #[serde(default)]
    pub override_karate_runner: bool,
    #[serde(default = "default_extra_args")]
    pub command_line_args: Option<String>,
}

impl Default for KarateCliConfig {
    fn default() -> Self {
        Self {
            override_karate_runner: false,
            command_line_args: default_extra_args(),
        }
    }
}

/// Extra arguments appended to Maven or Gradle invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildToolConfig {
    #[serde(default = "default_extra_args")]
    pub command_line_args: Option<String>,
}

impl Default for BuildToolConfig {
    fn default() -> Self {
        Self {
            command_line_args: default_extra_args(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BuildReportsConfig {
    /// Glob, relative to the project root, of report files to collect
    #[serde(default = "default_report_glob")]
    pub to_target: String,
    #[serde(default)]
    pub open_after_each_run: bool,
}

impl Default for BuildReportsConfig {
    fn default() -> Self {
        Self {
            to_target: default_report_glob(),
            open_after_each_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DebuggerConfig {
    /// Fixed debug server port; negative means search for a free one
    #[serde(default = "default_port")]
    pub server_port_number: i32,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            server_port_number: default_port(),
        }
    }
}

impl DebuggerConfig {
    pub fn port_override(&self) -> Option<u16> {
        u16::try_from(self.server_port_number).ok()
    }
}
