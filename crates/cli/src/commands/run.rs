use anyhow::{Context, Result};
use tracing::{debug, info};

use karate_runner_core::{
    CommandSynthesizer, Coordinator, CoordinatorListener, RunOutcome,
    build_system,
    command::resolve_runner_class,
    config::validate,
    interfaces::ConfigStore,
    lifecycle::DebugTarget,
    services::JsonConfigStore,
    types::{ExecutionMode, RunRequest},
};

use super::absolute_target;
use crate::display::print_command_breakdown;
use crate::utils::{StdinPrompt, build_request, parse_filepath_with_line};

/// Prints lifecycle events as they happen
struct ConsoleListener;

impl CoordinatorListener for ConsoleListener {
    fn busy_changed(&mut self, busy: bool) {
        if busy {
            println!("⏳ Karate Runner is running...");
        }
    }

    fn debug_session_ready(&mut self, target: &DebugTarget) {
        println!("🐞 Debug server port: {}", target.port);
        match target.line {
            Some(line) => println!("   Attach at {}:{}", target.feature_file.display(), line + 1),
            None => println!("   Attach at {}", target.feature_file.display()),
        }
    }
}

pub fn run_command(filepath_arg: &str, tags: Option<&str>, dry_run: bool) -> Result<()> {
    execute(filepath_arg, tags, dry_run, ExecutionMode::Run)
}

pub fn debug_command(filepath_arg: &str, dry_run: bool) -> Result<()> {
    execute(filepath_arg, None, dry_run, ExecutionMode::Debug)
}

fn execute(
    filepath_arg: &str,
    tags: Option<&str>,
    dry_run: bool,
    mode: ExecutionMode,
) -> Result<()> {
    let (filepath, line) = parse_filepath_with_line(filepath_arg);
    let filepath = absolute_target(&filepath)?;
    debug!("{:?} requested for {} at line {:?}", mode, filepath.display(), line);

    let request = build_request(&filepath, line, tags, mode)?;

    let store = JsonConfigStore::load_nearest(&filepath).context("Failed to load configuration")?;
    validate(store.config()).context("Invalid configuration")?;
    if let Some(path) = store.path() {
        info!("Using configuration from {}", path.display());
    }

    if dry_run {
        return print_dry_run(&store, &request);
    }

    let mut coordinator = Coordinator::new(Box::new(store))
        .with_prompt(Box::new(StdinPrompt::stdin()))
        .with_listener(Box::new(ConsoleListener));

    let outcome = match mode {
        ExecutionMode::Run => coordinator.run_requested(request),
        ExecutionMode::Debug => coordinator.debug_requested(request),
    }
    .context("Run failed")?;

    match outcome {
        RunOutcome::Skipped { reason } => {
            println!("⚠️  Nothing to run: {reason}");
        }
        RunOutcome::Completed { reports } => {
            println!("✅ Karate Runner finished");
            if reports.is_empty() {
                println!("   • No reports found");
            }
            for report in reports {
                println!("   📊 {}", report.display());
            }
        }
    }

    Ok(())
}

/// Show what would run without starting anything. A prompted runner class
/// only lands in a throwaway copy of the configuration.
fn print_dry_run(store: &JsonConfigStore, request: &RunRequest) -> Result<()> {
    let ted = &request.ted;
    let project = build_system::resolve(&ted.target_path, ted.target_kind);

    let mut store = JsonConfigStore::in_memory(store.config().clone());
    let mut prompt = StdinPrompt::stdin();
    let runner_class = resolve_runner_class(project.build_system(), &mut store, &mut prompt)
        .context("Failed to choose a runner class")?;

    match CommandSynthesizer::new(store.config()).synthesize(
        &project,
        ted,
        request.mode,
        runner_class.as_deref(),
    ) {
        Ok(command) => {
            println!("{}", command.to_shell_command());
            println!("Working directory: {}", command.working_dir().display());
            print_command_breakdown(&project, &command);
            Ok(())
        }
        Err(e) if e.is_silent_abort() => {
            println!("⚠️  Nothing to run: {e}");
            Ok(())
        }
        Err(e) => Err(e).context("Failed to build command"),
    }
}
