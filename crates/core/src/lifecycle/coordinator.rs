//! Drives one request from preparation through report reconciliation

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    listener::CoordinatorListener,
    state::{DebugTarget, ExecutionState, Phase},
};
use crate::{
    build_system::{BuildSystemKind, ProjectResolver},
    command::{CommandSynthesizer, Platform, RunCommand, resolve_runner_class},
    debug_port::PortAllocator,
    error::Result,
    interfaces::{
        AcceptDefault, ConfigStore, FileSystem, PortProbe, ReportOpener, ReportWatch,
        RunnerPrompt, TaskExecutor, TaskHandle, WatchFactory,
    },
    services::{
        NotifyWatchFactory, ShellTaskExecutor, StdFileSystem, SystemOpener, TcpBindProbe,
    },
    types::{ExecutionMode, ProjectDetail, RunRequest},
};

/// Name every task started by the coordinator carries
pub const TASK_NAME: &str = "Karate Runner";

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How a request ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RunOutcome {
    /// Nothing was started: no build descriptor, no runner class, or a
    /// missing configuration key
    Skipped { reason: String },
    /// The task ended; reports matched while it ran, in first-seen order
    Completed { reports: Vec<PathBuf> },
}

/// Owns the run state and every collaborator needed to execute a request.
///
/// Requests are handled one at a time and block the caller until the task
/// has ended and its reports are reconciled.
pub struct Coordinator {
    store: Box<dyn ConfigStore>,
    prompt: Box<dyn RunnerPrompt>,
    executor: Box<dyn TaskExecutor>,
    watches: Box<dyn WatchFactory>,
    opener: Box<dyn ReportOpener>,
    listener: Box<dyn CoordinatorListener>,
    resolver: ProjectResolver<Box<dyn FileSystem>>,
    ports: PortAllocator<Box<dyn PortProbe>>,
    platform: Platform,
    poll_interval: Duration,
    state: ExecutionState,
    phase: Phase,
    history: Vec<RunRequest>,
    /// Runner class answered at the first prompt, reused for later runs
    session_runner: Option<String>,
}

impl Coordinator {
    /// Coordinator backed by the real file system, shell and watcher.
    /// Runner class prompts accept the stored default.
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        let port_override = store.config().debugger.port_override();
        Self {
            store,
            prompt: Box::new(AcceptDefault),
            executor: Box::new(ShellTaskExecutor::new()),
            watches: Box::new(NotifyWatchFactory),
            opener: Box::new(SystemOpener::new()),
            listener: Box::new(()),
            resolver: ProjectResolver::new(Box::new(StdFileSystem)),
            ports: PortAllocator::with_probe(Box::new(TcpBindProbe), port_override),
            platform: Platform::current(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            state: ExecutionState::default(),
            phase: Phase::Idle,
            history: Vec::new(),
            session_runner: None,
        }
    }

    pub fn with_prompt(mut self, prompt: Box<dyn RunnerPrompt>) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_executor(mut self, executor: Box<dyn TaskExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn with_watch_factory(mut self, watches: Box<dyn WatchFactory>) -> Self {
        self.watches = watches;
        self
    }

    pub fn with_opener(mut self, opener: Box<dyn ReportOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_listener(mut self, listener: Box<dyn CoordinatorListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.resolver = ProjectResolver::new(fs);
        self
    }

    pub fn with_port_probe(mut self, probe: Box<dyn PortProbe>) -> Self {
        let port_override = self.store.config().debugger.port_override();
        self.ports = PortAllocator::with_probe(probe, port_override);
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_task_executing
    }

    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    /// Requests that reached the task executor, oldest first
    pub fn history(&self) -> &[RunRequest] {
        &self.history
    }

    /// Debug target not yet handed to a listener. Once a debug task has
    /// started the listener has consumed it and this returns `None`.
    pub fn take_debug_target(&mut self) -> Option<DebugTarget> {
        self.state.take_debug_target()
    }

    /// Debug port for attaching, reusing the last allocation when there is one
    pub fn debug_port(&mut self) -> Result<u16> {
        self.ports.allocate(true)
    }

    pub fn run_requested(&mut self, request: RunRequest) -> Result<RunOutcome> {
        self.state.reset();
        self.execute(request)
    }

    /// Allocate a fresh debug port, record the debug target and run the
    /// request. The target goes to [`CoordinatorListener::debug_session_ready`]
    /// as soon as the task is running. Port exhaustion is returned as an error
    /// before anything starts.
    pub fn debug_requested(&mut self, request: RunRequest) -> Result<RunOutcome> {
        self.state.reset();

        let port = self.ports.allocate(false)?;
        let ted = &request.ted;
        self.state.set_debug_target(&ted.target_path, ted.section_line, port);

        self.execute(request)
    }

    /// Re-issue the most recent request in its original mode
    pub fn repeat_last(&mut self) -> Result<RunOutcome> {
        let Some(request) = self.history.last().cloned() else {
            return Ok(RunOutcome::Skipped {
                reason: "no previous run".to_string(),
            });
        };

        match request.mode {
            ExecutionMode::Run => self.run_requested(request),
            ExecutionMode::Debug => self.debug_requested(request),
        }
    }

    fn execute(&mut self, request: RunRequest) -> Result<RunOutcome> {
        self.phase = Phase::Preparing;

        let (project, command) = match self.prepare(&request) {
            Ok(prepared) => prepared,
            Err(e) if e.is_silent_abort() => {
                warn!(
                    "Nothing to run for {}: {e}",
                    request.ted.target_path.display()
                );
                self.finish_idle();
                return Ok(RunOutcome::Skipped {
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                self.finish_idle();
                return Err(e);
            }
        };

        self.phase = Phase::Running;
        let reports = match self.run_task(&project, &command) {
            Ok(reports) => reports,
            Err(e) => {
                self.finish_idle();
                return Err(e);
            }
        };

        self.history.push(request);
        if let Some(request) = self.history.last() {
            self.listener.history_appended(request);
        }

        if self.store.config().build_reports.open_after_each_run {
            for report in &reports {
                if let Err(e) = self.opener.open_external(report) {
                    warn!("Failed to open report {}: {e}", report.display());
                }
            }
        }

        self.phase = Phase::Idle;
        Ok(RunOutcome::Completed { reports })
    }

    fn prepare(&mut self, request: &RunRequest) -> Result<(ProjectDetail, RunCommand)> {
        let ted = &request.ted;
        let project = self.resolver.resolve(&ted.target_path, ted.target_kind);
        let kind = project.build_system();

        let runner_class = self.runner_class_for(kind)?;

        let command = CommandSynthesizer::new(self.store.config())
            .with_platform(self.platform)
            .synthesize(&project, ted, request.mode, runner_class.as_deref())?;

        Ok((project, command))
    }

    /// Prompted runner classes are remembered for the rest of the session.
    /// A cancelled prompt is not, so the next run asks again.
    fn runner_class_for(&mut self, kind: BuildSystemKind) -> Result<Option<String>> {
        let config = self.store.config();
        let prompting = config.karate_runner.prompt_to_specify;
        let needs_runner = kind.uses_runner_class() && !config.karate_cli.override_karate_runner;

        if needs_runner && prompting {
            if let Some(runner) = &self.session_runner {
                debug!("Reusing runner class {runner} for this session");
                return Ok(Some(runner.clone()));
            }
        }

        let runner = resolve_runner_class(kind, &mut *self.store, &mut *self.prompt)?;
        if needs_runner && prompting {
            self.session_runner = runner.clone();
        }
        Ok(runner)
    }

    /// Start the task and block until it ends. The watch lives exactly as
    /// long as this call.
    fn run_task(
        &mut self,
        project: &ProjectDetail,
        command: &RunCommand,
    ) -> Result<Vec<PathBuf>> {
        let glob = self.store.config().build_reports.to_target.clone();
        let mut watch = self.watches.watch(&glob, &project.project_root)?;

        let handle = self.executor.execute(TASK_NAME, command)?;
        info!(
            "Started task {} in {}: {}",
            handle.id,
            command.working_dir().display(),
            command.to_shell_command()
        );

        self.state.is_task_executing = true;
        self.listener.busy_changed(true);

        if let Some(target) = self.state.take_debug_target() {
            info!("Debug server listening on port {}", target.port);
            self.listener.debug_session_ready(&target);
        }

        self.wait_for(&handle, watch.as_mut());

        self.phase = Phase::Reconciling;
        self.collect_reports(watch.as_mut());
        drop(watch);

        self.state.is_task_executing = false;
        self.listener.busy_changed(false);

        Ok(self.state.take_reports())
    }

    fn wait_for(&mut self, handle: &TaskHandle, watch: &mut dyn ReportWatch) {
        loop {
            self.collect_reports(watch);

            let ended = self.executor.poll_ended();
            if ended.iter().any(|h| h == handle) {
                info!("Task {} ended", handle.id);
                return;
            }
            for other in ended {
                debug!("Ignoring end of unrelated task {} ({})", other.id, other.name);
            }

            thread::sleep(self.poll_interval);
        }
    }

    fn collect_reports(&mut self, watch: &mut dyn ReportWatch) {
        for path in watch.drain() {
            if self.state.record_report(path.clone()) {
                debug!("Report found: {}", path.display());
            }
        }
    }

    fn finish_idle(&mut self) {
        self.state.is_task_executing = false;
        self.listener.busy_changed(false);
        self.phase = Phase::Idle;
    }
}
