//! The long-running actions dispatched from the session menu.
//!
//! Every action is synchronous, runs its steps strictly in order and ends
//! with exactly one [`Outcome`]. Errors never escape an action; they are
//! turned into a failed outcome at the step where they occur.

use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::config::SetupConfig;
use crate::error::Result;
use crate::execution::{CommandInstaller, PackageInstaller};

pub mod configure;
pub mod install;
pub mod outcome;
pub mod save_logs;
pub mod troubleshoot;

pub use outcome::Outcome;
use troubleshoot::CheckEnvironment;

/// An action the task runner can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Configure,
    Troubleshoot,
    SaveLogs,
}

impl Display for Action {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Action::Install => "install",
            Action::Configure => "configure",
            Action::Troubleshoot => "troubleshoot",
            Action::SaveLogs => "save logs",
        })
    }
}

/// Shared flag an action polls between steps to stop early.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Everything an action needs to run.
#[derive(Clone)]
pub struct TaskContext {
    pub config: SetupConfig,
    pub installer: Arc<dyn PackageInstaller>,
    pub cancel: CancelFlag,
}

impl TaskContext {
    /// Builds a context that installs through the configured command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured install command is empty.
    pub fn from_config(config: SetupConfig) -> Result<Self> {
        let installer = CommandInstaller::from_command(&config.install_command)?;
        Ok(Self {
            config,
            installer: Arc::new(installer),
            cancel: CancelFlag::default(),
        })
    }

    /// Same configuration and installer, fresh cancellation flag.
    #[must_use]
    pub fn with_fresh_cancel(&self) -> Self {
        Self {
            cancel: CancelFlag::default(),
            ..self.clone()
        }
    }
}

/// Runs `action` to completion.
///
/// `logs` is the session log as it was when the action was dispatched; only
/// the save logs action reads it.
pub fn run_action(action: Action, context: &TaskContext, logs: &[String]) -> Outcome {
    debug!("Running {action} action");

    match action {
        Action::Install => install::install(context),
        Action::Configure => configure::configure(&context.config),
        Action::Troubleshoot => troubleshoot::troubleshoot(
            &context.config,
            &CheckEnvironment::from_process(&context.config),
        ),
        Action::SaveLogs => save_logs::save_logs(&context.config, logs),
    }
}
