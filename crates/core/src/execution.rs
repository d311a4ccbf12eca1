use std::process::{Command, Stdio};

use itertools::Itertools;
use log::{debug, info};

use crate::error::{Error, Result};

/// Installs a single package by name.
pub trait PackageInstaller: Send + Sync {
    /// # Errors
    ///
    /// Returns [`Error::CommandFailure`] carrying the captured output if the
    /// install did not succeed.
    fn install(&self, package: &str) -> Result<()>;
}

/// Installs packages through an external command such as `sudo pkg install -y`.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
    arguments: Vec<String>,
}

impl CommandInstaller {
    /// Builds an installer from a command prefix; the package name is appended
    /// as the final argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInstallCommand`] if `command` is empty.
    pub fn from_command(command: &[String]) -> Result<Self> {
        let (program, arguments) = command.split_first().ok_or(Error::EmptyInstallCommand)?;
        Ok(Self {
            program: program.clone(),
            arguments: arguments.to_vec(),
        })
    }

    fn describe(&self, package: &str) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.arguments.iter().map(String::as_str))
            .chain(std::iter::once(package))
            .join(" ")
    }
}

impl PackageInstaller for CommandInstaller {
    fn install(&self, package: &str) -> Result<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.arguments).arg(package);

        let description = self.describe(package);
        info!("Running `{description}`");
        execute_captured(command, &description)
    }
}

/// Runs a command to completion with stdin closed, capturing stdout and stderr.
///
/// # Errors
///
/// Returns [`Error::CommandSpawn`] if the process could not be started, or
/// [`Error::CommandFailure`] with the combined output if it exits with a
/// non-zero status.
pub fn execute_captured(mut command: Command, description: &str) -> Result<()> {
    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|original| Error::CommandSpawn {
            command: description.to_string(),
            original,
        })?;

    if output.status.success() {
        debug!("`{description}` exited with {}", output.status);
        return Ok(());
    }

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Err(Error::command_failure(description.to_string(), combined))
}
