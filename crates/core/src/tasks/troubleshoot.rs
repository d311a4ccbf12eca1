//! Diagnostic checks for a Hyprland installation.
//!
//! Checks run in order. A failing check stops the run and its outcome is
//! reported as is; advisories are collected as notes and never stop it.

use std::ffi::OsString;
use std::path::PathBuf;

use log::{info, warn};

use crate::config::SetupConfig;
use crate::error::Error;

use super::Outcome;

pub const NO_ISSUES_FOUND: &str = "No common issues found.";

/// The parts of the process environment the checks look at.
#[derive(Debug, Clone, Default)]
pub struct CheckEnvironment {
    /// Executable search path, in `PATH` format
    pub search_path: Option<OsString>,
    /// Current value of the runtime directory variable
    pub runtime_dir: Option<String>,
    /// Directory relative search path entries are resolved against
    pub working_dir: PathBuf,
}

impl CheckEnvironment {
    /// Captures the current process environment.
    pub fn from_process(config: &SetupConfig) -> Self {
        Self {
            search_path: std::env::var_os("PATH"),
            runtime_dir: std::env::var(&config.runtime_dir.variable).ok(),
            working_dir: std::env::current_dir().unwrap_or_default(),
        }
    }
}

/// Result of a single check.
#[derive(Debug)]
pub enum CheckResult {
    Pass(String),
    Advisory(String),
    Fail(Outcome),
}

type Check = fn(&SetupConfig, &CheckEnvironment) -> CheckResult;

const CHECKS: [Check; 2] = [check_compositor_installed, check_runtime_dir];

/// Runs every check, stopping at the first failure.
pub fn troubleshoot(config: &SetupConfig, environment: &CheckEnvironment) -> Outcome {
    let mut notes = Vec::new();

    for check in CHECKS {
        match check(config, environment) {
            CheckResult::Pass(message) => info!("{message}"),
            CheckResult::Advisory(message) => {
                warn!("{message}");
                notes.push(message);
            }
            CheckResult::Fail(outcome) => return outcome.with_notes(notes),
        }
    }

    Outcome::success(NO_ISSUES_FOUND).with_notes(notes)
}

/// The compositor executable must be on the search path.
pub fn check_compositor_installed(
    config: &SetupConfig,
    environment: &CheckEnvironment,
) -> CheckResult {
    let executable = &config.compositor_executable;

    match which::which_in(
        executable,
        environment.search_path.as_ref(),
        &environment.working_dir,
    ) {
        Ok(path) => {
            info!("Found `{executable}` at `{}`", path.display());
            CheckResult::Pass(format!("{executable} is installed."))
        }
        Err(e) => CheckResult::Fail(Outcome::failure(
            format!("{executable} not found in PATH"),
            &Error::not_found(executable.clone(), e),
        )),
    }
}

/// The runtime directory variable should hold the expected path.
pub fn check_runtime_dir(config: &SetupConfig, environment: &CheckEnvironment) -> CheckResult {
    let variable = &config.runtime_dir.variable;
    let expected = config.expected_runtime_dir();
    let actual = environment.runtime_dir.as_deref().unwrap_or_default();

    if actual == expected {
        CheckResult::Pass(format!("{variable} is correctly set to {expected}."))
    } else {
        CheckResult::Advisory(format!("{variable} is set to {actual}, expected {expected}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_dir_match_passes() {
        let environment = CheckEnvironment {
            runtime_dir: Some("/tmp".to_string()),
            ..CheckEnvironment::default()
        };
        let result = check_runtime_dir(&SetupConfig::default(), &environment);
        assert!(matches!(
            result,
            CheckResult::Pass(message) if message == "XDG_RUNTIME_DIR is correctly set to /tmp."
        ));
    }

    #[test]
    fn test_runtime_dir_mismatch_is_advisory() {
        let environment = CheckEnvironment {
            runtime_dir: Some("/var/run/user/1001".to_string()),
            ..CheckEnvironment::default()
        };
        let result = check_runtime_dir(&SetupConfig::default(), &environment);
        let expected = "XDG_RUNTIME_DIR is set to /var/run/user/1001, expected /tmp";
        assert!(matches!(result, CheckResult::Advisory(message) if message == expected));
    }

    #[test]
    fn test_runtime_dir_unset_is_advisory() {
        let result = check_runtime_dir(&SetupConfig::default(), &CheckEnvironment::default());
        assert!(matches!(
            result,
            CheckResult::Advisory(message) if message == "XDG_RUNTIME_DIR is set to , expected /tmp"
        ));
    }

    #[test]
    fn test_missing_search_path_fails_presence_check() {
        let result =
            check_compositor_installed(&SetupConfig::default(), &CheckEnvironment::default());
        let CheckResult::Fail(outcome) = result else {
            panic!("Expected the presence check to fail");
        };
        assert_eq!(outcome.status, "Hyprland not found in PATH");
        assert!(outcome.is_failure());
    }
}
