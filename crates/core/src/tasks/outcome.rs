use std::fmt::{Display, Formatter};

use crate::error::Error;

/// The single message a task produces when it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Human-readable status
    pub status: String,
    /// Error detail when the task failed
    pub error: Option<String>,
    /// Non-fatal advisories gathered while the task ran
    pub notes: Vec<String>,
}

impl Outcome {
    pub fn success(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            error: None,
            notes: Vec::new(),
        }
    }

    pub fn failure(status: impl Into<String>, error: &Error) -> Self {
        Self::failure_with_detail(status, error_detail(error))
    }

    pub fn failure_with_detail(status: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            error: Some(detail.into()),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Lines appended to the session log: notes, then the status, then the
    /// error if there is one.
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = self.notes.clone();
        lines.push(self.status.clone());
        if let Some(error) = &self.error {
            lines.push(format!("Error: {error}"));
        }
        lines
    }
}

impl Display for Outcome {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.status)?;
        if let Some(error) = &self.error {
            write!(formatter, " ({error})")?;
        }
        Ok(())
    }
}

/// A failed command is described by what it printed, anything else by its
/// error message.
fn error_detail(error: &Error) -> String {
    match error {
        Error::CommandFailure { output, .. } => output.trim_end().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_log_lines() {
        let outcome = Outcome::success("Configuration completed.");
        assert_eq!(outcome.log_lines(), vec!["Configuration completed."]);
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_failure_log_lines_include_error() {
        let outcome = Outcome::failure_with_detail("Failed to install jq", "pkg: not found");
        assert_eq!(
            outcome.log_lines(),
            vec!["Failed to install jq", "Error: pkg: not found"]
        );
    }

    #[test]
    fn test_notes_come_before_status() {
        let outcome = Outcome::success("No common issues found.")
            .with_notes(vec!["XDG_RUNTIME_DIR is set to , expected /tmp".to_string()]);
        assert_eq!(
            outcome.log_lines(),
            vec![
                "XDG_RUNTIME_DIR is set to , expected /tmp",
                "No common issues found."
            ]
        );
    }

    #[test]
    fn test_command_failure_detail_is_output() {
        let error = Error::command_failure(
            "sudo pkg install -y grim".to_string(),
            "pkg: repository unavailable\n".to_string(),
        );
        let outcome = Outcome::failure("Failed to install grim", &error);
        assert_eq!(outcome.error.as_deref(), Some("pkg: repository unavailable"));
    }
}
