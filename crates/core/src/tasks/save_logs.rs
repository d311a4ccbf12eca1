use log::info;

use crate::config::SetupConfig;
use crate::file_handling::{append_lines, LogWriteError};

use super::Outcome;

const OPEN_FAILED: &str = "Failed to open log file for writing";
const WRITE_FAILED: &str = "Failed to write to log file";

/// Appends `logs` to the configured log file, one line each.
pub fn save_logs(config: &SetupConfig, logs: &[String]) -> Outcome {
    let path = match config.resolved_log_file() {
        Ok(path) => path,
        Err(e) => return Outcome::failure(OPEN_FAILED, &e),
    };

    match append_lines(&path, logs) {
        Ok(path) => {
            info!("Wrote {} log lines to `{}`", logs.len(), path.display());
            Outcome::success(format!("Logs saved to {}", path.display()))
        }
        Err(LogWriteError::Open(e)) => Outcome::failure(OPEN_FAILED, &e),
        Err(LogWriteError::Write(e)) => Outcome::failure(WRITE_FAILED, &e),
    }
}
