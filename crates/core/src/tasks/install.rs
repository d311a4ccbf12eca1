use std::path::Path;
use std::thread;
use std::time::Duration;

use itertools::Itertools;
use log::{info, warn};

use crate::config::SetupConfig;
use crate::file_handling::{copy_file_verbatim, ensure_directory, CopyError};

use super::{Outcome, TaskContext};

pub const INSTALL_COMPLETED: &str =
    "Hyprland installation and configuration completed successfully.";
pub const INSTALL_CANCELLED: &str = "Installation cancelled";

/// Installs every configured package in order, then copies the configuration
/// file into place.
///
/// The first failing package stops the action; later packages are not
/// attempted and the configuration is not copied.
pub fn install(context: &TaskContext) -> Outcome {
    let config = &context.config;
    info!("Installing packages: {}", config.packages.iter().join(", "));

    let delay = Duration::from_millis(config.install_delay_ms);

    for package in &config.packages {
        if context.cancel.is_cancelled() {
            warn!("Installation cancelled before `{package}`");
            return Outcome::failure_with_detail(
                INSTALL_CANCELLED,
                format!("stopped before {package}"),
            );
        }

        if let Err(e) = context.installer.install(package) {
            warn!("Installing `{package}` failed: {e}");
            return Outcome::failure(format!("Failed to install {package}"), &e);
        }

        if !delay.is_zero() {
            thread::sleep(delay);
        }
        info!("Successfully installed {package}");
    }

    copy_configuration(config)
}

fn copy_configuration(config: &SetupConfig) -> Outcome {
    const CREATE_FAILED: &str = "Failed to create hypr configuration directory";

    let config_dir = match config.resolved_config_dir() {
        Ok(config_dir) => config_dir,
        Err(e) => return Outcome::failure(CREATE_FAILED, &e),
    };

    if let Err(e) = ensure_directory("hypr configuration directory", &config_dir) {
        return Outcome::failure(CREATE_FAILED, &e);
    }

    let destination = config_dir.join(&config.config_file_name);
    info!(
        "Copying `{}` to `{}`",
        config.config_source,
        destination.display()
    );

    match copy_file_verbatim(Path::new(&config.config_source), &destination) {
        Ok(()) => Outcome::success(INSTALL_COMPLETED),
        Err(CopyError::Read(e)) => {
            Outcome::failure(format!("Failed to read {}", config.config_source), &e)
        }
        Err(CopyError::Write(e)) => {
            Outcome::failure(format!("Failed to write {}", config.config_file_name), &e)
        }
    }
}
