//! Setup settings and path utilities for hyprsetup.
//!
//! This module holds the [`SetupConfig`] that drives every task, its
//! built-in defaults, and helpers for resolving paths that may contain
//! shell variables like `~`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the optional settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.config/hyprsetup/setup.yml";
/// Environment variable that overrides the settings file path
pub const SETTINGS_PATH_VARIABLE: &str = "HYPRSETUP_CONFIG";

/// Packages installed, in order, by the install action
pub const DEFAULT_PACKAGES: [&str; 10] = [
    "hyprland",
    "wlroots",
    "xwayland",
    "waybar",
    "grim",
    "jq",
    "wofi",
    "alacritty",
    "pam_xdg",
    "hyprpaper",
];

/// Command prefix the package name is appended to
pub const DEFAULT_INSTALL_COMMAND: [&str; 4] = ["sudo", "pkg", "install", "-y"];

pub const DEFAULT_INSTALL_DELAY_MS: u64 = 500;
pub const DEFAULT_CONFIG_FILE_NAME: &str = "hyprland.conf";
pub const DEFAULT_CONFIG_DIR: &str = "~/.config/hypr";
pub const DEFAULT_LOG_FILE_NAME: &str = "hyprland_setup.log";
pub const DEFAULT_COMPOSITOR_EXECUTABLE: &str = "Hyprland";
pub const DEFAULT_RUNTIME_DIR_VARIABLE: &str = "XDG_RUNTIME_DIR";
pub const DEFAULT_RUNTIME_DIR: &str = "/tmp";

/// The runtime directory that is ensured before the session starts.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeDirConfig {
    /// Environment variable naming the runtime directory
    pub variable: String,
    /// Value the variable is set to
    pub path: String,
    /// Whether to create `path` when it does not exist
    pub create_if_missing: bool,
}

impl Default for RuntimeDirConfig {
    fn default() -> Self {
        Self {
            variable: DEFAULT_RUNTIME_DIR_VARIABLE.to_string(),
            path: DEFAULT_RUNTIME_DIR.to_string(),
            create_if_missing: true,
        }
    }
}

/// Everything the tasks need to know about the target system.
///
/// Every field has a default, so a settings file only has to name the
/// values it changes.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SetupConfig {
    pub packages: Vec<String>,
    pub install_command: Vec<String>,
    pub install_delay_ms: u64,
    /// Configuration file copied into place, relative to the working directory
    pub config_source: String,
    /// Destination directory, may start with `~`
    pub config_dir: String,
    pub config_file_name: String,
    /// Session log destination, defaults to the platform temp directory
    pub log_file: Option<String>,
    pub compositor_executable: String,
    pub runtime_dir: RuntimeDirConfig,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            packages: DEFAULT_PACKAGES.iter().map(ToString::to_string).collect(),
            install_command: DEFAULT_INSTALL_COMMAND
                .iter()
                .map(ToString::to_string)
                .collect(),
            install_delay_ms: DEFAULT_INSTALL_DELAY_MS,
            config_source: DEFAULT_CONFIG_FILE_NAME.to_string(),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            config_file_name: DEFAULT_CONFIG_FILE_NAME.to_string(),
            log_file: None,
            compositor_executable: DEFAULT_COMPOSITOR_EXECUTABLE.to_string(),
            runtime_dir: RuntimeDirConfig::default(),
        }
    }
}

impl SetupConfig {
    /// Resolves the directory the configuration file is copied into.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeNotFound`] if the path starts with `~` and no
    /// home directory is known.
    pub fn resolved_config_dir(&self) -> Result<PathBuf> {
        expand_home(&self.config_dir)
    }

    /// Resolves the file the session log is appended to.
    ///
    /// # Errors
    ///
    /// See [`SetupConfig::resolved_config_dir`].
    pub fn resolved_log_file(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(log_file) => expand_home(log_file),
            None => Ok(std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME)),
        }
    }

    /// The value the runtime directory variable is expected to hold.
    pub fn expected_runtime_dir(&self) -> &str {
        &self.runtime_dir.path
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use hyprsetup_core::config::get_settings_path;
///
/// let custom_path = get_settings_path(&Some("/etc/hyprsetup.yml".to_string()));
/// assert_eq!(custom_path, "/etc/hyprsetup.yml");
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}

fn expand_home(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(path);
    if expanded.starts_with('~') {
        return Err(Error::HomeNotFound(path.to_string()));
    }

    Ok(PathBuf::from(expanded.into_owned()))
}
