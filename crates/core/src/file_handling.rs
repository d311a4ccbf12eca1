//! File handling for hyprsetup.
//!
//! This module reads the optional settings file, copies the compositor
//! configuration into place and appends session logs to disk.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::SetupConfig;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads the setup settings from disk.
///
/// Returns the built-in defaults if the file does not exist. Fields that are
/// missing from the file keep their default values.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The install command is empty
pub fn get_setup_config(settings_path: &str) -> Result<SetupConfig> {
    if !Path::new(settings_path).exists() {
        debug!("No settings file at `{settings_path}`, using defaults");
        return Ok(SetupConfig::default());
    }

    let reader = get_reader("settings", settings_path)?;

    let config: SetupConfig = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    if config.install_command.is_empty() {
        return Err(Error::EmptyInstallCommand);
    }

    Ok(config)
}

/// Creates `directory` and any missing parents.
///
/// # Errors
///
/// Returns [`Error::Io`] if creation fails for any reason other than the
/// directory already existing.
pub fn ensure_directory(file_description: &str, directory: &Path) -> Result<()> {
    fs::create_dir_all(directory).map_err(|e| {
        Error::io_error(
            file_description.to_string(),
            directory.display().to_string(),
            e,
        )
    })
}

/// Copies the bytes of `source` verbatim to `destination`, overwriting it.
///
/// The parent directory of `destination` must already exist.
///
/// # Errors
///
/// Returns [`CopyError::Read`] or [`CopyError::Write`] naming the step that
/// failed.
pub fn copy_file_verbatim(source: &Path, destination: &Path) -> std::result::Result<(), CopyError> {
    let contents = fs::read(source).map_err(|e| {
        CopyError::Read(Error::io_error(
            "configuration source".to_string(),
            source.display().to_string(),
            e,
        ))
    })?;

    fs::write(destination, contents).map_err(|e| {
        CopyError::Write(Error::io_error(
            "configuration destination".to_string(),
            destination.display().to_string(),
            e,
        ))
    })
}

/// The step of [`copy_file_verbatim`] that failed.
#[derive(Debug)]
pub enum CopyError {
    Read(Error),
    Write(Error),
}

/// Appends every line, each followed by a newline, to `path`.
///
/// The file is created if it does not exist. The handle is closed on every
/// return path.
///
/// # Errors
///
/// Returns [`LogWriteError::Open`] or [`LogWriteError::Write`] naming the
/// step that failed.
pub fn append_lines(path: &Path, lines: &[String]) -> std::result::Result<PathBuf, LogWriteError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| {
            LogWriteError::Open(Error::io_error(
                "log file".to_string(),
                path.display().to_string(),
                e,
            ))
        })?;

    for line in lines {
        writeln!(file, "{line}").map_err(|e| {
            LogWriteError::Write(Error::io_error(
                "log file".to_string(),
                path.display().to_string(),
                e,
            ))
        })?;
    }

    Ok(path.to_path_buf())
}

/// The step of [`append_lines`] that failed.
#[derive(Debug)]
pub enum LogWriteError {
    Open(Error),
    Write(Error),
}
