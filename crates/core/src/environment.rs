//! Process environment preparation.

use std::fs::DirBuilder;
use std::path::Path;

use log::info;

use crate::config::RuntimeDirConfig;
use crate::error::{Error, Result};

/// Sets the runtime directory variable and creates the directory if needed.
///
/// Must be called once, before any background work is started, since it
/// mutates the process environment.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory is missing and cannot be created.
/// The variable is set regardless.
pub fn prepare_runtime_dir(runtime_dir: &RuntimeDirConfig) -> Result<()> {
    std::env::set_var(&runtime_dir.variable, &runtime_dir.path);
    info!("Set {} to {}", runtime_dir.variable, runtime_dir.path);

    let path = Path::new(&runtime_dir.path);
    if !runtime_dir.create_if_missing || path.exists() {
        return Ok(());
    }

    create_private_dir(path).map_err(|e| {
        Error::io_error(
            "runtime directory".to_string(),
            runtime_dir.path.clone(),
            e,
        )
    })
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    DirBuilder::new().mode(0o700).create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    DirBuilder::new().create(path)
}
