use std::env;
use std::process::ExitCode;

use clap::Parser;
use hyprsetup_cli::cli_args::Args;
use hyprsetup_cli::session::run_session;
use hyprsetup_core::config::{self, SETTINGS_PATH_VARIABLE};
use hyprsetup_core::error::Result;
use hyprsetup_core::tasks::TaskContext;
use hyprsetup_core::{environment, file_handling};
use log::{debug, warn};

const STARTUP_NOTICE: &str = "Initializing Hyprland Setup...";

fn execute() -> Result<()> {
    let _args = Args::parse();

    let settings_path = config::get_settings_path(&env::var(SETTINGS_PATH_VARIABLE).ok());
    debug!("Settings path: `{}`", settings_path);
    let setup_config = file_handling::get_setup_config(&settings_path)?;

    let mut notices = vec![STARTUP_NOTICE.to_string()];

    // Must happen before the runtime starts any worker threads
    if let Err(e) = environment::prepare_runtime_dir(&setup_config.runtime_dir) {
        warn!("Preparing the runtime directory failed: {e}");
        notices.push(format!("Warning: {e}"));
    }

    let context = TaskContext::from_config(setup_config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run_session(context, notices));

    // Background actions still running are abandoned, not awaited
    runtime.shutdown_background();

    result
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
