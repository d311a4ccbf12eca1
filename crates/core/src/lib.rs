//! Hyprsetup Core Library
//!
//! This crate provides the core functionality for hyprsetup, a terminal
//! assistant that installs and configures the Hyprland compositor on FreeBSD.
//! It has no terminal dependencies; the interactive session lives in
//! `hyprsetup-cli`.
//!
//! # Key Features
//!
//! - **Setup Settings**: Built-in defaults with an optional YAML override file
//! - **Package Installation**: Sequential installs through the system package manager
//! - **Configuration Copy**: Byte-for-byte copy of `hyprland.conf` into `~/.config/hypr`
//! - **Diagnostics**: Search path and runtime directory checks
//! - **Error Handling**: Error types for every failure mode
//!
//! # Examples
//!
//! Running the troubleshoot action:
//!
//! ```no_run
//! use hyprsetup_core::config::SetupConfig;
//! use hyprsetup_core::tasks::{run_action, Action, TaskContext};
//!
//! let context = TaskContext::from_config(SetupConfig::default())?;
//! let outcome = run_action(Action::Troubleshoot, &context, &[]);
//! println!("{outcome}");
//! # Ok::<(), hyprsetup_core::error::Error>(())
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod tasks;
