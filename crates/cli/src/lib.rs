//! Hyprsetup CLI Library
//!
//! This crate provides the interactive terminal session for hyprsetup. It
//! owns the session state machine, renders it and runs the actions from
//! `hyprsetup-core` in the background.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`session`]: Session state, rendering and the event loop
//!
//! # Examples
//!
//! The binary (`hyprsetup`) takes no options:
//!
//! ```bash
//! # Run the assistant from the directory holding hyprland.conf
//! hyprsetup
//!
//! # With task progress logged to a file
//! RUST_LOG=info hyprsetup 2>hyprsetup.log
//! ```

pub mod cli_args;
pub mod session;
