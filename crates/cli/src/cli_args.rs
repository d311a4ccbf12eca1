//! Command-line argument parsing.
//!
//! The assistant is fully interactive, so there are no options beyond the
//! generated `--help` and `--version`.

use clap::Parser;

/// Interactive assistant that installs and configures Hyprland on FreeBSD.
///
/// Run it from the directory containing `hyprland.conf`. Settings are read
/// from `$HYPRSETUP_CONFIG` or `~/.config/hyprsetup/setup.yml` if present.
#[derive(Parser, Debug)]
#[command(version, term_width = 0)]
pub struct Args {}
