//! The interactive setup session.
//!
//! This module provides the terminal-based user interface for hyprsetup:
//! a fixed menu, a log of action outcomes and the event loop that runs
//! actions in the background.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter to run the entry under the cursor
//! - 'q' or Ctrl+C to quit

pub mod input;
pub mod runner;
pub mod state;
pub mod terminal;
pub mod types;
pub mod view;

// Re-exports for convenience
pub use runner::{run_session, Controller};
pub use state::SessionState;
pub use types::{Effect, KeyInput, MenuEntry, Phase, SessionEvent};
pub use view::render;
