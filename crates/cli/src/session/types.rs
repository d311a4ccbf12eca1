//! Type definitions for the interactive session.
//!
//! This module defines the menu entries, the events the session consumes
//! and the effects it asks the runner to perform.

use std::fmt::{Display, Formatter};

use hyprsetup_core::tasks::{Action, Outcome};

/// A fixed entry of the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Install,
    Configure,
    Troubleshoot,
    SaveLogs,
    Exit,
}

impl MenuEntry {
    /// Menu entries in display order.
    pub const ALL: [MenuEntry; 5] = [
        MenuEntry::Install,
        MenuEntry::Configure,
        MenuEntry::Troubleshoot,
        MenuEntry::SaveLogs,
        MenuEntry::Exit,
    ];

    /// The task runner action behind this entry, `None` for `Exit`.
    #[must_use]
    pub fn action(self) -> Option<Action> {
        match self {
            MenuEntry::Install => Some(Action::Install),
            MenuEntry::Configure => Some(Action::Configure),
            MenuEntry::Troubleshoot => Some(Action::Troubleshoot),
            MenuEntry::SaveLogs => Some(Action::SaveLogs),
            MenuEntry::Exit => None,
        }
    }
}

impl Display for MenuEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MenuEntry::Install => "Install Hyprland",
            MenuEntry::Configure => "Configure Hyprland",
            MenuEntry::Troubleshoot => "Troubleshoot",
            MenuEntry::SaveLogs => "Save Logs",
            MenuEntry::Exit => "Exit",
        })
    }
}

/// Keyboard input after mapping from terminal key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Enter,
    Quit,
}

/// Everything the session reacts to, delivered through one ordered queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Key(KeyInput),
    /// Completion of the action in flight
    Outcome(Outcome),
    /// A line for the log that does not come from an action
    Notice(String),
    /// Progress animation step
    Tick,
    /// The terminal can no longer be read
    InputFailed(String),
}

/// What the runner should do after an event has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start `action` with a snapshot of the log
    Dispatch { action: Action, logs: Vec<String> },
    Quit,
    /// End the session with an error
    Abort(String),
}

/// Session phase, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
    Exiting,
}
