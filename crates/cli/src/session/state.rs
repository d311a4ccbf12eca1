use log::debug;

use super::types::{Effect, KeyInput, MenuEntry, Phase, SessionEvent};
use hyprsetup_core::tasks::Outcome;

/// The complete state of the interactive session.
///
/// Only [`SessionState::update`] changes it, one event at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub menu: Vec<MenuEntry>,
    /// Index into `menu`, always in bounds
    pub cursor: usize,
    pub selected: Option<MenuEntry>,
    pub logs: Vec<String>,
    pub busy: bool,
    pub exiting: bool,
    /// Progress animation counter, advanced by ticks while busy
    pub tick: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            menu: MenuEntry::ALL.to_vec(),
            cursor: 0,
            selected: None,
            logs: Vec::new(),
            busy: false,
            exiting: false,
            tick: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.exiting {
            Phase::Exiting
        } else if self.busy {
            Phase::Busy
        } else {
            Phase::Idle
        }
    }

    /// Applies one event and returns what the runner should do next.
    pub fn update(&mut self, event: SessionEvent) -> Effect {
        if self.exiting {
            debug!("Session is exiting, dropping {event:?}");
            return Effect::None;
        }

        match event {
            SessionEvent::Key(key) => self.handle_key(key),
            SessionEvent::Outcome(outcome) => {
                self.apply_outcome(outcome);
                Effect::None
            }
            SessionEvent::Notice(notice) => {
                self.logs.push(notice);
                Effect::None
            }
            SessionEvent::Tick => {
                if self.busy {
                    self.tick = self.tick.wrapping_add(1);
                }
                Effect::None
            }
            SessionEvent::InputFailed(reason) => {
                self.exiting = true;
                Effect::Abort(reason)
            }
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Effect {
        match key {
            KeyInput::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Effect::None
            }
            KeyInput::Down => {
                if self.cursor + 1 < self.menu.len() {
                    self.cursor += 1;
                }
                Effect::None
            }
            KeyInput::Enter => self.select_current(),
            KeyInput::Quit => {
                self.exiting = true;
                Effect::Quit
            }
        }
    }

    fn select_current(&mut self) -> Effect {
        let Some(entry) = self.menu.get(self.cursor).copied() else {
            return Effect::None;
        };

        let Some(action) = entry.action() else {
            self.selected = Some(entry);
            self.exiting = true;
            return Effect::Quit;
        };

        if self.busy {
            debug!("Ignoring `{entry}` while another action is running");
            return Effect::None;
        }

        self.selected = Some(entry);
        self.busy = true;
        self.tick = 0;

        Effect::Dispatch {
            action,
            logs: self.logs.clone(),
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        if !self.busy {
            debug!("Discarding outcome with no action in flight: {outcome}");
            return;
        }

        self.logs.extend(outcome.log_lines());
        self.busy = false;
    }
}
