use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error};
use tokio::sync::mpsc::UnboundedSender;

use super::types::{KeyInput, SessionEvent};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a terminal key event to session input, ignoring unbound keys.
#[must_use]
pub fn map_key_event(key_event: KeyEvent) -> Option<KeyInput> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(KeyInput::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyInput::Down),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Quit)
        }
        KeyCode::Char('q') => Some(KeyInput::Quit),
        _ => None,
    }
}

/// Reads terminal key events and forwards them until `stop` is raised or
/// the session stops listening.
///
/// Blocks the calling thread; run it on a blocking worker.
pub fn forward_key_events(events: &UnboundedSender<SessionEvent>, stop: &Arc<AtomicBool>) {
    forward_events_from(events, stop, || {
        if event::poll(POLL_INTERVAL)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    });
}

/// Forwards key events produced by `next_event`, which returns `Ok(None)`
/// when nothing arrived in time.
///
/// A read error is reported as [`SessionEvent::InputFailed`] and ends the
/// loop, so the session never waits on a reader that has stopped.
pub fn forward_events_from<F>(
    events: &UnboundedSender<SessionEvent>,
    stop: &Arc<AtomicBool>,
    mut next_event: F,
) where
    F: FnMut() -> io::Result<Option<Event>>,
{
    while !stop.load(Ordering::SeqCst) {
        match next_event() {
            Ok(Some(Event::Key(key_event))) => {
                let Some(key) = map_key_event(key_event) else {
                    continue;
                };
                if events.send(SessionEvent::Key(key)).is_err() {
                    debug!("Session closed, stopping key reader");
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!("Reading terminal events failed: {e}");
                let _ = events.send(SessionEvent::InputFailed(e.to_string()));
                return;
            }
        }
    }
}
