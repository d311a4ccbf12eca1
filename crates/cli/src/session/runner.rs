//! The session event loop.
//!
//! Keys, ticks, notices and action outcomes all arrive through one unbounded
//! channel and are applied to the [`SessionState`] in arrival order. Actions
//! run on a blocking worker and report back through the same channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyprsetup_core::error::{Error, Result};
use hyprsetup_core::tasks::{run_action, Action, CancelFlag, TaskContext};
use log::{debug, info};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::input::forward_key_events;
use super::state::SessionState;
use super::terminal::{draw, print_plain, RawModeGuard};
use super::types::{Effect, SessionEvent};
use super::view::{render, View};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// The action currently running in the background.
struct ActiveTask {
    action: Action,
    cancel: CancelFlag,
    handle: JoinHandle<()>,
}

/// Owns the session state and the action in flight.
pub struct Controller {
    state: SessionState,
    context: TaskContext,
    events: UnboundedSender<SessionEvent>,
    active: Option<ActiveTask>,
}

impl Controller {
    pub fn new(context: TaskContext, events: UnboundedSender<SessionEvent>) -> Self {
        Self {
            state: SessionState::new(),
            context,
            events,
            active: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Applies `event`, starting an action if it asks for one.
    ///
    /// Must be called from within a tokio runtime. Returns `false` once the
    /// session should stop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalInput`] when the key reader has failed.
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<bool> {
        if matches!(event, SessionEvent::Outcome(_)) {
            if let Some(task) = self.active.take() {
                debug!("{} action finished", task.action);
            }
        }

        match self.state.update(event) {
            Effect::None => Ok(true),
            Effect::Dispatch { action, logs } => {
                self.active = Some(self.dispatch(action, logs));
                Ok(true)
            }
            Effect::Quit => Ok(false),
            Effect::Abort(reason) => Err(Error::TerminalInput(reason)),
        }
    }

    fn dispatch(&self, action: Action, logs: Vec<String>) -> ActiveTask {
        info!("Dispatching {action} action");

        let context = self.context.with_fresh_cancel();
        let cancel = context.cancel.clone();
        let events = self.events.clone();

        let handle = tokio::task::spawn_blocking(move || {
            let outcome = run_action(action, &context, &logs);
            if context.cancel.is_cancelled() {
                debug!("{action} action finished after cancellation: {outcome}");
                return;
            }
            if events.send(SessionEvent::Outcome(outcome)).is_err() {
                debug!("Session closed before the {action} action finished");
            }
        });

        ActiveTask {
            action,
            cancel,
            handle,
        }
    }

    /// Signals the action in flight to stop. It is not awaited.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.active.take() {
            info!("Cancelling {} action", task.action);
            task.cancel.cancel();
            drop(task.handle);
        }
    }

    #[must_use]
    pub fn has_active_task(&self) -> bool {
        self.active.is_some()
    }
}

async fn forward_ticks(events: UnboundedSender<SessionEvent>) {
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    loop {
        interval.tick().await;
        if events.send(SessionEvent::Tick).is_err() {
            return;
        }
    }
}

/// Runs the interactive session until the user exits.
///
/// `notices` are appended to the log before any key is handled.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub async fn run_session(context: TaskContext, notices: Vec<String>) -> Result<()> {
    let (events_tx, events_rx) = mpsc::unbounded_channel();

    for notice in notices {
        // The receiver is alive until this function returns
        let _ = events_tx.send(SessionEvent::Notice(notice));
    }

    let raw_mode_guard = RawModeGuard::enter()?;

    let stop_keys = Arc::new(AtomicBool::new(false));
    let key_reader = {
        let events = events_tx.clone();
        let stop = stop_keys.clone();
        tokio::task::spawn_blocking(move || forward_key_events(&events, &stop))
    };
    let ticker = tokio::spawn(forward_ticks(events_tx.clone()));

    let mut controller = Controller::new(context, events_tx);
    let result = event_loop(&mut controller, events_rx, draw).await;

    stop_keys.store(true, Ordering::SeqCst);
    ticker.abort();
    controller.shutdown();
    drop(key_reader);
    drop(raw_mode_guard);

    // The alternate screen is gone, leave the last view on the normal one
    let printed = match farewell_view(controller.state()) {
        Some(view) => print_plain(&view),
        None => Ok(()),
    };

    result.and(printed)
}

/// The view left on the normal screen once the session has exited.
fn farewell_view(state: &SessionState) -> Option<View> {
    state.exiting.then(|| render(state))
}

async fn event_loop<F>(
    controller: &mut Controller,
    mut events: UnboundedReceiver<SessionEvent>,
    mut paint: F,
) -> Result<()>
where
    F: FnMut(&View) -> Result<()>,
{
    let mut last_view: Option<View> = None;

    loop {
        let view = render(controller.state());
        if last_view.as_ref() != Some(&view) {
            paint(&view)?;
            last_view = Some(view);
        }

        let Some(event) = events.recv().await else {
            return Ok(());
        };

        if !controller.handle_event(event)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc as std_mpsc;
    use std::sync::Mutex;

    use super::*;
    use crate::session::types::KeyInput;
    use hyprsetup_core::config::SetupConfig;
    use hyprsetup_core::execution::PackageInstaller;

    fn controller() -> (Controller, UnboundedReceiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let context = TaskContext::from_config(SetupConfig::default()).unwrap();
        (Controller::new(context, events_tx), events_rx)
    }

    /// Blocks every install until the test releases it.
    struct GatedInstaller {
        started: Mutex<std_mpsc::Sender<()>>,
        release: Mutex<std_mpsc::Receiver<()>>,
    }

    impl PackageInstaller for GatedInstaller {
        fn install(&self, _package: &str) -> Result<()> {
            let _ = self.started.lock().unwrap().send(());
            let _ = self.release.lock().unwrap().recv();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_configure_round_trip_through_channel() {
        let (mut controller, mut events) = controller();
        controller.handle_event(SessionEvent::Key(KeyInput::Down)).unwrap();
        assert!(controller.handle_event(SessionEvent::Key(KeyInput::Enter)).unwrap());
        assert!(controller.has_active_task());

        let event = events.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::Outcome(_)));
        controller.handle_event(event).unwrap();

        assert!(!controller.has_active_task());
        assert!(!controller.state().busy);
        assert_eq!(controller.state().logs, vec!["Configuration completed."]);
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let (mut controller, _events) = controller();
        assert!(!controller.handle_event(SessionEvent::Key(KeyInput::Quit)).unwrap());
        assert!(controller.state().exiting);
    }

    #[tokio::test]
    async fn test_input_failure_ends_session_with_error() {
        let (mut controller, _events) = controller();
        let result = controller.handle_event(SessionEvent::InputFailed("EOF".to_string()));
        assert!(matches!(result, Err(Error::TerminalInput(reason)) if reason == "EOF"));
        assert!(controller.state().exiting);
    }

    #[tokio::test]
    async fn test_event_loop_returns_error_after_input_failure() {
        let (mut controller, _unused) = controller();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        events_tx.send(SessionEvent::InputFailed("EOF".to_string())).unwrap();

        let mut painted = 0;
        let result = event_loop(&mut controller, events_rx, |_| {
            painted += 1;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(Error::TerminalInput(_))));
        assert_eq!(painted, 1);
    }

    #[tokio::test]
    async fn test_cancelled_action_never_delivers_outcome() {
        let (started_tx, started_rx) = std_mpsc::channel();
        let (release_tx, release_rx) = std_mpsc::channel();
        let mut context = TaskContext::from_config(SetupConfig {
            // The second package is where the worker notices the cancellation
            packages: vec!["hyprland".to_string(), "wlroots".to_string()],
            install_delay_ms: 0,
            ..SetupConfig::default()
        })
        .unwrap();
        context.installer = Arc::new(GatedInstaller {
            started: Mutex::new(started_tx),
            release: Mutex::new(release_rx),
        });

        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(context, events_tx);
        controller.handle_event(SessionEvent::Key(KeyInput::Enter)).unwrap();

        // The install is now parked inside the installer
        tokio::task::spawn_blocking(move || started_rx.recv())
            .await
            .unwrap()
            .unwrap();

        controller.shutdown();
        assert!(!controller.has_active_task());
        drop(controller);
        release_tx.send(()).unwrap();

        // Every sender is gone once the worker returns without sending
        let next = tokio::time::timeout(Duration::from_secs(5), events_rx.recv())
            .await
            .unwrap();
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_farewell_view_only_after_exit() {
        let (mut controller, _events) = controller();
        assert!(farewell_view(controller.state()).is_none());

        controller.handle_event(SessionEvent::Notice("saved".to_string())).unwrap();
        controller.handle_event(SessionEvent::Key(KeyInput::Quit)).unwrap();

        let view = farewell_view(controller.state()).unwrap();
        assert!(view.to_plain_text().ends_with("\n\nExiting..."));
    }
}
