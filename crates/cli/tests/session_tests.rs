#[cfg(test)]
mod tests {
    use std::fs;

    use hyprsetup_cli::session::{
        render, Controller, KeyInput, MenuEntry, Phase, SessionEvent, SessionState,
    };
    use hyprsetup_core::config::SetupConfig;
    use hyprsetup_core::tasks::{Outcome, TaskContext};
    use tempfile::tempdir;
    use tokio::sync::mpsc;

    fn press(state: &mut SessionState, key: KeyInput) {
        state.update(SessionEvent::Key(key));
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_any_sequence() {
        let menu_len = MenuEntry::ALL.len();
        // Deterministic pseudo-random up/down walks
        for seed in 1u32..64 {
            let mut state = SessionState::new();
            let mut value = seed;
            for _ in 0..200 {
                value = value.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let key = if value & 0x100 == 0 {
                    KeyInput::Up
                } else {
                    KeyInput::Down
                };
                press(&mut state, key);
                assert!(state.cursor < menu_len);
            }
        }
    }

    #[test]
    fn test_enter_on_exit_always_terminates() {
        for log_count in [0usize, 1, 25] {
            let mut state = SessionState::new();
            for i in 0..log_count {
                state.update(SessionEvent::Notice(format!("line {i}")));
            }
            for _ in 0..MenuEntry::ALL.len() {
                press(&mut state, KeyInput::Down);
            }
            press(&mut state, KeyInput::Enter);
            assert_eq!(state.phase(), Phase::Exiting);
            assert_eq!(state.selected, Some(MenuEntry::Exit));
        }
    }

    #[test]
    fn test_enter_on_exit_while_busy_terminates() {
        let mut state = SessionState::new();
        press(&mut state, KeyInput::Enter);
        for _ in 0..MenuEntry::ALL.len() {
            press(&mut state, KeyInput::Down);
        }
        press(&mut state, KeyInput::Enter);
        assert_eq!(state.phase(), Phase::Exiting);
    }

    #[test]
    fn test_outcomes_accumulate_in_order() {
        let mut state = SessionState::new();
        press(&mut state, KeyInput::Enter);
        state.update(SessionEvent::Outcome(Outcome::failure_with_detail(
            "Failed to install hyprland",
            "pkg: No packages available",
        )));
        press(&mut state, KeyInput::Down);
        press(&mut state, KeyInput::Enter);
        state.update(SessionEvent::Outcome(Outcome::success("Configuration completed.")));

        assert_eq!(
            state.logs,
            vec![
                "Failed to install hyprland",
                "Error: pkg: No packages available",
                "Configuration completed."
            ]
        );
        let text = render(&state).to_plain_text();
        assert!(text.contains("Selected: Configure Hyprland"));
        assert!(text.ends_with("Configuration completed."));
    }

    #[tokio::test]
    async fn test_save_logs_from_session_writes_snapshot() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("session.log");
        let config = SetupConfig {
            log_file: Some(log_path.to_string_lossy().into_owned()),
            ..SetupConfig::default()
        };
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let mut controller = Controller::new(TaskContext::from_config(config).unwrap(), events_tx);

        let notice = SessionEvent::Notice("Initializing Hyprland Setup...".to_string());
        controller.handle_event(notice).unwrap();
        for _ in 0..3 {
            controller.handle_event(SessionEvent::Key(KeyInput::Down)).unwrap();
        }
        controller.handle_event(SessionEvent::Key(KeyInput::Enter)).unwrap();
        assert_eq!(controller.state().phase(), Phase::Busy);

        let outcome = events_rx.recv().await.unwrap();
        controller.handle_event(outcome).unwrap();

        assert_eq!(controller.state().phase(), Phase::Idle);
        assert_eq!(
            controller.state().logs,
            vec![
                "Initializing Hyprland Setup...".to_string(),
                format!("Logs saved to {}", log_path.display()),
            ]
        );
        assert_eq!(
            fs::read_to_string(&log_path).unwrap(),
            "Initializing Hyprland Setup...\n"
        );
    }
}
