use crate::app::AppState;
use crate::domain::{BreakTier, CountdownMode, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => match app.mode() {
            CountdownMode::Idle => handle_idle_mode(app, key),
            CountdownMode::TaskRunning | CountdownMode::TaskPaused => handle_task_mode(app, key),
            CountdownMode::BreakRunning | CountdownMode::BreakPaused => {
                handle_break_mode(app, key)
            }
        },
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmClear => handle_confirm_clear_mode(app, key),
    }
}

/// Keys while no countdown is active
fn handle_idle_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Start the selected task
        KeyCode::Enter | KeyCode::Char('s') => app.start_selected(),

        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),

        // Spend banked time
        KeyCode::Char('1') => app.start_break(BreakTier::Short),
        KeyCode::Char('2') => app.start_break(BreakTier::Medium),
        KeyCode::Char('3') => app.start_break(BreakTier::Long),

        KeyCode::Char('C') => app.request_clear_all(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Keys while a task countdown is shown
fn handle_task_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_countdown(),
        KeyCode::Enter | KeyCode::Char('c') => app.complete_task(),
        KeyCode::Esc | KeyCode::Char('x') => app.cancel_task(),
        KeyCode::Char('C') => app.request_clear_all(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Keys while a break countdown is shown
fn handle_break_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_countdown(),
        KeyCode::Enter | KeyCode::Char('e') => app.end_break_early(),
        KeyCode::Esc | KeyCode::Char('x') => app.cancel_break(),
        KeyCode::Char('C') => app.request_clear_all(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

/// Handle keys in the add-task form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        // Chords like Ctrl+W or Alt+B are not text
        KeyCode::Char(_)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys in the clear-all confirmation
fn handle_confirm_clear_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear_all(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.dismiss_clear_all(),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::persistence::{MemoryStore, SAVED_TIME_KEY};

    fn create_test_app(saved_seconds: u64) -> AppState {
        let config = AppConfig {
            notifications: false,
            ..AppConfig::default()
        };
        let store = MemoryStore::new().with_value(SAVED_TIME_KEY, &saved_seconds.to_string());
        let mut app = AppState::new(Box::new(store), &config);
        app.add_tasks("Test task", "10", "2");
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app(0);

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_task_flow() {
        let mut app = create_test_app(0);

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode(), CountdownMode::TaskRunning);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.mode(), CountdownMode::TaskPaused);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        app.tick();
        handle_key(&mut app, key(KeyCode::Char('c')));

        assert_eq!(app.mode(), CountdownMode::Idle);
        assert_eq!(app.saved_seconds(), 599);
        assert_eq!(app.registry.len(), 1);
    }

    #[test]
    fn test_task_cancel_with_esc() {
        let mut app = create_test_app(0);
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode(), CountdownMode::Idle);
        assert_eq!(app.registry.len(), 2);
    }

    #[test]
    fn test_break_keys() {
        let mut app = create_test_app(900);

        // 30 minutes is not affordable
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.mode(), CountdownMode::Idle);

        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.mode(), CountdownMode::BreakRunning);
        assert_eq!(app.saved_seconds(), 0);

        // Task keys do nothing during a break
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.mode(), CountdownMode::BreakRunning);

        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode(), CountdownMode::Idle);
        assert_eq!(app.saved_seconds(), 900);
    }

    #[test]
    fn test_add_task_form() {
        let mut app = create_test_app(0);

        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // Typing 'q' in the form is text, not quit
        type_text(&mut app, "Read q");
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "30");
        assert!(!handle_key(&mut app, key(KeyCode::Enter)));

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.registry.len(), 3);
        assert_eq!(app.registry.get(2).unwrap().name, "Read q");
    }

    #[test]
    fn test_clear_all_confirmation() {
        let mut app = create_test_app(600);

        handle_key(&mut app, key(KeyCode::Char('C')));
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.registry.len(), 2);

        handle_key(&mut app, key(KeyCode::Char('C')));
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(app.registry.is_empty());
        assert_eq!(app.saved_seconds(), 0);
    }

    #[test]
    fn test_clear_all_during_task() {
        let mut app = create_test_app(600);
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('C')));
        assert_eq!(app.ui_mode, UiMode::ConfirmClear);

        handle_key(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.mode(), CountdownMode::Idle);
        assert!(app.registry.is_empty());
        assert_eq!(app.saved_seconds(), 0);
    }

    #[test]
    fn test_clear_all_during_break() {
        let mut app = create_test_app(900);
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.mode(), CountdownMode::BreakRunning);

        // Declining keeps the break running
        handle_key(&mut app, key(KeyCode::Char('C')));
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.mode(), CountdownMode::BreakRunning);
        assert_eq!(app.saved_seconds(), 600);

        handle_key(&mut app, key(KeyCode::Char('C')));
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.mode(), CountdownMode::Idle);
        assert!(app.registry.is_empty());
        assert_eq!(app.saved_seconds(), 0);
    }

    #[test]
    fn test_form_ignores_modified_chars() {
        let mut app = create_test_app(0);
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_text(&mut app, "Plan");

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        // Shifted letters are still text
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));

        assert_eq!(app.input_form.as_ref().unwrap().name, "PlanS");
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app(0);
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_ctrl_c_quits_without_completing() {
        let mut app = create_test_app(0);
        handle_key(&mut app, key(KeyCode::Enter));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c));
        assert_eq!(app.mode(), CountdownMode::TaskRunning);
        assert_eq!(app.registry.len(), 2);
    }
}
