pub mod bank_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::{format_time, CountdownMode};
use bank_pane::render_bank_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_confirm_clear_modal;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use styles::{bank_style, border_style, title_style};
use timer_pane::render_timer_pane;

/// Render the header: app name and current balance
fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let title = if app.use_emoji {
        "🐻 BEAR NECESSITIES"
    } else {
        "BEAR NECESSITIES"
    };

    let line = Line::from(vec![
        Span::styled(title, title_style()),
        Span::raw("   saved "),
        Span::styled(format_time(app.saved_seconds()), bank_style()),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style()));
    f.render_widget(paragraph, area);
}

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let mode = app.mode();
    let layout = create_layout(size, mode != CountdownMode::Idle);

    render_keybindings(f, app.ui_mode, mode, layout.keybindings_area);
    render_header(f, app, layout.header_area);

    if let Some(timer_area) = layout.timer_area {
        render_timer_pane(f, app, timer_area);
    }
    if let Some(bank_area) = layout.bank_area {
        render_bank_pane(f, app, bank_area);
    }
    if let Some(list_area) = layout.list_area {
        render_list_pane(f, app, list_area);
    }

    // Modals draw last so they sit on top
    render_confirm_clear_modal(f, app, size);
    render_input_form(f, app, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::BreakTier;
    use crate::persistence::{MemoryStore, SAVED_TIME_KEY};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn test_app() -> AppState {
        let config = AppConfig {
            use_emoji: false,
            notifications: false,
            ..AppConfig::default()
        };
        let store = MemoryStore::new().with_value(SAVED_TIME_KEY, "3661");
        AppState::new(Box::new(store), &config)
    }

    #[test]
    fn test_render_idle_screen() {
        let mut app = test_app();
        app.add_tasks("Write docs", "25", "1");

        let text = screen_text(&app);
        assert!(text.contains("BEAR NECESSITIES"));
        assert!(text.contains("1:01:01"));
        assert!(text.contains("Write docs"));
        assert!(text.contains("Take 30 min break"));
    }

    #[test]
    fn test_render_task_countdown() {
        let mut app = test_app();
        app.add_tasks("Write docs", "25", "1");
        app.start_selected();

        let text = screen_text(&app);
        assert!(text.contains("25:00"));
        assert!(text.contains("of 25 minutes estimated"));
        assert!(!text.contains("Your Tasks"));
    }

    #[test]
    fn test_render_break_and_modals() {
        let mut app = test_app();
        app.start_break(BreakTier::Medium);
        let text = screen_text(&app);
        assert!(text.contains("of a 15 minute break"));

        app.cancel_break();
        app.request_clear_all();
        assert!(screen_text(&app).contains("Clear All Data"));

        app.dismiss_clear_all();
        app.start_add_task();
        assert!(screen_text(&app).contains("Add a Task"));
    }
}
