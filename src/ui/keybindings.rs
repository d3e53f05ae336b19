use crate::domain::{CountdownMode, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Hint strings for the current screen
pub fn hints(ui_mode: UiMode, mode: CountdownMode) -> &'static [&'static str] {
    match ui_mode {
        UiMode::AddingTask => &["Tab next field   ", "Enter add   ", "Esc cancel"],
        UiMode::ConfirmClear => &["y clear everything   ", "n/Esc keep"],
        UiMode::Normal => match mode {
            CountdownMode::Idle => &[
                " ↑/↓ select   ",
                "Enter start   ",
                "a add   ",
                "1/2/3 break 5/15/30   ",
                "C clear all   ",
                "q quit",
            ],
            CountdownMode::TaskRunning | CountdownMode::TaskPaused => &[
                " Space pause/resume   ",
                "c/Enter complete   ",
                "x/Esc cancel   ",
                "C clear all   ",
                "q quit",
            ],
            CountdownMode::BreakRunning | CountdownMode::BreakPaused => &[
                " Space pause/resume   ",
                "e/Enter end early   ",
                "x/Esc cancel   ",
                "C clear all   ",
                "q quit",
            ],
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, mode: CountdownMode, area: Rect) {
    let spans: Vec<Span> = hints(ui_mode, mode)
        .iter()
        .map(|hint| Span::raw(*hint))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).style(hint_style());
    f.render_widget(paragraph, area);
}
