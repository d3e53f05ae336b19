use crate::app::AppState;
use crate::domain::{format_time, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the clear-all confirmation modal
pub fn render_confirm_clear_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::ConfirmClear {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::raw("  Clear all tasks and saved time?"),
            Line::raw(""),
            Line::raw(format!(
                "  {} tasks and {} of saved time will be lost.",
                app.registry.len(),
                format_time(app.saved_seconds())
            )),
            Line::raw("  This cannot be undone."),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [y]", modal_title_style()),
                Span::raw(" Clear everything  "),
                Span::styled("[n]", modal_title_style()),
                Span::raw(" Keep my data  "),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Clear All Data ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
