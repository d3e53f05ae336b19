use crate::app::AppState;
use crate::domain::{format_time, BreakTier};
use crate::ui::styles::{bank_style, border_style, disabled_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the Time Saved pane: the balance and the breaks it can buy
pub fn render_bank_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let saved = app.saved_seconds();
    let icon = if app.use_emoji { "🏆 " } else { "" };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!(" {}", icon)),
        Span::styled(format_time(saved), bank_style()),
        Span::raw(" banked"),
    ])];
    lines.push(Line::raw(""));

    for (idx, tier) in BreakTier::all().iter().enumerate() {
        let style = if app.engine.bank().covers(tier.seconds()) {
            bank_style()
        } else {
            disabled_style()
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" [{}] ", idx + 1)),
            Span::styled(format!("Take {} min break", tier.minutes()), style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Time Saved ", title_style())),
    );

    f.render_widget(paragraph, area);
}
