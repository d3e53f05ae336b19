use crate::app::AppState;
use crate::domain::{format_time, Countdown, CountdownMode};
use crate::ui::styles::{
    border_style, expired_style, gauge_style, idle_style, paused_style, running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Fraction of the countdown already used, clamped to 0.0..=1.0
pub fn elapsed_ratio(countdown: &Countdown) -> f64 {
    let total = countdown.total();
    if total == 0 {
        return 0.0;
    }
    let elapsed = total.saturating_sub(countdown.remaining());
    (elapsed as f64 / total as f64).clamp(0.0, 1.0)
}

fn status_span(mode: CountdownMode, remaining: u64) -> Span<'static> {
    if remaining == 0 {
        return Span::styled("TIME'S UP", expired_style());
    }
    let style = match mode {
        CountdownMode::TaskRunning | CountdownMode::BreakRunning => running_style(),
        CountdownMode::TaskPaused | CountdownMode::BreakPaused => paused_style(),
        CountdownMode::Idle => idle_style(),
    };
    Span::styled(mode.label(), style)
}

/// Render the active task or break countdown
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let countdown = app.engine.countdown();
    let remaining = countdown.remaining();

    let (title, subtitle) = match countdown {
        Countdown::Task { task, .. } => (
            format!(" {} ", task.name),
            format!("of {} minutes estimated", task.estimated_minutes),
        ),
        Countdown::Break { tier, .. } => (
            if app.use_emoji {
                " ☕ Break time! ".to_string()
            } else {
                " Break time! ".to_string()
            },
            format!("of a {} minute break", tier.minutes()),
        ),
        Countdown::Idle => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Clock
            Constraint::Length(3), // Gauge
        ])
        .split(inner);

    let time_style = if remaining == 0 {
        expired_style()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format_time(remaining), time_style)),
        Line::raw(subtitle),
        Line::raw(""),
        Line::from(status_span(countdown.mode(), remaining)),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_style(border_style()))
        .gauge_style(gauge_style())
        .ratio(elapsed_ratio(countdown))
        .label(format!("{} left", format_time(remaining)));
    f.render_widget(gauge, chunks[1]);
}
