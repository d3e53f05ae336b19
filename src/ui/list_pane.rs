use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{border_style, default_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn create_task_line(task: &Task, use_emoji: bool) -> Line<'static> {
    let marker = if use_emoji { "⏱ " } else { "- " };
    Line::from(vec![
        Span::raw(marker),
        Span::raw(task.name.clone()),
        Span::raw("  "),
        Span::styled(format!("{} min", task.estimated_minutes), hint_style()),
    ])
}

/// Render the pending task list
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.registry.list_tasks();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Your Tasks ({}) ", tasks.len()),
            title_style(),
        ));

    if tasks.is_empty() {
        let paragraph = Paragraph::new(Line::raw(" No tasks yet. Press a to add one."))
            .style(hint_style())
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| ListItem::new(create_task_line(task, app.use_emoji)).style(default_style()))
        .collect();

    // The state scrolls the list so the selected row stays in view
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style());
    f.render_stateful_widget(list, area, &mut state);
}
