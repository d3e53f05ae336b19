use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub bank_area: Option<Rect>,
    pub list_area: Option<Rect>,
    pub timer_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header with the app title and balance
/// - Idle: Time Saved pane above the task list
/// - Countdown active: the timer card takes the rest of the screen
pub fn create_layout(area: Rect, countdown_active: bool) -> MainLayout {
    if countdown_active {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keybindings bar
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Timer card
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            header_area: chunks[1],
            bank_area: None,
            list_area: None,
            timer_area: Some(chunks[2]),
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keybindings bar
                Constraint::Length(3), // Header
                Constraint::Length(7), // Time Saved pane
                Constraint::Min(0),    // Task list
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            header_area: chunks[1],
            bank_area: Some(chunks[2]),
            list_area: Some(chunks[3]),
            timer_area: None,
        }
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(16),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
