use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title: Rect,
    pub description: Rect,
    pub amount: Rect,
    pub category: Rect,
    pub submit: Rect,
    pub total: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | two form rows | total | list | status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Description + amount
            Constraint::Length(3), // Category + add button
            Constraint::Length(1), // Total
            Constraint::Min(3),    // Expense list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let first_row = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(rows[1]);

    let second_row = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(rows[2]);

    AppLayout {
        title: rows[0],
        description: first_row[0],
        amount: first_row[1],
        category: second_row[0],
        submit: second_row[1],
        total: rows[3],
        list: rows[4],
        status_bar: rows[5],
    }
}
