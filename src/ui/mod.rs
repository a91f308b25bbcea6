mod alert;
mod expense_list;
mod form;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::{AppState, FormField};
use crate::store::ExpenseRecord;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

/// Draw the whole screen. `records` and `total` come from the expense store.
pub fn render(frame: &mut Frame, state: &AppState, records: &[ExpenseRecord], total: &str) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title(frame, app_layout.title, state);
    form::render_field(frame, app_layout.description, state, FormField::Description);
    form::render_field(frame, app_layout.amount, state, FormField::Amount);
    form::render_field(frame, app_layout.category, state, FormField::Category);
    form::render_submit(frame, app_layout.submit, state);
    render_total(frame, app_layout.total, state, total);
    expense_list::render(frame, app_layout.list, state, records);
    status_bar::render(frame, app_layout.status_bar, state, records.len());
    alert::render(frame, state);
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Span::styled(state.ui.title.as_str(), Theme::title()))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_total(frame: &mut Frame, area: Rect, state: &AppState, total: &str) {
    let line = Line::from(vec![
        Span::styled("Total: ", Theme::total()),
        Span::styled(
            format!("{} {} ", state.ui.currency_symbol, total),
            Theme::total().fg(Theme::ACCENT_RED),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}
