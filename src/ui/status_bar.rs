use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, count: usize) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} expense{} ", count, if count == 1 { "" } else { "s" }),
        Style::default().fg(Theme::ACCENT_GREEN).bg(Color::DarkGray),
    ));

    if state.pending_saves > 0 {
        parts.push(Span::styled(
            " saving… ",
            Style::default().fg(Theme::ACCENT_AMBER).bg(Color::DarkGray),
        ));
    }

    if let Some(status) = &state.status {
        let style = if status.is_error {
            Theme::status_error()
        } else {
            Theme::status_bar()
        };
        parts.push(Span::styled(
            format!("| [{}] {} ", status.timestamp, status.text),
            style,
        ));
    }

    // Focus indicator
    let focus_name = state.focus.name();
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
