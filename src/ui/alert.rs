use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Centered modal for validation errors. Drawn last so it covers the form.
pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(message) = &state.alert else {
        return;
    };

    let area = frame.area();
    let popup_w = 44u16.min(area.width.saturating_sub(2));
    let popup_h = 7u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Attention ")
        .title_style(Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_AMBER))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.as_str(), Theme::title())),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Theme::ACCENT_AMBER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" OK", Style::default().fg(Theme::TEXT_SECONDARY)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
