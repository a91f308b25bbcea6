use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

fn framed(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    if title.is_empty() {
        return block;
    }
    block
        .title(format!(" {} ", title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
}

/// Screen column of the cursor, saturating on very long input.
fn cursor_x(left: u16, column: usize) -> u16 {
    left.saturating_add(u16::try_from(column).unwrap_or(u16::MAX))
}

/// One bound text input. Shows the label as a placeholder while empty.
pub fn render_field(frame: &mut Frame, area: Rect, state: &AppState, field: FormField) {
    let focused = state.focus == Focus::Field(field) && state.alert.is_none();
    let block = framed(field.label(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = state.form.field(field);
    let paragraph = if input.text.is_empty() && !focused {
        Paragraph::new(Span::styled(field.label(), Theme::placeholder()))
    } else {
        Paragraph::new(Span::styled(input.text.as_str(), Theme::input_text()))
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 {
        let cursor_x = cursor_x(inner.x, input.cursor_column());
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

pub fn render_submit(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Submit && state.alert.is_none();
    let block = framed("", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = if focused {
        Theme::selected_row()
    } else {
        Style::default()
            .fg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Span::styled(" Add ", style)).alignment(Alignment::Center);
    frame.render_widget(button, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_x_saturates() {
        assert_eq!(cursor_x(3, 4), 7);
        assert_eq!(cursor_x(10, 70_000), u16::MAX);
        assert_eq!(cursor_x(u16::MAX - 1, 5), u16::MAX);
    }
}
