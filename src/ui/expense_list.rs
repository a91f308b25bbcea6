use crate::app::state::{AppState, Focus};
use crate::store::record::format_amount;
use crate::store::ExpenseRecord;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const AMOUNT_WIDTH: usize = 14;
const CATEGORY_WIDTH: usize = 16;
const REMOVE_MARKER: &str = " ✕ ";

/// Pad or truncate `text` to exactly `width` display columns.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{}{}", text, " ".repeat(pad));
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// First visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

fn amount_label(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, format_amount(amount))
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, records: &[ExpenseRecord]) {
    let focused = state.focus == Focus::List && state.alert.is_none();
    let block = Block::default()
        .title(format!(" Expenses ({}) ", records.len()))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width < 10 {
        return;
    }

    if state.loading {
        let loading = Paragraph::new(Span::styled(" Loading…", Theme::placeholder()));
        frame.render_widget(loading, inner);
        return;
    }

    if records.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No expenses yet. Fill in the form and press Enter.",
            Theme::placeholder(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let list_h = inner.height as usize;
    let row_w = inner.width.saturating_sub(1) as usize; // scrollbar column
    let desc_w = row_w
        .saturating_sub(AMOUNT_WIDTH + CATEGORY_WIDTH + REMOVE_MARKER.width() + 3);

    let start = scroll_offset(state.selected, list_h);
    let end = (start + list_h).min(records.len());

    let mut lines: Vec<Line> = Vec::new();
    for (i, record) in records.iter().enumerate().take(end).skip(start) {
        let amount = amount_label(&state.ui.currency_symbol, record.amount);
        let cells = [
            Span::raw(" "),
            Span::styled(fit(&record.description, desc_w), Theme::description()),
            Span::raw(" "),
            Span::styled(format!("{:>width$}", amount, width = AMOUNT_WIDTH), Theme::amount()),
            Span::raw(" "),
            Span::styled(fit(&record.category, CATEGORY_WIDTH), Theme::category()),
            Span::styled(REMOVE_MARKER, Style::default().fg(Theme::TEXT_MUTED)),
        ];
        let line = if focused && i == state.selected {
            Line::from(
                cells
                    .into_iter()
                    .map(|s| Span::styled(s.content, Theme::selected_row()))
                    .collect::<Vec<_>>(),
            )
        } else {
            Line::from(cells.to_vec())
        };
        lines.push(line);
    }

    let list_area = Rect::new(inner.x, inner.y, row_w as u16, inner.height);
    frame.render_widget(Paragraph::new(lines), list_area);

    if records.len() > list_h {
        let scrollbar_area = Rect::new(inner.x + inner.width - 1, inner.y, 1, inner.height);
        let mut scrollbar_state =
            ScrollbarState::new(records.len().saturating_sub(list_h)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("Bus", 6), "Bus   ");
        assert_eq!(fit("Groceries", 5), "Groc…");
        assert_eq!(fit("Groceries", 0), "");
        // Wide characters count as two columns
        assert_eq!(fit("寿司寿司", 5).width(), 5);
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }

    #[test]
    fn test_amount_label() {
        assert_eq!(amount_label("R$", 4.5), "R$ 4.50");
        assert_eq!(amount_label("$", 1200.0), "$ 1200.00");
    }
}
