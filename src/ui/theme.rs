use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 70);
    pub const ACCENT_RED: Color = Color::Rgb(235, 95, 95);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 210, 120);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 228, 232);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 156, 165);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 118);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 82);
    pub const BG_DARK: Color = Color::Rgb(22, 24, 28);
    pub const BG_SURFACE: Color = Color::Rgb(32, 35, 40);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn description() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn amount() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn category() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn total() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Self::ACCENT_RED).bg(Color::DarkGray)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
