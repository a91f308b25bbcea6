use crate::config::model::UiConfig;
use chrono::Local;
use std::fmt::Write;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Used when the configured timestamp format cannot be rendered.
const FALLBACK_TIMESTAMP_FORMAT: &str = "%H:%M";

/// How long a status message stays in the status bar.
pub const STATUS_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Category,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Description => "Description",
            FormField::Amount => "Amount",
            FormField::Category => "Category",
        }
    }

    /// The amount field behaves like a numeric keypad.
    pub fn accepts(self, c: char) -> bool {
        match self {
            FormField::Amount => c.is_ascii_digit() || matches!(c, '.' | ',' | '-'),
            FormField::Description | FormField::Category => !c.is_control(),
        }
    }
}

/// A single-line text field with a byte-indexed cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

/// The three bound inputs of the entry form.
#[derive(Debug, Default)]
pub struct FormState {
    pub description: InputState,
    pub amount: InputState,
    pub category: InputState,
}

impl FormState {
    pub fn field(&self, field: FormField) -> &InputState {
        match field {
            FormField::Description => &self.description,
            FormField::Amount => &self.amount,
            FormField::Category => &self.category,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputState {
        match field {
            FormField::Description => &mut self.description,
            FormField::Amount => &mut self.amount,
            FormField::Category => &mut self.category,
        }
    }

    pub fn clear(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Submit,
    List,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(FormField::Description),
        Focus::Field(FormField::Amount),
        Focus::Field(FormField::Category),
        Focus::Submit,
        Focus::List,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        let prev = if idx == 0 { Self::ORDER.len() - 1 } else { idx - 1 };
        Self::ORDER[prev]
    }

    pub fn name(self) -> &'static str {
        match self {
            Focus::Field(FormField::Description) => "DESCRIPTION",
            Focus::Field(FormField::Amount) => "AMOUNT",
            Focus::Field(FormField::Category) => "CATEGORY",
            Focus::Submit => "ADD",
            Focus::List => "LIST",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub timestamp: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

/// Presentation state of the single screen. The expense list itself lives in
/// the store and is passed alongside this wherever it is needed.
pub struct AppState {
    pub ui: UiConfig,
    pub form: FormState,
    pub focus: Focus,
    /// Index of the highlighted row in the expense list.
    pub selected: usize,
    /// Blocking alert; captures all input while shown.
    pub alert: Option<String>,
    pub status: Option<StatusMessage>,
    /// Mirror writes issued but not yet confirmed.
    pub pending_saves: usize,
    pub loading: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(ui: UiConfig) -> Self {
        Self {
            ui,
            form: FormState::default(),
            focus: Focus::Field(FormField::Description),
            selected: 0,
            alert: None,
            status: None,
            pending_saves: 0,
            loading: true,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
        self.dirty = true;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.dirty = true;
    }

    fn timestamp(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.ui.timestamp_format)).is_err() {
            tracing::warn!(format = %self.ui.timestamp_format, "invalid timestamp format");
            out.clear();
            let _ = write!(out, "{}", now.format(FALLBACK_TIMESTAMP_FORMAT));
        }
        out
    }

    fn push_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage {
            text,
            timestamp: self.timestamp(),
            is_error,
            shown_at: Instant::now(),
        });
        self.dirty = true;
    }

    pub fn info_status(&mut self, text: String) {
        self.push_status(text, false);
    }

    pub fn error_status(&mut self, text: String) {
        self.push_status(text, true);
    }

    /// Drop the status message once it has been shown long enough.
    /// Errors stay until replaced.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(status) = &self.status {
            if !status.is_error && now.duration_since(status.shown_at) >= STATUS_TTL {
                self.status = None;
                self.dirty = true;
            }
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn select_up(&mut self, steps: usize) {
        self.selected = self.selected.saturating_sub(steps);
        self.dirty = true;
    }

    pub fn select_down(&mut self, steps: usize, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = (self.selected + steps).min(len - 1);
        }
        self.dirty = true;
    }

    /// Keep the selection inside a list of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
