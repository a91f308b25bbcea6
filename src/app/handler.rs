use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::store::ExpenseRecord;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

const PAGE: usize = 10;

/// Translate one event into state changes and store actions. `records` is the
/// current expense list, in display order.
pub fn handle_event(state: &mut AppState, records: &[ExpenseRecord], event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, records, cevent),
        AppEvent::Persisted { result } => {
            state.pending_saves = state.pending_saves.saturating_sub(1);
            match result {
                Ok(()) => tracing::debug!(pending = state.pending_saves, "save confirmed"),
                Err(e) => {
                    tracing::error!(error = %e, "failed to save expenses");
                    state.error_status(format!("Save failed: {}", e));
                }
            }
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, records: &[ExpenseRecord], event: CEvent) -> Vec<Action> {
    match event {
        // Windows reports releases too; act on presses only.
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, records, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, records: &[ExpenseRecord], key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Alert captures all input until dismissed
    if state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.dismiss_alert();
        }
        return vec![];
    }

    if state.loading {
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        Focus::Field(field) => handle_field_key(state, field, key),
        Focus::Submit => handle_submit_key(state, key),
        Focus::List => handle_list_key(state, records, key),
    }
}

fn submit(state: &AppState) -> Vec<Action> {
    vec![Action::AddExpense {
        description: state.form.description.text.clone(),
        amount: state.form.amount.text.clone(),
        category: state.form.category.text.clone(),
    }]
}

fn handle_field_key(state: &mut AppState, field: FormField, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => return submit(state),
        KeyCode::Down => state.cycle_focus(),
        KeyCode::Up => {
            if field != FormField::Description {
                state.cycle_focus_back();
            }
        }
        KeyCode::Char('w') if ctrl => state.form.field_mut(field).delete_word_back(),
        KeyCode::Char('u') if ctrl => state.form.field_mut(field).clear(),
        KeyCode::Char(c) if !ctrl => {
            if field.accepts(c) {
                state.form.field_mut(field).insert_char(c);
            }
        }
        KeyCode::Backspace => state.form.field_mut(field).delete_back(),
        KeyCode::Delete => state.form.field_mut(field).delete_forward(),
        KeyCode::Left => state.form.field_mut(field).move_left(),
        KeyCode::Right => state.form.field_mut(field).move_right(),
        KeyCode::Home => state.form.field_mut(field).move_home(),
        KeyCode::End => state.form.field_mut(field).move_end(),
        _ => {}
    }
    vec![]
}

fn handle_submit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => submit(state),
        KeyCode::Up => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Down => {
            state.cycle_focus();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_list_key(state: &mut AppState, records: &[ExpenseRecord], key: KeyEvent) -> Vec<Action> {
    let len = records.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.select_down(1, len),
        KeyCode::PageUp => state.select_up(PAGE),
        KeyCode::PageDown => state.select_down(PAGE, len),
        KeyCode::Home => state.selected = 0,
        KeyCode::End => state.selected = len.saturating_sub(1),
        KeyCode::Delete | KeyCode::Char('x') | KeyCode::Char('d') => {
            if let Some(record) = records.get(state.selected) {
                return vec![Action::RemoveExpense {
                    id: record.id.clone(),
                }];
            }
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::UiConfig;
    use crate::store::StorageError;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)))
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new(UiConfig::default());
        state.loading = false;
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &[], key(KeyCode::Char(c)));
        }
    }

    fn records() -> Vec<ExpenseRecord> {
        ["a", "b", "c"]
            .iter()
            .map(|id| ExpenseRecord {
                id: id.to_string(),
                description: id.to_uppercase(),
                amount: 1.0,
                category: "X".into(),
            })
            .collect()
    }

    #[test]
    fn test_typing_and_submit() {
        let mut state = ready_state();
        type_text(&mut state, "Coffee");
        handle_event(&mut state, &[], key(KeyCode::Tab));
        type_text(&mut state, "4x.5");
        handle_event(&mut state, &[], key(KeyCode::Tab));
        type_text(&mut state, "Food");

        let actions = handle_event(&mut state, &[], key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::AddExpense {
                description: "Coffee".into(),
                amount: "4.5".into(),
                category: "Food".into(),
            }]
        );
    }

    #[test]
    fn test_submit_button() {
        let mut state = ready_state();
        state.focus = Focus::Submit;
        let actions = handle_event(&mut state, &[], key(KeyCode::Enter));
        assert!(matches!(actions.as_slice(), [Action::AddExpense { .. }]));
    }

    #[test]
    fn test_alert_blocks_input() {
        let mut state = ready_state();
        state.show_alert("Please fill in all fields.".into());
        type_text(&mut state, "abc");
        assert_eq!(state.form.description.text, "");
        assert!(handle_event(&mut state, &[], key(KeyCode::Enter)).is_empty());
        assert!(state.alert.is_none());
        type_text(&mut state, "abc");
        assert_eq!(state.form.description.text, "abc");
    }

    #[test]
    fn test_list_removal_targets_selected_row() {
        let mut state = ready_state();
        let records = records();
        state.focus = Focus::List;
        handle_event(&mut state, &records, key(KeyCode::Down));
        let actions = handle_event(&mut state, &records, key(KeyCode::Delete));
        assert_eq!(actions, vec![Action::RemoveExpense { id: "b".into() }]);

        handle_event(&mut state, &records, key(KeyCode::End));
        assert_eq!(state.selected, 2);
        handle_event(&mut state, &records, key(KeyCode::Down));
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_remove_on_empty_list_does_nothing() {
        let mut state = ready_state();
        state.focus = Focus::List;
        assert!(handle_event(&mut state, &[], key(KeyCode::Char('x'))).is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = ready_state();
        assert_eq!(handle_event(&mut state, &[], ctrl('c')), vec![Action::Quit]);
        // 'q' is text while a form field has focus
        assert!(handle_event(&mut state, &[], key(KeyCode::Char('q'))).is_empty());
        state.focus = Focus::List;
        assert_eq!(handle_event(&mut state, &[], key(KeyCode::Char('q'))), vec![Action::Quit]);
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut state = AppState::new(UiConfig::default());
        type_text(&mut state, "abc");
        assert_eq!(state.form.description.text, "");
        assert_eq!(handle_event(&mut state, &[], ctrl('c')), vec![Action::Quit]);
    }

    #[test]
    fn test_persist_outcomes() {
        let mut state = ready_state();
        state.pending_saves = 2;
        handle_event(&mut state, &[], AppEvent::Persisted { result: Ok(()) });
        assert_eq!(state.pending_saves, 1);
        assert!(state.status.is_none());

        handle_event(
            &mut state,
            &[],
            AppEvent::Persisted {
                result: Err(StorageError::WriterClosed),
            },
        );
        assert_eq!(state.pending_saves, 0);
        let status = state.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.starts_with("Save failed"));
    }
}
