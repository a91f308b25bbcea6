//! Applies handler actions to the expense store and reflects the outcome in
//! the presentation state.

use crate::app::action::Action;
use crate::app::state::{AppState, Focus, FormField};
use crate::store::{ExpenseStore, KeyValueStorage, PersistTicket, StoreError};

/// Run one action. Returns the ticket of the mirror write it queued, if any.
pub fn apply<S: KeyValueStorage>(
    state: &mut AppState,
    store: &mut ExpenseStore<S>,
    action: Action,
) -> Option<PersistTicket> {
    match action {
        Action::AddExpense {
            description,
            amount,
            category,
        } => match store.add(&description, &amount, &category) {
            Ok(ticket) => {
                state.form.clear();
                state.focus = Focus::Field(FormField::Description);
                state.selected = store.len().saturating_sub(1);
                state.info_status(format!("Added \"{}\"", description));
                state.pending_saves += 1;
                Some(ticket)
            }
            Err(StoreError::Validation(e)) => {
                tracing::debug!(error = %e, "expense rejected");
                state.show_alert(e.to_string());
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "could not add expense");
                state.error_status(format!("Add failed: {}", e));
                None
            }
        },
        Action::RemoveExpense { id } => {
            let description = store.get(&id).map(|r| r.description.clone());
            match store.remove(&id) {
                Ok(ticket) => {
                    state.clamp_selection(store.len());
                    if let Some(description) = description {
                        state.info_status(format!("Removed \"{}\"", description));
                    }
                    state.pending_saves += 1;
                    state.dirty = true;
                    Some(ticket)
                }
                Err(e) => {
                    tracing::error!(error = %e, id = %id, "could not remove expense");
                    state.error_status(format!("Remove failed: {}", e));
                    None
                }
            }
        }
        Action::Quit => {
            state.should_quit = true;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::UiConfig;
    use crate::store::storage::MemoryStorage;
    use crate::store::EXPENSES_KEY;
    use std::sync::Arc;

    async fn setup() -> (AppState, ExpenseStore<MemoryStorage>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::default());
        let mut store = ExpenseStore::new(storage.clone());
        store.hydrate().await.unwrap();
        let mut state = AppState::new(UiConfig::default());
        state.loading = false;
        (state, store, storage)
    }

    fn add(description: &str, amount: &str, category: &str) -> Action {
        Action::AddExpense {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    #[tokio::test]
    async fn test_successful_add_clears_form() {
        let (mut state, mut store, _storage) = setup().await;
        state.form.description.text = "Coffee".into();
        state.form.amount.text = "4.5".into();
        state.focus = Focus::Submit;

        let ticket = apply(&mut state, &mut store, add("Coffee", "4.5", "Food"));
        ticket.unwrap().wait().await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(state.form.description.text, "");
        assert_eq!(state.form.amount.text, "");
        assert_eq!(state.focus, Focus::Field(FormField::Description));
        assert_eq!(state.pending_saves, 1);
        assert!(state.alert.is_none());
    }

    #[tokio::test]
    async fn test_missing_field_raises_alert_and_keeps_form() {
        let (mut state, mut store, storage) = setup().await;
        state.form.description.text = "Coffee".into();

        let ticket = apply(&mut state, &mut store, add("Coffee", "", "Food"));

        assert!(ticket.is_none());
        assert!(store.is_empty());
        assert_eq!(state.alert.as_deref(), Some("Please fill in all fields."));
        assert_eq!(state.form.description.text, "Coffee");
        assert!(storage.history().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_amount_raises_alert() {
        let (mut state, mut store, _storage) = setup().await;
        assert!(apply(&mut state, &mut store, add("Tea", "-", "Food")).is_none());
        assert!(state.alert.unwrap().contains("not a valid amount"));
    }

    #[tokio::test]
    async fn test_remove_clamps_selection() {
        let (mut state, mut store, storage) = setup().await;
        apply(&mut state, &mut store, add("A", "1", "X"));
        apply(&mut state, &mut store, add("B", "2", "X"));
        assert_eq!(state.selected, 1);

        let id = store.records()[1].id.clone();
        let ticket = apply(&mut state, &mut store, Action::RemoveExpense { id });
        ticket.unwrap().wait().await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(store.total(), "1.00");
        let mirrored = storage.value(EXPENSES_KEY).unwrap();
        assert!(mirrored.contains("\"descricao\":\"A\""));
        assert!(!mirrored.contains("\"descricao\":\"B\""));
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut state, mut store, _storage) = setup().await;
        assert!(apply(&mut state, &mut store, Action::Quit).is_none());
        assert!(state.should_quit);
    }
}
