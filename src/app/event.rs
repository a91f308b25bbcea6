use crate::store::StorageError;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A queued write of the expense mirror finished
    Persisted { result: Result<(), StorageError> },

    /// Periodic tick for status expiry
    Tick,
}
