//! Ordered background writes of the expense mirror.
//!
//! Every mutation hands the serialized list to a single writer task over an
//! unbounded channel, so writes land in storage in the order the mutations
//! happened. The caller gets a [`PersistTicket`] back and may await it or let
//! it go; the write happens either way.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use super::error::StorageError;
use super::storage::KeyValueStorage;

struct WriteRequest {
    payload: String,
    done: oneshot::Sender<Result<(), StorageError>>,
}

/// Handle to the writer task. Dropping it lets the task drain and exit.
pub struct Persister {
    tx: mpsc::UnboundedSender<WriteRequest>,
}

/// Completion of one write.
#[derive(Debug)]
pub struct PersistTicket {
    rx: oneshot::Receiver<Result<(), StorageError>>,
}

impl PersistTicket {
    /// Wait for the write this ticket belongs to.
    pub async fn wait(self) -> Result<(), StorageError> {
        self.rx.await.unwrap_or(Err(StorageError::WriterClosed))
    }
}

impl Persister {
    /// Spawn the writer task on the current tokio runtime.
    pub fn spawn<S: KeyValueStorage>(storage: Arc<S>, key: &'static str) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<WriteRequest>();
        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let bytes = request.payload.len();
                let result = storage.set_item(key, request.payload).await;
                match &result {
                    Ok(()) => tracing::debug!(key, bytes, "expense mirror written"),
                    Err(e) => tracing::warn!(key, error = %e, "expense mirror write failed"),
                }
                // Receiver may have been dropped; nobody is waiting then.
                let _ = request.done.send(result);
            }
            tracing::debug!("persistence writer stopped");
        });
        Self { tx }
    }

    /// Queue a full-list replace.
    pub fn write(&self, payload: String) -> PersistTicket {
        let (done, rx) = oneshot::channel();
        if self.tx.send(WriteRequest { payload, done }).is_err() {
            tracing::error!("persistence writer is gone, write dropped");
        }
        PersistTicket { rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::storage::MemoryStorage;

    #[tokio::test]
    async fn test_writes_land_in_order() {
        let storage = Arc::new(MemoryStorage::default());
        let persister = Persister::spawn(storage.clone(), "k");
        let first = persister.write("one".into());
        let second = persister.write("two".into());
        let third = persister.write("three".into());
        // Only the last ticket is awaited; the earlier writes are already ahead of it.
        drop(first);
        drop(second);
        third.wait().await.unwrap();
        assert_eq!(storage.history(), vec!["one", "two", "three"]);
        assert_eq!(storage.value("k").as_deref(), Some("three"));
    }

    #[tokio::test]
    async fn test_failure_is_reported_on_ticket() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set_fail_writes(true);
        let persister = Persister::spawn(storage.clone(), "k");
        let result = persister.write("lost".into()).wait().await;
        assert!(matches!(result, Err(StorageError::Io(_))));
        assert_eq!(storage.value("k"), None);
    }
}
