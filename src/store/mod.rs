//! The expense store: an ordered in-memory list mirrored to durable storage.
//!
//! The store starts out uninitialized. [`ExpenseStore::hydrate`] performs the
//! single read of the session and moves it to ready; from then on every
//! mutation queues a full rewrite of the mirror on the writer task.

pub mod error;
pub mod persist;
pub mod record;
pub mod storage;

use std::sync::Arc;

use persist::Persister;

pub use error::{StorageError, StoreError, ValidationError};
pub use persist::PersistTicket;
pub use record::ExpenseRecord;
pub use storage::{FileStorage, KeyValueStorage};

/// Storage key the whole expense list lives under.
pub const EXPENSES_KEY: &str = "@gastos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    Uninitialized,
    Ready,
}

pub struct ExpenseStore<S: KeyValueStorage> {
    storage: Arc<S>,
    persister: Persister,
    records: Vec<ExpenseRecord>,
    phase: StorePhase,
}

impl<S: KeyValueStorage> ExpenseStore<S> {
    /// Must be called inside a tokio runtime; the writer task is spawned here.
    pub fn new(storage: Arc<S>) -> Self {
        let persister = Persister::spawn(storage.clone(), EXPENSES_KEY);
        Self {
            storage,
            persister,
            records: Vec::new(),
            phase: StorePhase::Uninitialized,
        }
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == StorePhase::Ready
    }

    /// Load the persisted list. Only the first call reads storage.
    pub async fn hydrate(&mut self) -> Result<(), StorageError> {
        if self.is_ready() {
            tracing::debug!("hydrate called on a ready store, ignoring");
            return Ok(());
        }
        match self.storage.get_item(EXPENSES_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => {
                self.records = record::decode_list(&raw)?;
                tracing::info!(count = self.records.len(), "hydrated expenses from storage");
            }
            _ => tracing::info!("no stored expenses, starting empty"),
        }
        self.phase = StorePhase::Ready;
        Ok(())
    }

    /// Validate and append a new expense, then queue the mirror write.
    ///
    /// All three fields must be non-empty and the amount must parse; on any
    /// error the list is left untouched and nothing is written.
    pub fn add(
        &mut self,
        description: &str,
        amount_text: &str,
        category: &str,
    ) -> Result<PersistTicket, StoreError> {
        if !self.is_ready() {
            return Err(StoreError::NotReady);
        }
        if description.is_empty() || amount_text.is_empty() || category.is_empty() {
            return Err(ValidationError::MissingField.into());
        }
        let amount = record::parse_amount(amount_text)?;

        let mut id = record::generate_id();
        while self.get(&id).is_some() {
            id = record::generate_id();
        }
        let new_record = ExpenseRecord {
            id,
            description: description.to_string(),
            amount,
            category: category.to_string(),
        };

        let new_id = new_record.id.clone();
        let mut next = self.records.clone();
        next.push(new_record);
        let payload = record::encode_list(&next).map_err(StorageError::from)?;

        tracing::info!(id = %new_id, amount, "expense added");
        self.records = next;
        Ok(self.persister.write(payload))
    }

    /// Drop the record with `id`. Unknown ids leave the list as it was but
    /// the mirror is still rewritten.
    pub fn remove(&mut self, id: &str) -> Result<PersistTicket, StoreError> {
        if !self.is_ready() {
            return Err(StoreError::NotReady);
        }
        let next: Vec<ExpenseRecord> = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        let payload = record::encode_list(&next).map_err(StorageError::from)?;

        if next.len() == self.records.len() {
            tracing::debug!(id, "remove: no such expense");
        } else {
            tracing::info!(id, "expense removed");
        }
        self.records = next;
        Ok(self.persister.write(payload))
    }

    /// Queue a rewrite of the current list. Awaiting the ticket also waits
    /// out every write queued before it.
    pub fn persist(&self) -> Result<PersistTicket, StoreError> {
        if !self.is_ready() {
            return Err(StoreError::NotReady);
        }
        let payload = record::encode_list(&self.records).map_err(StorageError::from)?;
        Ok(self.persister.write(payload))
    }

    /// Sum of all amounts with two decimals. `"0.00"` when empty.
    pub fn total(&self) -> String {
        // Folding from +0.0 keeps an empty sum from printing as "-0.00".
        let sum = self.records.iter().fold(0.0_f64, |acc, r| acc + r.amount);
        record::format_amount(sum)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
