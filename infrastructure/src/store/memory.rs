//! In-memory quote store.
//!
//! Backing store for tests and callers without durable storage. All
//! operations work on a `Mutex<Vec<_>>`; records are never evicted.

use async_trait::async_trait;
use chrono::NaiveDate;
use quotecraft_application::ports::quote_store::{QuoteRecord, QuoteStore, StoreError};
use std::sync::Mutex;

/// Quote store holding records in process memory.
#[derive(Default)]
pub struct MemoryQuoteStore {
    records: Mutex<Vec<QuoteRecord>>,
}

impl MemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, across all users.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn save(&self, record: &QuoteRecord) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn count_for_day(&self, user_id: &str, day: NaiveDate) -> Result<usize, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.created_at.date_naive() == day)
            .count())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<QuoteRecord>, StoreError> {
        let mut records: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
