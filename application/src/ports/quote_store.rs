//! Quote store port
//!
//! Defines the persistence contract for generated quotes: durable storage
//! scoped per user, newest-first history retrieval, and a per-calendar-day
//! generation count consumed by the daily-quota precondition.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use quotecraft_domain::QuoteSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted generation: the result plus its request context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub user_id: String,
    pub keyword: String,
    pub quote: String,
    pub author: String,
    pub source: QuoteSource,
    pub created_at: DateTime<Utc>,
}

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(String),

    #[error("record serialization error: {0}")]
    Serialization(String),
}

/// Port for persisting and retrieving generated quotes.
///
/// A failed `save` must not prevent the generated quote from reaching the
/// caller — the pipeline result is authoritative regardless of persistence
/// outcome. The read operations are genuine, fallible queries.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persist one record.
    async fn save(&self, record: &QuoteRecord) -> Result<(), StoreError>;

    /// Count the user's generations whose `created_at` falls on the given
    /// UTC calendar day.
    async fn count_for_day(&self, user_id: &str, day: NaiveDate) -> Result<usize, StoreError>;

    /// List the user's records, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<QuoteRecord>, StoreError>;
}
