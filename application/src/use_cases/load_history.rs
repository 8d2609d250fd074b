//! Load History use case.
//!
//! Newest-first listing of a user's persisted quotes for the history view.

use crate::ports::quote_store::{QuoteRecord, QuoteStore, StoreError};
use std::sync::Arc;

/// Use case for retrieving a user's generation history.
pub struct LoadHistoryUseCase {
    store: Arc<dyn QuoteStore>,
}

impl LoadHistoryUseCase {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    /// List the user's records, newest first.
    pub async fn execute(&self, user_id: &str) -> Result<Vec<QuoteRecord>, StoreError> {
        self.store.list_for_user(user_id).await
    }
}
