//! Submit Keyword use case — caller-level preconditions around generation.
//!
//! The pipeline itself is infallible and performs no quota accounting;
//! this use case owns the preconditions the caller must enforce before
//! generation runs: a signed-in session, a non-empty keyword, and the
//! daily generation limit. On success the result is persisted, but a
//! failed save never masks the generated quote — the pipeline result is
//! authoritative.

use crate::ports::quote_store::{QuoteRecord, QuoteStore, StoreError};
use crate::use_cases::generate_quote::GenerateQuoteUseCase;
use chrono::Utc;
use quotecraft_domain::Keyword;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Default daily generation limit for a signed-in user.
pub const DEFAULT_DAILY_LIMIT: usize = 5;

/// Precondition and store failures visible to the caller.
///
/// These are input-validation failures, not pipeline failures — the
/// generation pipeline itself never surfaces an error.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("a signed-in session is required to generate quotes")]
    LoginRequired,

    #[error("keyword must not be empty")]
    EmptyKeyword,

    #[error("daily generation limit of {limit} reached")]
    DailyLimitReached { limit: usize },

    #[error("quote store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the [`SubmitKeywordUseCase`].
///
/// The session collaborator is represented by `user_id`: `None` models a
/// signed-out session.
#[derive(Debug, Clone)]
pub struct SubmitKeywordInput {
    pub user_id: Option<String>,
    pub keyword: String,
}

impl SubmitKeywordInput {
    pub fn new(user_id: Option<String>, keyword: impl Into<String>) -> Self {
        Self {
            user_id,
            keyword: keyword.into(),
        }
    }
}

/// Use case for one full submission: validate, generate, persist.
pub struct SubmitKeywordUseCase {
    generator: GenerateQuoteUseCase,
    store: Arc<dyn QuoteStore>,
    daily_limit: usize,
}

impl SubmitKeywordUseCase {
    pub fn new(generator: GenerateQuoteUseCase, store: Arc<dyn QuoteStore>) -> Self {
        Self {
            generator,
            store,
            daily_limit: DEFAULT_DAILY_LIMIT,
        }
    }

    /// Override the daily generation limit.
    pub fn with_daily_limit(mut self, limit: usize) -> Self {
        self.daily_limit = limit;
        self
    }

    /// Execute one submission.
    ///
    /// A store *read* failure during the quota check rejects the
    /// submission — the precondition cannot be verified. A store *write*
    /// failure after generation is logged and swallowed.
    pub async fn execute(&self, input: SubmitKeywordInput) -> Result<QuoteRecord, SubmitError> {
        let user_id = input.user_id.ok_or(SubmitError::LoginRequired)?;
        let keyword = Keyword::try_new(input.keyword).ok_or(SubmitError::EmptyKeyword)?;

        let today = Utc::now().date_naive();
        let count = self.store.count_for_day(&user_id, today).await?;
        if count >= self.daily_limit {
            return Err(SubmitError::DailyLimitReached {
                limit: self.daily_limit,
            });
        }

        let result = self.generator.execute(&keyword).await;
        info!(
            "generated quote for user {} from source {}",
            user_id,
            result.source()
        );

        let record = QuoteRecord {
            user_id,
            keyword: keyword.content().to_string(),
            quote: result.quote().to_string(),
            author: result.author().to_string(),
            source: result.source().clone(),
            created_at: Utc::now(),
        };

        if let Err(e) = self.store.save(&record).await {
            warn!("failed to persist quote record: {}", e);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::quote_gateway::{GatewayError, QuoteGateway};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use quotecraft_domain::Model;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct StaticGateway {
        body: String,
    }

    #[async_trait]
    impl QuoteGateway for StaticGateway {
        async fn complete(
            &self,
            _model: &Model,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<String, GatewayError> {
            Ok(self.body.clone())
        }
    }

    struct MockStore {
        records: Mutex<Vec<QuoteRecord>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MockStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                records: Mutex::new(Vec::new()),
                fail_reads: false,
                fail_writes: false,
            })
        }

        fn failing_reads() -> Arc<Self> {
            Arc::new(Self {
                records: Mutex::new(Vec::new()),
                fail_reads: true,
                fail_writes: false,
            })
        }

        fn failing_writes() -> Arc<Self> {
            Arc::new(Self {
                records: Mutex::new(Vec::new()),
                fail_reads: false,
                fail_writes: true,
            })
        }

        fn saved(&self) -> Vec<QuoteRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuoteStore for MockStore {
        async fn save(&self, record: &QuoteRecord) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Io("disk full".into()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn count_for_day(
            &self,
            user_id: &str,
            day: NaiveDate,
        ) -> Result<usize, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Io("table missing".into()));
            }
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id && r.created_at.date_naive() == day)
                .count())
        }

        async fn list_for_user(&self, user_id: &str) -> Result<Vec<QuoteRecord>, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Io("table missing".into()));
            }
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

    fn use_case(store: Arc<MockStore>) -> SubmitKeywordUseCase {
        let gateway = Arc::new(StaticGateway {
            body: r#"{"quote": "Onward.", "author": "T. Reeve"}"#.to_string(),
        });
        SubmitKeywordUseCase::new(GenerateQuoteUseCase::new(gateway), store)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_submission_persists_record() {
        let store = MockStore::new();
        let uc = use_case(store.clone());

        let record = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
            .await
            .unwrap();

        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.keyword, "hope");
        assert_eq!(record.quote, "Onward.");
        assert_eq!(record.author, "T. Reeve");
        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.saved()[0], record);
    }

    #[tokio::test]
    async fn test_signed_out_session_is_rejected() {
        let store = MockStore::new();
        let uc = use_case(store.clone());

        let result = uc.execute(SubmitKeywordInput::new(None, "hope")).await;

        assert!(matches!(result, Err(SubmitError::LoginRequired)));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn test_empty_keyword_is_rejected() {
        let store = MockStore::new();
        let uc = use_case(store);

        let result = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "   "))
            .await;

        assert!(matches!(result, Err(SubmitError::EmptyKeyword)));
    }

    #[tokio::test]
    async fn test_daily_limit_rejects_sixth_submission() {
        let store = MockStore::new();
        let uc = use_case(store.clone());

        for _ in 0..DEFAULT_DAILY_LIMIT {
            uc.execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
                .await
                .unwrap();
        }

        let result = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::DailyLimitReached { limit: DEFAULT_DAILY_LIMIT })
        ));
        assert_eq!(store.saved().len(), DEFAULT_DAILY_LIMIT);
    }

    #[tokio::test]
    async fn test_limit_is_scoped_per_user() {
        let store = MockStore::new();
        let uc = use_case(store.clone());

        for _ in 0..DEFAULT_DAILY_LIMIT {
            uc.execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
                .await
                .unwrap();
        }

        // A different user still has a full allowance
        let result = uc
            .execute(SubmitKeywordInput::new(Some("user-2".into()), "hope"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unverifiable_quota_rejects_submission() {
        let store = MockStore::failing_reads();
        let uc = use_case(store);

        let result = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
            .await;

        assert!(matches!(result, Err(SubmitError::Store(_))));
    }

    #[tokio::test]
    async fn test_persist_failure_still_returns_the_quote() {
        let store = MockStore::failing_writes();
        let uc = use_case(store.clone());

        let record = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
            .await
            .unwrap();

        assert_eq!(record.quote, "Onward.");
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn test_keyword_is_trimmed_before_use() {
        let store = MockStore::new();
        let uc = use_case(store);

        let record = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "  hope  "))
            .await
            .unwrap();

        assert_eq!(record.keyword, "hope");
    }

    #[tokio::test]
    async fn test_custom_daily_limit() {
        let store = MockStore::new();
        let gateway = Arc::new(StaticGateway {
            body: r#"{"quote": "Onward.", "author": "T. Reeve"}"#.to_string(),
        });
        let uc = SubmitKeywordUseCase::new(GenerateQuoteUseCase::new(gateway), store)
            .with_daily_limit(1);

        uc.execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
            .await
            .unwrap();
        let result = uc
            .execute(SubmitKeywordInput::new(Some("user-1".into()), "hope"))
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::DailyLimitReached { limit: 1 })
        ));
    }
}
