//! JSONL file-backed quote store.
//!
//! Each record is serialized as a single JSON line appended to the file
//! via a buffered writer, flushed per append. Existing records are loaded
//! once at open so the day counts and history reads serve from memory;
//! lines that fail to decode are skipped with a warning rather than
//! poisoning the whole store.

use async_trait::async_trait;
use chrono::NaiveDate;
use quotecraft_application::ports::quote_store::{QuoteRecord, QuoteStore, StoreError};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct JsonlInner {
    records: Vec<QuoteRecord>,
    writer: BufWriter<File>,
}

/// Append-only JSONL quote store.
///
/// Thread-safe via a single `Mutex` over the records and the writer, so a
/// save and its in-memory index update are atomic with respect to reads.
pub struct JsonlQuoteStore {
    inner: Mutex<JsonlInner>,
    path: PathBuf,
}

impl JsonlQuoteStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates parent directories if needed and loads any existing records.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let records = if path.exists() {
            Self::load_records(path)?
        } else {
            Vec::new()
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StoreError::Io(e.to_string()))?;

        Ok(Self {
            inner: Mutex::new(JsonlInner {
                records,
                writer: BufWriter::new(file),
            }),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_records(path: &Path) -> Result<Vec<QuoteRecord>, StoreError> {
        let file = File::open(path).map_err(|e| StoreError::Io(e.to_string()))?;
        let mut records = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| StoreError::Io(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<QuoteRecord>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        "skipping undecodable record at {}:{}: {}",
                        path.display(),
                        number + 1,
                        e
                    );
                }
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl QuoteStore for JsonlQuoteStore {
    async fn save(&self, record: &QuoteRecord) -> Result<(), StoreError> {
        let line = serde_json::to_string(record)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut inner = self.inner.lock().unwrap();
        writeln!(inner.writer, "{}", line).map_err(|e| StoreError::Io(e.to_string()))?;
        inner
            .writer
            .flush()
            .map_err(|e| StoreError::Io(e.to_string()))?;
        inner.records.push(record.clone());
        Ok(())
    }

    async fn count_for_day(&self, user_id: &str, day: NaiveDate) -> Result<usize, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .records
            .iter()
            .filter(|r| r.user_id == user_id && r.created_at.date_naive() == day)
            .count())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<QuoteRecord>, StoreError> {
        let mut records: Vec<_> = self
            .inner
            .lock()
            .unwrap()
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
