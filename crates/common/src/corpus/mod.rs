//! Static FAQ corpus
//!
//! Loaded once at startup and shared read-only between requests. There is
//! no write path, so no synchronization is needed beyond the `Arc`.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::errors::{AppError, Result};
use crate::models::FaqRecord;

/// Dataset compiled into the binary, used when no path is configured
pub const EMBEDDED_DATASET: &str = include_str!("../../data/faqs.json");

/// Immutable, cheaply clonable list of FAQ records in dataset order
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Arc<[FaqRecord]>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate ids
    pub fn new(records: Vec<FaqRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(AppError::Corpus {
                    message: format!("duplicate FAQ id {}", record.id),
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Parse a JSON array of `{id, title, body}` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<FaqRecord> = serde_json::from_str(json).map_err(|e| AppError::Corpus {
            message: format!("invalid dataset: {}", e),
        })?;
        Self::new(records)
    }

    /// Load the dataset shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a dataset file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| AppError::Corpus {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, otherwise the embedded dataset
    pub fn load(path: Option<&str>) -> Result<Self> {
        let corpus = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::embedded()?,
        };

        tracing::info!(
            records = corpus.len(),
            source = path.unwrap_or("embedded"),
            "FAQ corpus loaded"
        );

        Ok(corpus)
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&FaqRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn record(id: u64, title: &str, body: &str) -> FaqRecord {
        FaqRecord {
            id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let corpus = assert_ok!(Corpus::embedded());
        assert!(!corpus.is_empty());
        assert_eq!(corpus.get(1).map(|r| r.title.as_str()), Some("Refund policy"));
    }

    #[test]
    fn test_preserves_dataset_order() {
        let corpus = Corpus::new(vec![record(9, "b", "b"), record(2, "a", "a")]).unwrap();
        let ids: Vec<u64> = corpus.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = assert_err!(Corpus::new(vec![record(1, "a", "a"), record(1, "b", "b")]));
        assert!(matches!(err, AppError::Corpus { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = assert_err!(Corpus::from_json(r#"[{"id": "one", "title": "x"}]"#));
        assert!(matches!(err, AppError::Corpus { .. }));
    }

    #[test]
    fn test_missing_file_is_corpus_error() {
        let err = assert_err!(Corpus::from_path("/definitely/not/here.json"));
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_clones_share_records() {
        let corpus = Corpus::embedded().unwrap();
        let other = corpus.clone();
        assert!(std::ptr::eq(corpus.records(), other.records()));
    }
}
