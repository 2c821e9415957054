//! FAQDesk Common Library
//!
//! Shared code for the FAQDesk search service and its client including:
//! - FAQ record and search result models
//! - The static, read-only FAQ corpus
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod corpus;
pub mod errors;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use config::AppConfig;
pub use corpus::Corpus;
pub use errors::{AppError, Result};
pub use models::{FaqRecord, ScoredFaq, SearchResult};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of FAQ records returned for a query
pub const MAX_RESULTS: usize = 3;

/// Number of sentences kept in the extractive summary
pub const SUMMARY_SENTENCES: usize = 3;

/// Message returned when sanitization leaves nothing to search for
pub const MSG_NO_QUERY: &str = "No query found";

/// Message returned when a valid query matched no FAQ
pub const MSG_NO_MATCH: &str = "No match found";
