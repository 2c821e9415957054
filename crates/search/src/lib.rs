//! FAQDesk Search
//!
//! Keyword search over the static FAQ corpus:
//! - Query sanitization and tokenization
//! - Whole-word term frequency scoring
//! - Stable ranking of the top matches
//! - Extractive summaries of the matched answers

pub mod retrieval;

pub use retrieval::{FaqSearcher, SearchOptions};
