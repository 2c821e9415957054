//! Keyword retrieval pipeline
//!
//! A query flows through five stages:
//! - Sanitize (NFKC, allowed characters, whitespace collapse)
//! - Tokenize (lowercase terms, duplicates kept)
//! - Score (whole-word occurrences per record)
//! - Rank (drop zero scores, stable sort, truncate)
//! - Summarize (first distinct sentences of the top bodies)

pub mod ranker;
pub mod sanitizer;
pub mod scorer;
pub mod summarizer;
pub mod tokenizer;

pub use ranker::rank;
pub use sanitizer::{sanitize, sanitize_query, was_altered};
pub use scorer::{score_all, TermMatcher};
pub use summarizer::summarize;
pub use tokenizer::tokenize;

use faqdesk_common::config::SearchConfig;
use faqdesk_common::errors::Result;
use faqdesk_common::models::SearchResult;
use faqdesk_common::{Corpus, MAX_RESULTS, MSG_NO_MATCH, SUMMARY_SENTENCES};

/// Tunables of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum results to return
    pub max_results: usize,

    /// Maximum sentences in the summary
    pub summary_sentences: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            summary_sentences: SUMMARY_SENTENCES,
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_results: config.max_results,
            summary_sentences: config.summary_sentences,
        }
    }
}

/// Runs queries against a read-only corpus.
///
/// Holds no mutable state, so one instance serves any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct FaqSearcher {
    corpus: Corpus,
    options: SearchOptions,
}

impl FaqSearcher {
    pub fn new(corpus: Corpus, options: SearchOptions) -> Self {
        Self { corpus, options }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Run the full pipeline on a raw query.
    ///
    /// Fails with `AppError::EmptyQuery` when nothing survives sanitization.
    /// A query that matches nothing is not an error: the result is empty and
    /// carries the "No match found" message.
    pub fn search(&self, raw: &str) -> Result<SearchResult> {
        let sanitized = sanitize_query(raw)?;
        if was_altered(raw, &sanitized) {
            tracing::debug!(sanitized = %sanitized, "Query altered by sanitization");
        }

        let terms = tokenize(&sanitized);
        let matcher = TermMatcher::new(&terms)?;

        let scored = score_all(self.corpus.records(), &matcher);
        let top = rank(scored, self.options.max_results);

        if top.is_empty() {
            tracing::debug!(terms = terms.len(), "No FAQ matched");
            return Ok(SearchResult::message(MSG_NO_MATCH));
        }

        let summary = summarize(&top, self.options.summary_sentences);
        Ok(SearchResult::matched(top, summary))
    }
}
