//! Keyword-frequency scoring
//!
//! A record's score is the number of whole-word occurrences of every query
//! term in its lowercased `title + " " + body`. Word boundaries are ASCII
//! (`\b` in regex-lite), so "cat" does not match inside "category" and the
//! dot in "U.S" is not a term separator.

use faqdesk_common::errors::{AppError, Result};
use faqdesk_common::models::{FaqRecord, ScoredFaq};
use regex_lite::Regex;

/// Compiled whole-word patterns for one query's terms
#[derive(Debug, Clone)]
pub struct TermMatcher {
    patterns: Vec<Regex>,
}

impl TermMatcher {
    /// Compile one pattern per term. Terms are matched literally.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self> {
        let patterns = terms
            .iter()
            .map(|term| term_pattern(term.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Total whole-word matches of all terms in `text`
    pub fn count(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn term_pattern(term: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", regex_lite::escape(&term.to_lowercase()));
    Regex::new(&pattern).map_err(|e| AppError::Internal {
        message: format!("failed to compile pattern for term {:?}: {}", term, e),
    })
}

/// Lowercased text the terms are matched against
pub fn searchable_text(faq: &FaqRecord) -> String {
    format!("{} {}", faq.title, faq.body).to_lowercase()
}

/// Score a single record
pub fn score_faq(faq: &FaqRecord, matcher: &TermMatcher) -> ScoredFaq {
    ScoredFaq {
        faq: faq.clone(),
        score: matcher.count(&searchable_text(faq)),
    }
}

/// Score every record, keeping corpus order
pub fn score_all(records: &[FaqRecord], matcher: &TermMatcher) -> Vec<ScoredFaq> {
    records.iter().map(|faq| score_faq(faq, matcher)).collect()
}
