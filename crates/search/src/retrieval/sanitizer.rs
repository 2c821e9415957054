//! Query sanitization
//!
//! Raw queries are untrusted. They are NFKC-normalized, stripped of every
//! character outside the allowed set, and whitespace-collapsed.

use faqdesk_common::errors::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Everything except letters (`L`), numbers (`N`), whitespace, and
/// `.,!?:;'"()-_/@#&*+%`. Marks (`M`) are dropped even inside words.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^\p{L}\p{N}\s.,!?:;'"()\-_/@\#\&*+%]"#)
        .expect("disallowed-character class is a valid pattern")
});

/// Normalize and filter a raw query. May return an empty string.
pub fn sanitize(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let filtered = DISALLOWED.replace_all(&normalized, "");
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Like [`sanitize`], but an empty result is an [`AppError::EmptyQuery`].
pub fn sanitize_query(raw: &str) -> Result<String> {
    let sanitized = sanitize(raw);
    if sanitized.is_empty() {
        return Err(AppError::EmptyQuery);
    }
    Ok(sanitized)
}

/// True when sanitization changed anything beyond surrounding whitespace
pub fn was_altered(raw: &str, sanitized: &str) -> bool {
    raw.trim() != sanitized
}
