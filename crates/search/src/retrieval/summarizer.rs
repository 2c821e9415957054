//! Extractive summary
//!
//! The summary is the first few distinct sentences of the top results'
//! bodies, in rank order. A sentence is any non-empty, trimmed run of text
//! between literal periods.

use faqdesk_common::models::ScoredFaq;
use std::collections::HashSet;

/// Distinct sentences of `results` in first-seen order
pub fn unique_sentences(results: &[ScoredFaq]) -> Vec<&str> {
    let mut seen = HashSet::new();
    results
        .iter()
        .flat_map(|r| r.faq.body.split('.'))
        .map(str::trim)
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .collect()
}

/// Join the first `limit` unique sentences with ". " and close with ".".
///
/// Returns an empty string when there is no sentence at all.
pub fn summarize(results: &[ScoredFaq], limit: usize) -> String {
    let sentences: Vec<&str> = unique_sentences(results).into_iter().take(limit).collect();
    if sentences.is_empty() {
        return String::new();
    }
    format!("{}.", sentences.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqdesk_common::models::FaqRecord;

    fn result(id: u64, body: &str) -> ScoredFaq {
        ScoredFaq {
            faq: FaqRecord {
                id,
                title: format!("FAQ {}", id),
                body: body.to_string(),
            },
            score: 1,
        }
    }

    #[test]
    fn test_joins_sentences_across_results() {
        let results = vec![
            result(1, "Refunds take 5 days. Contact support for help."),
            result(2, "Shipping takes 3 days."),
        ];
        assert_eq!(
            summarize(&results, 3),
            "Refunds take 5 days. Contact support for help. Shipping takes 3 days."
        );
    }

    #[test]
    fn test_limits_sentence_count() {
        let results = vec![result(1, "One. Two. Three. Four. Five.")];
        assert_eq!(summarize(&results, 3), "One. Two. Three.");
    }

    #[test]
    fn test_fewer_sentences_than_limit() {
        let results = vec![result(1, "Only one sentence")];
        assert_eq!(summarize(&results, 3), "Only one sentence.");
    }

    #[test]
    fn test_deduplicates_exact_sentences() {
        let results = vec![
            result(1, "Contact support. Refunds take 5 days."),
            result(2, "Contact support.  Shipping is free."),
        ];
        assert_eq!(
            summarize(&results, 3),
            "Contact support. Refunds take 5 days. Shipping is free."
        );
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let results = vec![result(1, "Contact support. contact support.")];
        assert_eq!(summarize(&results, 3), "Contact support. contact support.");
    }

    #[test]
    fn test_skips_empty_fragments() {
        let results = vec![result(1, "...First..  . Second...")];
        assert_eq!(summarize(&results, 3), "First. Second.");
    }

    #[test]
    fn test_no_sentences_yields_empty_summary() {
        assert_eq!(summarize(&[result(1, " . .. ")], 3), "");
        assert_eq!(summarize(&[], 3), "");
    }

    #[test]
    fn test_summary_is_prefix_of_unique_sentences() {
        let results = vec![
            result(1, "A one. B two. A one."),
            result(2, "C three. B two. D four."),
        ];
        let all = unique_sentences(&results);
        assert_eq!(all, vec!["A one", "B two", "C three", "D four"]);

        for limit in 1..=5 {
            let summary = summarize(&results, limit);
            let parts: Vec<&str> = summary
                .trim_end_matches('.')
                .split(". ")
                .collect();
            assert_eq!(parts, all[..limit.min(all.len())].to_vec());
        }
    }
}
