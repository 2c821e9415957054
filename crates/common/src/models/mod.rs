//! FAQ data models
//!
//! `FaqRecord` is what the corpus stores; `ScoredFaq` only exists for the
//! lifetime of a single query.

use serde::{Deserialize, Serialize};

/// A stored FAQ entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    /// Unique within the corpus
    pub id: u64,

    pub title: String,

    pub body: String,
}

/// A FAQ entry together with its relevance to the current query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredFaq {
    #[serde(flatten)]
    pub faq: FaqRecord,

    /// Number of whole-word term occurrences in title + body
    pub score: usize,
}

impl ScoredFaq {
    pub fn id(&self) -> u64 {
        self.faq.id
    }
}

/// Response payload of the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Top ranked FAQs, best first
    #[serde(default)]
    pub results: Vec<ScoredFaq>,

    /// Extractive summary built from the result bodies
    #[serde(default)]
    pub summary: String,

    /// Ids of `results`, in the same order
    #[serde(default)]
    pub sources: Vec<u64>,

    /// Informational message, omitted when the query matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl SearchResult {
    /// Build a matched result; `sources` is derived from `results`.
    pub fn matched(results: Vec<ScoredFaq>, summary: String) -> Self {
        let sources = results.iter().map(ScoredFaq::id).collect();
        Self {
            results,
            summary,
            sources,
            msg: None,
        }
    }

    /// An empty result carrying only a message
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: u64, score: usize) -> ScoredFaq {
        ScoredFaq {
            faq: FaqRecord {
                id,
                title: format!("Title {}", id),
                body: format!("Body {}.", id),
            },
            score,
        }
    }

    #[test]
    fn test_scored_faq_serializes_flat() {
        let value = serde_json::to_value(scored(7, 2)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 7, "title": "Title 7", "body": "Body 7.", "score": 2 })
        );
    }

    #[test]
    fn test_matched_derives_sources_in_order() {
        let result = SearchResult::matched(vec![scored(4, 3), scored(1, 1)], "x.".into());
        assert_eq!(result.sources, vec![4, 1]);
        assert!(result.msg.is_none());
    }

    #[test]
    fn test_matched_omits_msg_key() {
        let value = serde_json::to_value(SearchResult::matched(vec![scored(1, 1)], "a.".into()))
            .unwrap();
        assert!(value.get("msg").is_none());
        assert_eq!(value["sources"], serde_json::json!([1]));
    }

    #[test]
    fn test_message_result_shape() {
        let value = serde_json::to_value(SearchResult::message("No match found")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "results": [],
                "summary": "",
                "sources": [],
                "msg": "No match found"
            })
        );
    }

    #[test]
    fn test_partial_payload_deserializes_with_defaults() {
        let result: SearchResult = serde_json::from_str(r#"{"msg":"No query found"}"#).unwrap();
        assert!(result.results.is_empty());
        assert!(result.summary.is_empty());
        assert_eq!(result.msg.as_deref(), Some("No query found"));
    }
}
