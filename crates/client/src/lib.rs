//! FAQDesk Client
//!
//! Caller-side search action: sanitizes the query before it leaves the
//! process, calls the search service, and turns every failure into a
//! state a page can render.

use faqdesk_common::{
    config::ClientConfig,
    errors::{AppError, Result},
    models::{ScoredFaq, SearchResult},
};
use faqdesk_search::retrieval::{sanitize, was_altered};
use serde::{Deserialize, Serialize};

/// Message shown when nothing searchable is left after sanitization
pub const MSG_INVALID_QUERY: &str = "Invalid or empty query";

/// Prefix added when sanitization dropped characters from the input
pub const MSG_CHARS_REMOVED: &str = "Some characters were removed from the query.";

/// Message shown when the service could not be reached
pub const MSG_REQUEST_FAILED: &str = "Request failed";

/// Displayable search state. Unlike [`SearchResult`], `msg` is always
/// present, empty when there is nothing to say.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub results: Vec<ScoredFaq>,
    pub summary: String,
    pub sources: Vec<u64>,
    pub msg: String,
}

impl SearchState {
    /// An empty state carrying only a message
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// HTTP client for the search endpoint
#[derive(Debug, Clone)]
pub struct FaqClient {
    backend_url: String,
    client: reqwest::Client,
}

impl FaqClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Configuration {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            backend_url: config.backend_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Run a search.
    ///
    /// An input with nothing searchable left never reaches the network.
    /// Non-success statuses and transport failures are returned as errors;
    /// see [`FaqClient::search_state`] for the folded form.
    pub async fn search(&self, raw: &str) -> Result<SearchState> {
        let sanitized = sanitize(raw);
        if sanitized.is_empty() {
            return Ok(SearchState::message(MSG_INVALID_QUERY));
        }
        let altered = was_altered(raw, &sanitized);

        let url = format!("{}/api/search", self.backend_url);
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query: &sanitized })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: SearchResult = response.json().await?;

        let client_msg = if altered { MSG_CHARS_REMOVED } else { "" };
        let server_msg = body.msg.unwrap_or_default();
        let msg = [client_msg, server_msg.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(SearchState {
            results: body.results,
            summary: body.summary,
            sources: body.sources,
            msg,
        })
    }

    /// Run a search and fold any failure into a displayable state
    pub async fn search_state(&self, raw: &str) -> SearchState {
        match self.search(raw).await {
            Ok(state) => state,
            Err(AppError::UpstreamStatus { status }) => {
                tracing::warn!(status, "Search service returned an error status");
                SearchState::message(format!("Status {}", status))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Search request failed");
                SearchState::message(MSG_REQUEST_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio_test::{assert_err, assert_ok};

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(backend_url: &str) -> FaqClient {
        FaqClient::new(&ClientConfig {
            backend_url: backend_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    /// Stub that echoes the received query back in `msg`
    fn echo_app() -> Router {
        Router::new().route(
            "/api/search",
            post(|Json(body): Json<Value>| async move {
                let query = body["query"].as_str().unwrap_or_default().to_string();
                Json(json!({
                    "results": [{ "id": 1, "title": "Refunds", "body": "Refunds take 5 days.", "score": 1 }],
                    "summary": "Refunds take 5 days.",
                    "sources": [1],
                    "msg": format!("query={}", query)
                }))
            }),
        )
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.backend_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_search_success() {
        let app = Router::new().route(
            "/api/search",
            post(|| async {
                Json(json!({
                    "results": [{ "id": 2, "title": "Shipping", "body": "Shipping takes 3 days.", "score": 2 }],
                    "summary": "Shipping takes 3 days.",
                    "sources": [2]
                }))
            }),
        );
        let url = spawn(app).await;

        let state = client(&url).search("shipping").await.unwrap();
        assert_eq!(state.sources, vec![2]);
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].score, 2);
        assert_eq!(state.summary, "Shipping takes 3 days.");
        assert_eq!(state.msg, "");
    }

    #[tokio::test]
    async fn test_search_sends_sanitized_query() {
        let url = spawn(echo_app()).await;

        let state = client(&url).search("  refund days  ").await.unwrap();
        assert_eq!(state.msg, "query=refund days");
    }

    #[tokio::test]
    async fn test_search_prefixes_removal_message() {
        let url = spawn(echo_app()).await;

        let state = client(&url).search("refund <days>").await.unwrap();
        assert_eq!(
            state.msg,
            "Some characters were removed from the query. query=refund days"
        );
    }

    #[tokio::test]
    async fn test_search_removal_message_alone() {
        let app = Router::new().route(
            "/api/search",
            post(|| async { Json(json!({ "results": [], "summary": "", "sources": [] })) }),
        );
        let url = spawn(app).await;

        let state = client(&url).search("days$").await.unwrap();
        assert_eq!(state.msg, MSG_CHARS_REMOVED);
    }

    #[tokio::test]
    async fn test_search_missing_fields_default() {
        let app = Router::new().route("/api/search", post(|| async { Json(json!({})) }));
        let url = spawn(app).await;

        let state = client(&url).search("days").await.unwrap();
        assert_eq!(state, SearchState::default());
    }

    #[test]
    fn test_search_invalid_query_skips_network() {
        // Nothing listens here; reaching the network would fail
        let client = client("http://127.0.0.1:9");
        let state = assert_ok!(tokio_test::block_on(client.search(" <>^~ ")));
        assert_eq!(state, SearchState::message(MSG_INVALID_QUERY));
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let app = Router::new().route(
            "/api/search",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let url = spawn(app).await;
        let client = client(&url);

        let err = assert_err!(client.search("days").await);
        assert!(matches!(err, AppError::UpstreamStatus { status: 500 }));

        let state = client.search_state("days").await;
        assert_eq!(state, SearchState::message("Status 500"));
    }

    #[tokio::test]
    async fn test_search_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = client(&url);

        let err = assert_err!(client.search("days").await);
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));

        let state = client.search_state("days").await;
        assert_eq!(state, SearchState::message(MSG_REQUEST_FAILED));
    }

    #[tokio::test]
    async fn test_search_non_json_body_is_request_failure() {
        let app = Router::new().route("/api/search", post(|| async { "not json" }));
        let url = spawn(app).await;

        let state = client(&url).search_state("days").await;
        assert_eq!(state.msg, MSG_REQUEST_FAILED);
    }
}
