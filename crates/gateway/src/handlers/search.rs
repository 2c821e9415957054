//! Search handlers

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;

use crate::AppState;
use faqdesk_common::{
    errors::{AppError, Result},
    metrics::{self, SearchOutcome},
    models::SearchResult,
};

/// The `query` field of a search request, accepted as JSON or as an
/// urlencoded form. A missing field is an empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
struct FormBody {
    #[serde(default)]
    query: String,
}

/// Loose coercion of the JSON `query` value. Falsy values (`null`, `false`,
/// `0`, `""`) mean no query; anything else is converted to text.
fn query_text(value: &Value) -> String {
    match value {
        Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => coerce(other),
    }
}

/// Arrays join their elements with commas (nulls become empty), objects
/// render as `[object Object]`, integral numbers drop the fraction.
fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn body_rejection(status: StatusCode, message: String, limit: usize) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::InvalidFormat { message }
    }
}

impl FromRequest<AppState> for SearchInput {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self> {
        let limit = state.config.server.max_body_bytes;
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<FormBody>::from_request(req, state)
                .await
                .map_err(|e| body_rejection(e.status(), e.body_text(), limit))?;
            return Ok(Self { query: body.query });
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| body_rejection(e.status(), e.body_text(), limit))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self {
                query: String::new(),
            });
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidFormat {
            message: format!("request body is not valid JSON: {}", e),
        })?;

        Ok(Self {
            query: value.get("query").map(query_text).unwrap_or_default(),
        })
    }
}

/// Score the FAQ corpus against a query
pub async fn search(
    State(state): State<AppState>,
    input: SearchInput,
) -> Result<Json<SearchResult>> {
    let start = Instant::now();

    let result = state.searcher.search(&input.query);
    let elapsed = start.elapsed();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            if matches!(e, AppError::EmptyQuery) {
                metrics::record_search(elapsed.as_secs_f64(), SearchOutcome::EmptyQuery, 0);
            }
            return Err(e);
        }
    };

    let outcome = if result.is_empty() {
        SearchOutcome::NoMatch
    } else {
        SearchOutcome::Matched
    };
    metrics::record_search(elapsed.as_secs_f64(), outcome, result.results.len());

    tracing::info!(
        outcome = outcome.as_str(),
        results = result.results.len(),
        sources = ?result.sources,
        latency_us = elapsed.as_micros() as u64,
        "Search completed"
    );

    Ok(Json(result))
}
