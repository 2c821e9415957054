//! API handlers module

pub mod health;
pub mod search;

use axum::http::{Method, Uri};
use faqdesk_common::errors::AppError;

/// Fallback for unknown routes and unsupported methods
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        path: uri.to_string(),
        method: method.to_string(),
    }
}
