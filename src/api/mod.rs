//! Webhook API module.
//!
//! Change-feed webhooks post raw JSON documents; bodies are decoded by hand so
//! that a missing `Content-Type` header is not an error.

mod articles;
mod invite;

pub use articles::*;
pub use invite::*;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Result type for webhook handlers.
pub type ApiResult<T> = Result<T, AppError>;

/// Decode a webhook body into `T`.
fn decode<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    Ok(serde_json::from_slice(body)?)
}
