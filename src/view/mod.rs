//! Document-store view client.
//!
//! Queries a map/reduce view over HTTP, e.g. the `user_topics` view that maps
//! topics to subscribed user profiles.

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, instrument};

use crate::errors::AppError;
use crate::models::ViewResponse;

/// HTTP client bound to a single view. Shared through `Arc` in `AppState`.
#[derive(Debug)]
pub struct ViewClient {
    http: reqwest::Client,
    url: Url,
}

impl ViewClient {
    /// Create a client for the view at `url`.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the rows emitted under `key`.
    ///
    /// View keys are JSON values, so the key is sent JSON-encoded
    /// (`?key="design"`).
    #[instrument(skip(self), fields(view = %self.url))]
    pub async fn query_by_key(&self, key: &str) -> Result<ViewResponse, AppError> {
        let encoded_key = serde_json::to_string(key)
            .map_err(|e| AppError::Internal(format!("Failed to encode view key: {}", e)))?;

        let response = self
            .http
            .get(self.url.clone())
            .query(&[("key", encoded_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "View query returned {}",
                status
            )));
        }

        let body = response.bytes().await?;
        debug!("View query returned {} bytes", body.len());

        serde_json::from_slice(&body)
            .map_err(|e| AppError::Upstream(format!("Invalid view response: {}", e)))
    }
}
