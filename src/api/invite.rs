//! Invite-code webhook endpoint.

use axum::{body::Bytes, http::StatusCode};
use serde_json::Value;

use super::{decode, ApiResult};
use crate::models::InviteCodeEvent;

/// POST /invitecode - Log an invite code and the devices to notify.
pub async fn invite_code(body: Bytes) -> ApiResult<StatusCode> {
    tracing::info!("Received invitecode webhook");

    let event: InviteCodeEvent = decode(&body)?;

    tracing::info!(
        "Send a notification to {} with device tokens {}",
        event.name,
        format_tokens(&event.registration_ids)
    );

    Ok(StatusCode::OK)
}

/// Renders tokens as `["t1", "t2"]`, each element as JSON.
fn format_tokens(tokens: &[Value]) -> String {
    let parts: Vec<String> = tokens.iter().map(Value::to_string).collect();
    format!("[{}]", parts.join(", "))
}
