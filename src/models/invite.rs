//! Invite-code webhook model.

use serde::Deserialize;
use serde_json::Value;

/// An invite code was created for a user with registered devices.
#[derive(Debug, Clone, Deserialize)]
pub struct InviteCodeEvent {
    pub name: String,
    /// Push-notification device tokens, passed through as sent
    pub registration_ids: Vec<Value>,
}
