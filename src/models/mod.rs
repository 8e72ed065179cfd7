//! Data models for the webhook service.
//!
//! Webhook bodies are change-feed documents; only the fields the handlers use are modeled.

mod article;
mod invite;
mod view;

pub use article::*;
pub use invite::*;
pub use view::*;
