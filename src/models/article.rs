//! New-article webhook model.

use serde::Deserialize;

/// A new article was published under a topic.
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticleEvent {
    pub topic: String,
}
