//! Document-store view query result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of querying a map/reduce view.
///
/// Rows are kept as raw JSON: map views emit `{id, key, value}` objects,
/// reduced views omit `id`, and the rows are only logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    pub rows: Vec<Value>,
}
