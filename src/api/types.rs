//! Response types for the API endpoints.

use serde::Serialize;

use crate::catalog::Item;

/// One entry of `GET /items`.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    pub name: String,
    /// `"bus"` or `"load"`.
    pub kind: &'static str,
    pub sector: Option<String>,
    pub emergency: bool,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            kind: if item.is_load { "load" } else { "bus" },
            sector: item.sector.clone(),
            emergency: item.emergency,
        }
    }
}

/// Body of `GET /items/{name}/tree`.
#[derive(Debug, Clone, Serialize)]
pub struct TreeResponse {
    pub item: String,
    /// Indented text drawing, one line per bus or load.
    pub tree: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
