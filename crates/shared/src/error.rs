use serde::{Deserialize, Serialize};

/// Body returned with every failed API response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Generic failure message for a collection, e.g. "Failed to fetch skills".
    pub fn fetch_failed(collection: &str) -> Self {
        Self::new(format!("Failed to fetch {collection}"))
    }
}
