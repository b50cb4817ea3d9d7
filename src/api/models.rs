use serde::{Deserialize, Serialize};

/// Body of a `POST /send-dm`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DmRequest {
    pub username: String,
    pub message: String,
}

/// What the relay answers with, on success and on failure alike.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DmReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DmReply {
    /// Text to surface when the relay reports a failure. Empty strings count as absent.
    pub fn failure_text(&self) -> Option<String> {
        non_empty(&self.status).or_else(|| non_empty(&self.error))
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.clone().filter(|s| !s.is_empty())
}
