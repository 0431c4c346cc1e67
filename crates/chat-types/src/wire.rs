//! Request/response bodies exchanged with the chat backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::message::History;

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Latest user text, already trimmed
    pub message: String,
    /// Full history, including the message above
    pub history: History,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: History) -> Self {
        Self {
            message: message.into(),
            history,
        }
    }
}

/// Reply from the backend. `debug` is opaque and shown verbatim.
///
/// `None` means the field was absent; an explicit `null` is kept as
/// `Some(Value::Null)` so it still renders as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub debug: Option<Value>,
}

/// Only called when the field is present, so `null` becomes `Some(Null)`
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ChatResponse {
    /// Debug payload pretty-printed with two-space indentation.
    /// An absent payload renders as empty text; `null` renders as `null`.
    pub fn debug_text(&self) -> String {
        match &self.debug {
            Some(value) => serde_json::to_string_pretty(value).unwrap_or_default(),
            None => String::new(),
        }
    }
}
