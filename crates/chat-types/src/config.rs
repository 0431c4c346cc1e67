use serde::{Deserialize, Serialize};

use crate::{ChatError, Result};

/// Top-level client configuration.
///
/// Every section falls back to its default, so a page only needs to spell
/// out the fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL the chat request is POSTed to
    pub endpoint: String,
    pub labels: RoleLabels,
    pub elements: ElementIds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            labels: RoleLabels::default(),
            elements: ElementIds::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ChatError::Config("endpoint must not be empty".to_string()));
        }
        let ids = [
            ("transcript", &self.elements.transcript),
            ("input", &self.elements.input),
            ("debug", &self.elements.debug),
            ("send", &self.elements.send),
            ("clear", &self.elements.clear),
        ];
        for (name, id) in ids {
            if id.trim().is_empty() {
                return Err(ChatError::Config(format!(
                    "element id for `{}` must not be empty",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Transcript labels shown in front of each entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleLabels {
    pub user: String,
    pub assistant: String,
    pub error: String,
}

impl Default for RoleLabels {
    fn default() -> Self {
        Self {
            user: "User".to_string(),
            assistant: "SAP AI".to_string(),
            error: "Error".to_string(),
        }
    }
}

/// DOM element ids the client binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub transcript: String,
    pub input: String,
    pub debug: String,
    /// Optional one-line digest of the debug payload; skipped if absent from the page
    pub debug_summary: String,
    pub send: String,
    pub clear: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            transcript: "chat".to_string(),
            input: "input".to_string(),
            debug: "debug".to_string(),
            debug_summary: "debug-summary".to_string(),
            send: "send".to_string(),
            clear: "clear".to_string(),
        }
    }
}

pub const DEFAULT_ENDPOINT: &str = "/chat";

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "chat-config";
