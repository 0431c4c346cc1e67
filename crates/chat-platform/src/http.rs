//! HTTP adapter for the chat backend.
//!
//! One JSON POST per exchange, sent with browser `fetch()` via gloo-net.
//! The body is decoded as `{answer, debug}` whatever the status code;
//! the status only shows up in logs and decode errors.

use async_trait::async_trait;
use gloo_net::http::Request;

use chat_core::ports::ChatBackendPort;
use chat_types::{
    ChatError, Result,
    config::ClientConfig,
    wire::{ChatRequest, ChatResponse},
};

pub struct HttpChatBackend {
    endpoint: String,
}

impl HttpChatBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.endpoint.clone())
    }
}

#[async_trait(?Send)]
impl ChatBackendPort for HttpChatBackend {
    async fn send(&self, req: &ChatRequest) -> Result<ChatResponse> {
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            log::warn!("{} answered HTTP {}", self.endpoint, status);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        decode_response(status, &body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a response body; `status` is only used to annotate failures.
pub fn decode_response(status: u16, body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body).map_err(|e| ChatError::Decode {
        status,
        message: e.to_string(),
    })
}
