#[cfg(test)]
mod tests {
    use crate::config::config_from_text;
    use crate::http::{decode_response, HttpChatBackend};
    use chat_core::ports::ChatBackendPort;
    use chat_types::config::ClientConfig;
    use chat_types::ChatError;

    // ─── decode_response Tests ───────────────────────────────

    #[test]
    fn test_decode_success() {
        let resp = decode_response(200, r#"{"answer":"Hi there","debug":{"x":1}}"#).unwrap();
        assert_eq!(resp.answer, "Hi there");
        assert_eq!(resp.debug_text(), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn test_decode_ignores_status_when_body_is_valid() {
        let resp = decode_response(500, r#"{"answer":"degraded","debug":null}"#).unwrap();
        assert_eq!(resp.answer, "degraded");
        assert_eq!(resp.debug_text(), "null");
    }

    #[test]
    fn test_decode_failure_carries_status() {
        let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();
        match err {
            ChatError::Decode { status, .. } => assert_eq!(status, 502),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_answer() {
        let err = decode_response(200, r#"{"detail":"validation error"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid response (HTTP 200)"));
    }

    #[test]
    fn test_decode_empty_body() {
        assert!(decode_response(204, "").is_err());
    }

    // ─── Backend Tests ───────────────────────────────────────

    #[test]
    fn test_backend_endpoint_from_config() {
        let config = ClientConfig::from_json(r#"{"endpoint":"/api/chat"}"#).unwrap();
        let backend = HttpChatBackend::from_config(&config);
        assert_eq!(backend.endpoint(), "/api/chat");
        assert_eq!(HttpChatBackend::new("/chat").endpoint(), "/chat");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_from_text_valid() {
        let config = config_from_text(r#"{"labels":{"assistant":"Assistant"}}"#);
        assert_eq!(config.labels.assistant, "Assistant");
        assert_eq!(config.endpoint, "/chat");
    }

    #[test]
    fn test_config_from_text_blank() {
        assert_eq!(config_from_text("  \n "), ClientConfig::default());
    }

    #[test]
    fn test_config_from_text_malformed_falls_back() {
        assert_eq!(config_from_text("{oops"), ClientConfig::default());
    }

    #[test]
    fn test_config_from_text_invalid_falls_back() {
        assert_eq!(config_from_text(r#"{"endpoint":""}"#), ClientConfig::default());
    }
}
