//! Client configuration from the hosting page.
//!
//! Overrides live in `<script type="application/json" id="chat-config">`.
//! A missing element means defaults; a broken one is logged and ignored.

use web_sys::Document;
use chat_types::config::{ClientConfig, CONFIG_ELEMENT_ID};

pub fn load_page_config(document: &Document) -> ClientConfig {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) => config_from_text(&text),
        None => {
            log::info!("No #{} element, using default config", CONFIG_ELEMENT_ID);
            ClientConfig::default()
        }
    }
}

pub fn config_from_text(text: &str) -> ClientConfig {
    if text.trim().is_empty() {
        return ClientConfig::default();
    }
    match ClientConfig::from_json(text) {
        Ok(config) => {
            log::info!("Config loaded (endpoint: {})", config.endpoint);
            config
        }
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            ClientConfig::default()
        }
    }
}

/// Read the config from the current page's document
pub fn load_from_page() -> ClientConfig {
    load_page_config(&gloo_utils::document())
}
