//! DOM-backed implementation of the chat view port.
//!
//! Binds to elements already present in the page (see `ElementIds`).
//! The debug summary element is optional; everything else is required.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use chat_core::ports::{ChatViewPort, EntryKind};
use chat_types::{config::{ClientConfig, RoleLabels}, ChatError, Result};
use crate::render::{entry_class, entry_markup, label_for};

pub struct DomChatView {
    document: Document,
    transcript: Element,
    input: Element,
    debug: Element,
    debug_summary: Option<Element>,
    send: Element,
    clear: Element,
    labels: RoleLabels,
}

impl DomChatView {
    /// Look up every element named in `config.elements`.
    pub fn attach(document: &Document, config: &ClientConfig) -> Result<Self> {
        let ids = &config.elements;
        let debug_summary = document.get_element_by_id(&ids.debug_summary);
        if debug_summary.is_none() {
            log::debug!("No #{} element; debug summary disabled", ids.debug_summary);
        }

        Ok(Self {
            document: document.clone(),
            transcript: require(document, &ids.transcript)?,
            input: require(document, &ids.input)?,
            debug: require(document, &ids.debug)?,
            debug_summary,
            send: require(document, &ids.send)?,
            clear: require(document, &ids.clear)?,
            labels: config.labels.clone(),
        })
    }

    /// Attach to the current page's document
    pub fn attach_to_page(config: &ClientConfig) -> Result<Self> {
        Self::attach(&gloo_utils::document(), config)
    }

    /// Current text of the input field (textarea or input element)
    pub fn input_value(&self) -> String {
        if let Some(textarea) = self.input.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else {
            self.input.text_content().unwrap_or_default()
        }
    }

    pub fn input_element(&self) -> &Element {
        &self.input
    }

    pub fn send_control(&self) -> &Element {
        &self.send
    }

    pub fn clear_control(&self) -> &Element {
        &self.clear
    }

    fn append_entry(&self, kind: EntryKind, content: &str) -> Result<()> {
        let div = self
            .document
            .create_element("div")
            .map_err(|e| ChatError::Dom(format!("{:?}", e)))?;
        div.set_class_name(entry_class(kind));
        div.set_inner_html(&entry_markup(label_for(kind, &self.labels), content));
        self.transcript
            .append_child(&div)
            .map_err(|e| ChatError::Dom(format!("{:?}", e)))?;
        self.transcript.set_scroll_top(self.transcript.scroll_height());
        Ok(())
    }
}

impl ChatViewPort for DomChatView {
    fn render(&self, kind: EntryKind, content: &str) {
        if let Err(e) = self.append_entry(kind, content) {
            log::error!("Failed to render transcript entry: {}", e);
        }
    }

    fn clear_transcript(&self) {
        self.transcript.set_inner_html("");
    }

    fn show_debug(&self, text: &str, summary: Option<&str>) {
        self.debug.set_text_content(Some(text));
        if let Some(el) = &self.debug_summary {
            el.set_text_content(Some(summary.unwrap_or("")));
        }
    }

    fn clear_input(&self) {
        if let Some(textarea) = self.input.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value("");
        } else if let Some(input) = self.input.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn set_busy(&self, busy: bool) {
        let result = if busy {
            self.send.set_attribute("disabled", "")
        } else {
            self.send.remove_attribute("disabled")
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle send control: {:?}", e);
        }
        if let Err(e) = self
            .transcript
            .set_attribute("aria-busy", if busy { "true" } else { "false" })
        {
            log::warn!("Failed to set aria-busy on transcript: {:?}", e);
        }
    }
}

fn require(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ChatError::Dom(format!("missing element #{}", id)))
}
