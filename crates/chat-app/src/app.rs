//! Page wiring — binds the send/clear controls and the input's key chord
//! to the chat client.

use std::rc::Rc;

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use chat_core::client::{ChatClient, SubmitOutcome};
use chat_core::keys::{is_send_chord, Modifiers};
use chat_platform::config::load_from_page;
use chat_platform::HttpChatBackend;
use chat_types::{ChatError, Result};
use chat_ui::dom::DomChatView;

/// The mounted application
pub struct ChatApp {
    client: Rc<ChatClient>,
    view: Rc<DomChatView>,
}

impl ChatApp {
    /// Read the page config, attach to the DOM and bind event listeners.
    pub fn mount() -> Result<Self> {
        let config = load_from_page();
        let view = Rc::new(DomChatView::attach_to_page(&config)?);
        let backend = Rc::new(HttpChatBackend::from_config(&config));
        let client = Rc::new(ChatClient::new(backend, view.clone()));

        let app = Self { client, view };
        app.bind_send()?;
        app.bind_clear()?;
        app.bind_key_chord()?;
        Ok(app)
    }

    fn bind_send(&self) -> Result<()> {
        let client = self.client.clone();
        let view = self.view.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            dispatch_submit(client.clone(), view.input_value());
        });
        listen(self.view.send_control(), "click", on_click)
    }

    fn bind_clear(&self) -> Result<()> {
        let client = self.client.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            client.clear();
        });
        listen(self.view.clear_control(), "click", on_click)
    }

    fn bind_key_chord(&self) -> Result<()> {
        let client = self.client.clone();
        let view = self.view.clone();
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let mods = Modifiers {
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
            };
            if is_send_chord(&event.key(), mods) {
                event.prevent_default();
                dispatch_submit(client.clone(), view.input_value());
            }
        });
        listen(self.view.input_element(), "keydown", on_keydown)
    }
}

/// Run one submit on the browser event loop
fn dispatch_submit(client: Rc<ChatClient>, text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        match client.submit(&text).await {
            Ok(SubmitOutcome::Answered(answer)) => {
                log::debug!("Answer received ({} chars)", answer.chars().count());
            }
            Ok(outcome) => log::debug!("Submit finished: {:?}", outcome),
            // already logged and rendered by the client
            Err(e) => log::debug!("Submit failed: {}", e),
        }
    });
}

/// Attach a listener for the lifetime of the page
fn listen<T: ?Sized + WasmClosure>(target: &Element, event: &str, callback: Closure<T>) -> Result<()> {
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))?;
    callback.forget();
    Ok(())
}
