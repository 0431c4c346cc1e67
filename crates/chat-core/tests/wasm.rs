//! WASM-target tests for chat-core.
//!
//! Runs the ChatClient submit/clear flow and key chord detection
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_core::client::{ChatClient, SubmitOutcome};
use chat_core::keys::{is_send_chord, Modifiers};
use chat_core::ports::*;
use chat_types::message::*;
use chat_types::wire::*;
use chat_types::ChatError;

use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;

struct MockBackend {
    reply: chat_types::Result<ChatResponse>,
    requests: RefCell<Vec<ChatRequest>>,
}

#[async_trait(?Send)]
impl ChatBackendPort for MockBackend {
    async fn send(&self, req: &ChatRequest) -> chat_types::Result<ChatResponse> {
        self.requests.borrow_mut().push(req.clone());
        self.reply.clone()
    }

    fn endpoint(&self) -> &str {
        "/chat"
    }
}

#[derive(Default)]
struct RecordingView {
    entries: RefCell<Vec<(EntryKind, String)>>,
    debug: RefCell<String>,
    busy: RefCell<bool>,
}

impl ChatViewPort for RecordingView {
    fn render(&self, kind: EntryKind, content: &str) {
        self.entries.borrow_mut().push((kind, content.to_string()));
    }

    fn clear_transcript(&self) {
        self.entries.borrow_mut().clear();
    }

    fn show_debug(&self, text: &str, _summary: Option<&str>) {
        *self.debug.borrow_mut() = text.to_string();
    }

    fn clear_input(&self) {}

    fn set_busy(&self, busy: bool) {
        *self.busy.borrow_mut() = busy;
    }
}

fn setup(reply: chat_types::Result<ChatResponse>) -> (ChatClient, Rc<MockBackend>, Rc<RecordingView>) {
    let backend = Rc::new(MockBackend {
        reply,
        requests: RefCell::new(Vec::new()),
    });
    let view = Rc::new(RecordingView::default());
    let client = ChatClient::new(backend.clone(), view.clone());
    (client, backend, view)
}

// ─── ChatClient Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn hello_scenario() {
    let reply = serde_json::from_str(r#"{"answer":"Hi there","debug":{"x":1}}"#).unwrap();
    let (client, backend, view) = setup(Ok(reply));

    let outcome = client.submit("Hello").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Answered("Hi there".to_string()));

    assert_eq!(
        *view.entries.borrow(),
        vec![
            (EntryKind::User, "Hello".to_string()),
            (EntryKind::Assistant, "Hi there".to_string()),
        ]
    );
    assert_eq!(*view.debug.borrow(), "{\n  \"x\": 1\n}");
    assert_eq!(backend.requests.borrow()[0].history.len(), 1);
    assert!(!*view.busy.borrow());
}

#[wasm_bindgen_test]
async fn blank_submit_ignored() {
    let (client, backend, view) = setup(Ok(ChatResponse {
        answer: "x".to_string(),
        debug: None,
    }));
    assert_eq!(client.submit("  \t").await.unwrap(), SubmitOutcome::Ignored);
    assert!(client.history().is_empty());
    assert!(view.entries.borrow().is_empty());
    assert!(backend.requests.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn failure_renders_error_entry() {
    let (client, _backend, view) = setup(Err(ChatError::Network("offline".to_string())));
    assert!(client.submit("Hello").await.is_err());
    assert_eq!(view.entries.borrow().len(), 2);
    assert_eq!(view.entries.borrow()[1].0, EntryKind::Error);
    assert_eq!(client.history().len(), 1);
    assert!(!client.is_busy());
}

#[wasm_bindgen_test]
async fn clear_after_exchange() {
    let (client, _backend, view) = setup(Ok(ChatResponse {
        answer: "A".to_string(),
        debug: Some(serde_json::json!({"k": "v"})),
    }));
    client.submit("M").await.unwrap();
    client.clear();
    assert!(client.history().is_empty());
    assert!(view.entries.borrow().is_empty());
    assert!(view.debug.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn history_roles_in_order() {
    let (client, _backend, _view) = setup(Ok(ChatResponse {
        answer: "A".to_string(),
        debug: None,
    }));
    client.submit("one").await.unwrap();
    client.submit("two").await.unwrap();
    let roles: Vec<Role> = client.history().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
}

// ─── Key Chord Tests ─────────────────────────────────────

#[wasm_bindgen_test]
fn send_chord() {
    assert!(is_send_chord("Enter", Modifiers { ctrl: true, ..Default::default() }));
    assert!(is_send_chord("Enter", Modifiers { meta: true, ..Default::default() }));
    assert!(!is_send_chord("Enter", Modifiers::default()));
}
