//! Chat client — the submit → request → render cycle.
//!
//! 1. Trim the input; blank input is ignored
//! 2. Append the user message to the history and render it
//! 3. POST the message plus the full history to the backend
//! 4. Append and render the answer, show the debug payload
//!
//! At most one request is in flight. `clear()` starts a new session and
//! abandons any pending reply.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    Result,
    debug::DebugSummary,
    message::{History, Message},
    session::Session,
    wire::{ChatRequest, ChatResponse},
};
use crate::ports::*;

/// What happened to a submitted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank after trimming; nothing happened
    Ignored,
    /// Another request is still in flight; nothing happened
    Busy,
    /// The backend replied with this answer
    Answered(String),
    /// The reply arrived after `clear()` and was dropped
    Discarded,
}

struct ClientState {
    session: Session,
    /// Bumped on every clear; a reply is only applied if the epoch still matches
    epoch: u64,
    in_flight: bool,
}

pub struct ChatClient {
    state: RefCell<ClientState>,
    backend: Rc<dyn ChatBackendPort>,
    view: Rc<dyn ChatViewPort>,
}

impl ChatClient {
    pub fn new(backend: Rc<dyn ChatBackendPort>, view: Rc<dyn ChatViewPort>) -> Self {
        let session = Session::new();
        log_session_start(&session);
        Self {
            state: RefCell::new(ClientState {
                session,
                epoch: 0,
                in_flight: false,
            }),
            backend,
            view,
        }
    }

    /// Submit user input.
    ///
    /// Must be driven via `wasm_bindgen_futures::spawn_local` in the browser;
    /// the client state is never borrowed across the network await.
    pub async fn submit(&self, raw: &str) -> Result<SubmitOutcome> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let user_message = Message::user(text);
        let (epoch, request) = {
            let mut state = self.state.borrow_mut();
            if state.in_flight {
                log::warn!("Request already in flight; submit rejected");
                return Ok(SubmitOutcome::Busy);
            }
            state.session.history.push(user_message.clone());
            state.in_flight = true;
            (
                state.epoch,
                ChatRequest::new(text, state.session.history.clone()),
            )
        };

        self.render_message(&user_message);
        self.view.clear_input();
        self.view.set_busy(true);

        log::debug!(
            "POST {} ({} message(s) of history)",
            self.backend.endpoint(),
            request.history.len()
        );
        let result = self.backend.send(&request).await;

        {
            let mut state = self.state.borrow_mut();
            if state.epoch != epoch {
                log::info!("Reply arrived after clear; discarded");
                return Ok(SubmitOutcome::Discarded);
            }
            state.in_flight = false;
        }
        self.view.set_busy(false);

        match result {
            Ok(response) => Ok(self.apply_response(response)),
            Err(e) => {
                log::error!("Chat exchange failed: {}", e);
                self.view.render(EntryKind::Error, &e.to_string());
                Err(e)
            }
        }
    }

    fn apply_response(&self, response: ChatResponse) -> SubmitOutcome {
        let reply = Message::assistant(response.answer.as_str());
        self.state.borrow_mut().session.history.push(reply.clone());
        self.render_message(&reply);

        let summary = response
            .debug
            .as_ref()
            .and_then(DebugSummary::from_payload)
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty());
        self.view.show_debug(&response.debug_text(), summary.as_deref());

        SubmitOutcome::Answered(response.answer)
    }

    /// Start over: empty history, empty transcript, empty debug panel.
    /// A reply still in flight will be dropped when it lands.
    pub fn clear(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.in_flight {
                log::info!("Abandoning in-flight request");
            }
            state.session = Session::new();
            state.epoch += 1;
            state.in_flight = false;
            log_session_start(&state.session);
        }
        self.view.clear_transcript();
        self.view.show_debug("", None);
        self.view.set_busy(false);
    }

    fn render_message(&self, message: &Message) {
        self.view.render(message.role.into(), &message.content);
    }

    /// Snapshot of the current history
    pub fn history(&self) -> History {
        self.state.borrow().session.history.clone()
    }

    pub fn session_id(&self) -> String {
        self.state.borrow().session.id.clone()
    }

    /// RFC 3339 start time of the current session
    pub fn session_started_at(&self) -> String {
        self.state.borrow().session.started_at.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().in_flight
    }
}

fn log_session_start(session: &Session) {
    log::info!("Chat session {} started at {}", session.id, session.started_at);
}
