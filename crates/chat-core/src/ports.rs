//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (HTTP) and `chat-ui` (DOM).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chat_types::{
    Result,
    message::Role,
    wire::{ChatRequest, ChatResponse},
};

// ─── Backend Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatBackendPort {
    /// Send one chat exchange and decode the reply.
    /// No retries and no timeout: a failure is returned as-is.
    async fn send(&self, req: &ChatRequest) -> Result<ChatResponse>;

    /// Where requests go (for logging/debug)
    fn endpoint(&self) -> &str;
}

// ─── View Port ───────────────────────────────────────────────

/// Who an entry in the transcript belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    User,
    Assistant,
    Error,
}

impl From<Role> for EntryKind {
    fn from(role: Role) -> Self {
        match role {
            Role::User => EntryKind::User,
            Role::Assistant => EntryKind::Assistant,
        }
    }
}

/// Everything the client needs from the page.
///
/// Implementations own escaping: `content` is raw text and must never be
/// interpreted as markup.
pub trait ChatViewPort {
    /// Append one transcript entry and scroll it into view
    fn render(&self, kind: EntryKind, content: &str);

    /// Remove every transcript entry
    fn clear_transcript(&self);

    /// Replace the debug panel text; `summary` is the optional one-line digest
    fn show_debug(&self, text: &str, summary: Option<&str>);

    fn clear_input(&self);

    /// Reflect the in-flight state (e.g. disable the send control)
    fn set_busy(&self, busy: bool);
}
