//! Browser view for the chat client.
//!
//! `render` holds the pure markup helpers (escaping, labels);
//! `dom` implements `chat_core::ports::ChatViewPort` on top of web-sys.

pub mod render;
pub mod dom;
