//! Browser platform adapters for the chat client.

pub mod http;
pub mod config;

pub use http::HttpChatBackend;

#[cfg(test)]
mod tests;
