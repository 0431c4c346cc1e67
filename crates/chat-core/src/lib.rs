//! Chat client core: port traits and the submit/clear flow.
//! Depends only on `chat-types`; browser specifics live behind the ports.

pub mod ports;
pub mod client;
pub mod keys;
