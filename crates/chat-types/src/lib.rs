pub mod message;
pub mod wire;
pub mod debug;
pub mod config;
pub mod error;
pub mod session;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
