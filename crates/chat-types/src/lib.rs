pub mod message;
pub mod session;
pub mod auth;
pub mod webhook;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::{AuthError, ChatError, ConfigError, RelayError};
pub type Result<T> = std::result::Result<T, ChatError>;
