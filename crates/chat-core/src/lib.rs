//! Chat client core.
//!
//! Owns every state transition of the client. Network access goes through
//! the port traits in [`ports`]; browser implementations live in
//! `chat-platform`.

pub mod ports;
pub mod registry;
pub mod session_state;
pub mod gateway;
pub mod relay;
pub mod event_bus;
