//! Browser platform adapters.
//!
//! Everything here talks to the network through `fetch()` and only runs
//! inside a browser (or Node with a fetch polyfill).

pub mod identity;
pub mod webhook;
pub mod config;

pub use identity::GoTrueIdentity;
pub use webhook::FetchWebhook;
pub use config::fetch_config;
