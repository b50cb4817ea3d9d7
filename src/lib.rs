//! Core of the DM composer: relay client, form state machine and config.
//! The GTK shell in `main.rs` drives these.

pub mod api;
pub mod config;
pub mod error;
pub mod form;

pub use api::client::DmClient;
pub use api::models::{DmReply, DmRequest};
pub use config::Config;
pub use error::SendError;
pub use form::{update, Effect, FormState, Msg};
