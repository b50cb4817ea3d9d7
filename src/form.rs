//! Submission form: a pure state machine the compose view renders from.

use crate::api::models::DmRequest;
use crate::error::SendError;

pub const SENDING: &str = "Sending...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub message: String,
    /// `None` until the first submission attempt.
    pub status: Option<String>,
    in_flight: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the identifier entry.
    UsernameChanged(String),
    /// User edited the message entry.
    MessageChanged(String),
    /// User pressed Send or hit Enter in the message entry.
    SubmitClicked,
    /// The outstanding request completed, one way or another.
    SendFinished(Result<String, SendError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Send(DmRequest),
    /// Surface a failure beyond the status line (a toast in the window).
    Notify(String),
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::UsernameChanged(text) => {
            state.username = text;
            Vec::new()
        }
        Msg::MessageChanged(text) => {
            state.message = text;
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.message.is_empty() || state.in_flight {
                log::debug!("Submit ignored (empty message or request in flight)");
                return (state, Vec::new());
            }
            state.in_flight = true;
            state.status = Some(SENDING.to_string());
            vec![Effect::Send(DmRequest {
                username: state.username.clone(),
                message: state.message.clone(),
            })]
        }
        Msg::SendFinished(result) => {
            state.in_flight = false;
            match result {
                Ok(status) => {
                    log::info!("DM sent: {status}");
                    state.message.clear();
                    state.status = Some(status);
                    Vec::new()
                }
                Err(err) => {
                    log::warn!("DM failed: {err}");
                    let text = err.to_string();
                    state.status = Some(text.clone());
                    vec![Effect::Notify(text)]
                }
            }
        }
    };

    (state, effects)
}
