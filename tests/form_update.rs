use dm_composer::form::SENDING;
use dm_composer::{update, DmRequest, Effect, FormState, Msg, SendError};
use pretty_assertions::assert_eq;

fn filled(username: &str, message: &str) -> FormState {
    let (state, _) = update(FormState::new(), Msg::UsernameChanged(username.to_string()));
    let (state, _) = update(state, Msg::MessageChanged(message.to_string()));
    state
}

fn submitted(username: &str, message: &str) -> FormState {
    let (state, effects) = update(filled(username, message), Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    state
}

#[test]
fn empty_message_does_not_send() {
    let state = filled("alice", "");
    let (next, effects) = update(state.clone(), Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert_eq!(next.status, None);
}

#[test]
fn submit_emits_one_send_and_disables_control() {
    let (state, effects) = update(filled("alice", "hi there"), Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::Send(DmRequest {
            username: "alice".into(),
            message: "hi there".into(),
        })]
    );
    assert!(state.in_flight());
    assert!(!state.can_submit());
    assert_eq!(state.status.as_deref(), Some(SENDING));
}

#[test]
fn submit_while_in_flight_is_ignored() {
    let state = submitted("alice", "hi");
    let (next, effects) = update(state.clone(), Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn success_clears_message_and_keeps_username() {
    let state = submitted("alice", "hi");
    let (state, effects) = update(state, Msg::SendFinished(Ok("Sent!".into())));
    assert!(effects.is_empty());
    assert_eq!(state.status.as_deref(), Some("Sent!"));
    assert_eq!(state.message, "");
    assert_eq!(state.username, "alice");
    assert!(state.can_submit());
}

#[test]
fn http_failure_keeps_message() {
    let state = submitted("alice", "hi");
    let err = SendError::Http { code: 500, status: Some("Rate limited".into()) };
    let (state, effects) = update(state, Msg::SendFinished(Err(err)));
    assert_eq!(effects, vec![Effect::Notify("Error: Rate limited".into())]);
    assert_eq!(state.status.as_deref(), Some("Error: Rate limited"));
    assert_eq!(state.message, "hi");
    assert!(state.can_submit());
}

#[test]
fn transport_failure_shows_error_message() {
    let state = submitted("alice", "hi");
    let err = SendError::Transport("connection refused".into());
    let (state, effects) = update(state, Msg::SendFinished(Err(err)));
    assert_eq!(effects, vec![Effect::Notify("Error: connection refused".into())]);
    assert_eq!(state.status.as_deref(), Some("Error: connection refused"));
    assert!(state.can_submit());
}

#[test]
fn unknown_failure_shows_generic_text() {
    let state = submitted("alice", "hi");
    let (state, effects) = update(state, Msg::SendFinished(Err(SendError::Unknown)));
    assert_eq!(effects, vec![Effect::Notify("An unknown error occurred.".into())]);
    assert_eq!(state.status.as_deref(), Some("An unknown error occurred."));
    assert!(state.can_submit());
}

#[test]
fn resubmit_after_failure_sends_again() {
    let state = submitted("alice", "hi");
    let (state, _) = update(state, Msg::SendFinished(Err(SendError::Unknown)));
    let (_, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
}

#[test]
fn editing_during_flight_is_kept_and_cleared_on_success() {
    let state = submitted("alice", "hi");
    let (state, effects) = update(state, Msg::MessageChanged("hi again".into()));
    assert!(effects.is_empty());
    assert!(state.in_flight());
    let (state, _) = update(state, Msg::SendFinished(Ok("Sent!".into())));
    assert_eq!(state.message, "");
}
