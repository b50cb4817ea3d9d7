use thiserror::Error;

/// Shown when a failed response carries no usable status text.
pub const GENERIC_FAILURE: &str = "Failed to send message.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The relay answered with a non-2xx status.
    #[error("Error: {}", status.as_deref().unwrap_or(GENERIC_FAILURE))]
    Http { code: u16, status: Option<String> },
    /// The request never produced a response.
    #[error("Error: {0}")]
    Transport(String),
    /// The response body was not the JSON we expect.
    #[error("Error: {0}")]
    Decode(String),
    #[error("An unknown error occurred.")]
    Unknown,
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SendError::Decode(err.to_string())
        } else {
            SendError::Transport(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for SendError {
    fn from(_: tokio::task::JoinError) -> Self {
        SendError::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_server_status() {
        let err = SendError::Http { code: 500, status: Some("Rate limited".into()) };
        assert_eq!(err.to_string(), "Error: Rate limited");
    }

    #[test]
    fn http_error_falls_back_to_generic_text() {
        let err = SendError::Http { code: 502, status: None };
        assert_eq!(err.to_string(), format!("Error: {GENERIC_FAILURE}"));
    }

    async fn dying_worker() -> Result<String, SendError> {
        panic!("worker died")
    }

    #[tokio::test]
    async fn panicked_task_becomes_unknown() {
        let join_err = tokio::spawn(dying_worker()).await.unwrap_err();
        assert!(join_err.is_panic());
        let err = SendError::from(join_err);
        assert_eq!(err, SendError::Unknown);
        assert_eq!(err.to_string(), "An unknown error occurred.");
    }

    #[tokio::test]
    async fn cancelled_task_becomes_unknown() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let join_err = handle.await.unwrap_err();
        assert!(join_err.is_cancelled());
        assert_eq!(SendError::from(join_err), SendError::Unknown);
    }

    #[test]
    fn unknown_error_has_no_prefix() {
        assert_eq!(SendError::Unknown.to_string(), "An unknown error occurred.");
    }
}
