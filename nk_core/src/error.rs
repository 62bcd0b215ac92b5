use thiserror::Error;

/// Errors raised at the remote service boundary.
///
/// The client performs no interpretation beyond exposing the failure:
/// transport problems, non-success statuses, and undecodable bodies each
/// keep their own shape so callers can render them distinctly.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    #[error("Service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Malformed response body: {reason}")]
    Deserialize { reason: String },
}

impl RemoteError {
    pub fn transport(reason: impl Into<String>) -> Self {
        RemoteError::Transport {
            reason: reason.into(),
        }
    }

    pub fn deserialize(reason: impl Into<String>) -> Self {
        RemoteError::Deserialize {
            reason: reason.into(),
        }
    }

    /// True for failures where the service never acknowledged the request.
    pub fn is_transport(&self) -> bool {
        matches!(self, RemoteError::Transport { .. })
    }
}
