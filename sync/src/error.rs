use nk_core::RemoteError;
use strum::Display;
use thiserror::Error;

/// The controller's action classes. Every recorded failure is attributed
/// to one of these; `Submit` and `Remove` additionally carry an in-flight
/// flag, `Refresh` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActionClass {
    Submit,
    Remove,
    Refresh,
}

#[derive(Debug, Error)]
pub enum SyncError {
    /// A second invocation of the same mutation class arrived while one was
    /// still awaiting its response. The store and the network were not
    /// touched.
    #[error("A {action} is already in flight")]
    AlreadyInFlight { action: ActionClass },

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
