//! # Notekeep Sync
//!
//! Client-side state synchronization: the in-memory [`StateStore`] and the
//! [`SyncController`] that keeps it consistent with the remote service by
//! refreshing the whole collection after every successful mutation.

pub mod controller;
pub mod error;
pub mod store;

pub use controller::SyncController;
pub use error::{ActionClass, SyncError};
pub use store::StateStore;
