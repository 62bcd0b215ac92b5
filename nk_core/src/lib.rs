//! # Notekeep Core
//!
//! Shared types and traits for the Notekeep client.
//!
//! This crate provides:
//! - The note data model (`Note`, `NoteId`, `Draft`, `EditTarget`)
//! - The `NoteService` trait implemented by remote backends
//! - The `RemoteError` taxonomy raised at the service boundary

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::RemoteError;
pub use traits::NoteService;
pub use types::{Draft, DraftField, EditTarget, Note, NoteId};
