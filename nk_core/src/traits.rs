//! Core traits for the Notekeep client

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::types::{Draft, Note, NoteId};

/// The four operations the remote persistence service exposes.
///
/// Implementations suspend the caller until a response or failure arrives;
/// there is no built-in timeout, retry, or cancellation. Any non-success
/// outcome surfaces as a [`RemoteError`] without interpretation.
#[async_trait]
pub trait NoteService: Send + Sync {
    /// Fetch the full note collection, in whatever order the service
    /// returns it.
    async fn list_notes(&self) -> Result<Vec<Note>, RemoteError>;

    /// Persist a new note. The service assigns the id.
    async fn create_note(&self, draft: &Draft) -> Result<Note, RemoteError>;

    /// Replace both fields of the note with the given id.
    async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, RemoteError>;

    /// Delete the note with the given id.
    async fn delete_note(&self, id: &NoteId) -> Result<(), RemoteError>;
}
