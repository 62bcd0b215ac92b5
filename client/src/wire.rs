//! Wire-format mapping for the persistence service.
//!
//! The service names the identifier field `_id`; internally that is a
//! [`NoteId`]. The mapping happens here and nowhere else.

use nk_core::{Draft, Note, NoteId, RemoteError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct NoteDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteDto {
    pub fn into_note(self) -> Result<Note, RemoteError> {
        let id = NoteId::new(self.id)
            .ok_or_else(|| RemoteError::deserialize("service returned an empty _id"))?;
        Ok(Note {
            id,
            title: self.title,
            content: self.content,
        })
    }
}

/// Request body for create and update. The id never travels in the body:
/// the service assigns it on create and takes it from the path on update.
#[derive(Debug, Serialize)]
pub(crate) struct NotePayload<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> From<&'a Draft> for NotePayload<'a> {
    fn from(draft: &'a Draft) -> Self {
        Self {
            title: &draft.title,
            content: &draft.content,
        }
    }
}
