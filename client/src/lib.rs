//! # Notekeep HTTP Client
//!
//! reqwest implementation of [`NoteService`] against the persistence
//! service's REST surface:
//!
//! | Operation | Method | Path          |
//! |-----------|--------|---------------|
//! | list      | GET    | `/notes`      |
//! | create    | POST   | `/notes`      |
//! | update    | PUT    | `/notes/{id}` |
//! | delete    | DELETE | `/notes/{id}` |
//!
//! Each call suspends until a response or failure arrives; there is no
//! retry, timeout, or cancellation here. Non-success statuses surface as
//! [`RemoteError::Service`] with the body text captured for rendering.

mod wire;

use async_trait::async_trait;
use nk_core::{Draft, Note, NoteId, NoteService, RemoteError};
use reqwest::{Client, Response};

use crate::wire::{NoteDto, NotePayload};

pub struct HttpNoteClient {
    client: Client,
    base_url: String,
}

impl HttpNoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    async fn check(resp: Response) -> Result<Response, RemoteError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(RemoteError::Service {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl NoteService for HttpNoteClient {
    async fn list_notes(&self) -> Result<Vec<Note>, RemoteError> {
        let resp = self
            .client
            .get(self.notes_url())
            .send()
            .await
            .map_err(|e| RemoteError::transport(e.to_string()))?;

        let dtos: Vec<NoteDto> = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::deserialize(e.to_string()))?;

        dtos.into_iter().map(NoteDto::into_note).collect()
    }

    async fn create_note(&self, draft: &Draft) -> Result<Note, RemoteError> {
        let resp = self
            .client
            .post(self.notes_url())
            .json(&NotePayload::from(draft))
            .send()
            .await
            .map_err(|e| RemoteError::transport(e.to_string()))?;

        let dto: NoteDto = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::deserialize(e.to_string()))?;

        dto.into_note()
    }

    async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, RemoteError> {
        let resp = self
            .client
            .put(self.note_url(id))
            .json(&NotePayload::from(draft))
            .send()
            .await
            .map_err(|e| RemoteError::transport(e.to_string()))?;

        let dto: NoteDto = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::deserialize(e.to_string()))?;

        dto.into_note()
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), RemoteError> {
        let resp = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(|e| RemoteError::transport(e.to_string()))?;

        Self::check(resp).await?;
        Ok(())
    }
}
