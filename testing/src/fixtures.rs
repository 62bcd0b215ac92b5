use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nk_core::{Draft, Note, NoteId, NoteService, RemoteError};
use tokio::sync::OwnedMutexGuard;

/// Build a note without going through a service.
pub fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: NoteId::from_str(id).unwrap(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

/// An in-process stand-in for the remote persistence service.
///
/// Behaves like the real thing as far as the contract goes: ids are
/// service-assigned, the list order is insertion order (the service's own
/// order), updates replace both fields, unknown ids answer 404.
///
/// Test hooks:
/// - [`fail_next`](Self::fail_next) makes the next operation fail with the
///   given error instead of touching the collection;
/// - [`hold`](Self::hold) keeps every operation suspended until the
///   returned guard is dropped, for exercising in-flight overlap;
/// - per-operation call counters, for asserting an operation was never
///   attempted.
#[derive(Default)]
pub struct InMemoryNoteService {
    notes: Mutex<Vec<Note>>,
    fail_next: Mutex<Option<RemoteError>>,
    gate: Arc<tokio::sync::Mutex<()>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryNoteService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next operation (whichever arrives first) fail with `err`.
    pub fn fail_next(&self, err: RemoteError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Suspend every operation until the returned guard is dropped.
    pub async fn hold(&self) -> OwnedMutexGuard<()> {
        Arc::clone(&self.gate).lock_owned().await
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::Relaxed)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::Relaxed)
    }

    async fn pass_gate(&self) -> Result<(), RemoteError> {
        let _open = self.gate.lock().await;
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: &NoteId) -> RemoteError {
        RemoteError::Service {
            status: 404,
            body: format!("note {id} not found"),
        }
    }
}

#[async_trait]
impl NoteService for InMemoryNoteService {
    async fn list_notes(&self) -> Result<Vec<Note>, RemoteError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        self.pass_gate().await?;
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn create_note(&self, draft: &Draft) -> Result<Note, RemoteError> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        self.pass_gate().await?;

        let note = Note {
            id: NoteId::new(uuid::Uuid::new_v4().to_string()).expect("uuid is non-empty"),
            title: draft.title.clone(),
            content: draft.content.clone(),
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &NoteId, draft: &Draft) -> Result<Note, RemoteError> {
        self.update_calls.fetch_add(1, Ordering::Relaxed);
        self.pass_gate().await?;

        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<(), RemoteError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        self.pass_gate().await?;

        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| &n.id != id);
        if notes.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
