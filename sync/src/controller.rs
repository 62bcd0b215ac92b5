use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use nk_core::{EditTarget, NoteId, NoteService, RemoteError};
use tokio::sync::RwLock;

use crate::error::{ActionClass, SyncError};
use crate::store::StateStore;

/// Orchestrates the request/response cycle for each user action and decides
/// when to refresh the local collection.
///
/// Every successful mutation is followed by a full-collection refresh, so
/// the displayed collection always equals server state as of the most
/// recent successful round trip. There is no retry and no optimistic
/// patching; a failed mutation leaves the draft and edit target untouched
/// so the user can resubmit without re-typing.
///
/// Each mutation class is a two-state machine (idle / submitting) with an
/// explicit in-flight flag; overlapping invocations of the same class are
/// rejected rather than raced.
pub struct SyncController {
    store: Arc<RwLock<StateStore>>,
    service: Arc<dyn NoteService>,
    submit_in_flight: AtomicBool,
    remove_in_flight: AtomicBool,
}

/// Clears the in-flight flag when the operation resolves, on every path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SyncController {
    pub fn new(store: Arc<RwLock<StateStore>>, service: Arc<dyn NoteService>) -> Self {
        Self {
            store,
            service,
            submit_in_flight: AtomicBool::new(false),
            remove_in_flight: AtomicBool::new(false),
        }
    }

    fn enter<'a>(
        flag: &'a AtomicBool,
        action: ActionClass,
    ) -> Result<InFlightGuard<'a>, SyncError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(flag))
            .map_err(|_| SyncError::AlreadyInFlight { action })
    }

    /// Submit the current draft: an update when the store is editing a
    /// note, a create otherwise. On success the draft resets and the
    /// collection refreshes; on failure both are left exactly as they were.
    pub async fn submit(&self) -> Result<(), SyncError> {
        let _guard = Self::enter(&self.submit_in_flight, ActionClass::Submit)?;

        let (draft, target) = {
            let store = self.store.read().await;
            (store.draft().clone(), store.edit_target().clone())
        };

        let outcome = match &target {
            EditTarget::Editing(id) => {
                tracing::debug!(id = %id, "submitting update");
                self.service.update_note(id, &draft).await.map(|_| ())
            }
            EditTarget::Composing => {
                tracing::debug!("submitting create");
                self.service.create_note(&draft).await.map(|_| ())
            }
        };

        match outcome {
            Ok(()) => {
                self.store.write().await.clear_draft();
                self.refresh_collection().await
            }
            Err(err) => Err(self.record_failure(ActionClass::Submit, err).await),
        }
    }

    /// Delete the note with the given id, then refresh. No retry; on
    /// failure the collection is unchanged.
    pub async fn remove(&self, id: &NoteId) -> Result<(), SyncError> {
        let _guard = Self::enter(&self.remove_in_flight, ActionClass::Remove)?;

        tracing::debug!(id = %id, "submitting delete");
        match self.service.delete_note(id).await {
            Ok(()) => self.refresh_collection().await,
            Err(err) => Err(self.record_failure(ActionClass::Remove, err).await),
        }
    }

    /// Replace the collection with a fresh list from the service. Also the
    /// session-start operation.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        self.refresh_collection().await
    }

    async fn refresh_collection(&self) -> Result<(), SyncError> {
        match self.service.list_notes().await {
            Ok(notes) => {
                tracing::debug!(count = notes.len(), "collection refreshed");
                self.store.write().await.replace_collection(notes);
                Ok(())
            }
            Err(err) => Err(self.record_failure(ActionClass::Refresh, err).await),
        }
    }

    async fn record_failure(&self, action: ActionClass, err: RemoteError) -> SyncError {
        tracing::error!(%action, error = %err, "sync operation failed");
        self.store.write().await.set_error(err.to_string());
        err.into()
    }
}
