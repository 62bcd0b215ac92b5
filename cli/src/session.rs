use std::sync::Arc;

use anyhow::Result;
use client::HttpNoteClient;
use config::Config;
use nk_core::NoteService;
use sync::{StateStore, SyncController, SyncError};
use tokio::sync::RwLock;

/// One CLI invocation is one session: a fresh store, a controller wired to
/// the configured service, and a session-start refresh before any action.
pub struct Session {
    pub store: Arc<RwLock<StateStore>>,
    pub controller: SyncController,
}

impl Session {
    pub fn connect() -> Result<Self> {
        let config = Config::from_env()?;
        tracing::debug!(base_url = %config.base_url, "session connected");
        let service: Arc<dyn NoteService> = Arc::new(HttpNoteClient::new(config.base_url));
        let store = Arc::new(RwLock::new(StateStore::new()));
        let controller = SyncController::new(Arc::clone(&store), service);
        Ok(Self { store, controller })
    }

    /// The session-start refresh.
    pub async fn start(&self) -> Result<()> {
        if let Err(err) = self.controller.refresh().await {
            return Err(self.render_failure(err).await);
        }
        Ok(())
    }

    /// Turn a sync failure into the error the user sees, preferring the
    /// store's recorded error state.
    pub async fn render_failure(&self, err: SyncError) -> anyhow::Error {
        let detail = self.store.write().await.take_error();
        anyhow::anyhow!(detail.unwrap_or_else(|| err.to_string()))
    }
}
