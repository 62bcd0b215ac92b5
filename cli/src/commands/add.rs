use anyhow::Result;
use clap::Args;
use nk_core::{Draft, DraftField};

use crate::commands::require_complete;
use crate::output;
use crate::session::Session;

#[derive(Args)]
pub struct AddArgs {
    /// Note title
    pub title: String,

    /// Note content
    pub content: String,
}

pub async fn run(args: AddArgs) -> Result<()> {
    // Required-field gate: an incomplete draft never reaches the controller
    // or the network.
    let draft = Draft::new(args.title, args.content);
    require_complete(&draft)?;

    let session = Session::connect()?;
    session.start().await?;

    {
        let mut store = session.store.write().await;
        store.set_draft_field(DraftField::Title, draft.title);
        store.set_draft_field(DraftField::Content, draft.content);
    }

    if let Err(err) = session.controller.submit().await {
        return Err(session.render_failure(err).await);
    }

    let store = session.store.read().await;
    output::success(&format!("Note added ({} total)", store.notes().len()));
    output::collection(store.notes());
    Ok(())
}
