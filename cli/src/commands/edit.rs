use std::str::FromStr;

use anyhow::{Result, bail};
use clap::Args;
use nk_core::{DraftField, NoteId};

use crate::commands::require_complete;
use crate::output;
use crate::session::Session;

#[derive(Args)]
pub struct EditArgs {
    /// Id of the note to edit
    pub id: String,

    /// Replace the title
    #[arg(long)]
    pub title: Option<String>,

    /// Replace the content
    #[arg(long)]
    pub content: Option<String>,
}

pub async fn run(args: EditArgs) -> Result<()> {
    if args.title.is_none() && args.content.is_none() {
        bail!("nothing to change: pass --title and/or --content");
    }
    let id = NoteId::from_str(&args.id)?;

    let session = Session::connect()?;
    session.start().await?;

    {
        let mut store = session.store.write().await;
        let Some(note) = store.find_note(&id).cloned() else {
            bail!("no note with id {id}");
        };
        store.begin_edit(&note);
        if let Some(title) = args.title {
            store.set_draft_field(DraftField::Title, title);
        }
        if let Some(content) = args.content {
            store.set_draft_field(DraftField::Content, content);
        }
        // Required-field gate on the merged draft: an override may not empty
        // a field, and a note still missing content needs some before it can
        // be resubmitted. Submission never starts with an incomplete draft.
        require_complete(store.draft())?;
    }

    if let Err(err) = session.controller.submit().await {
        return Err(session.render_failure(err).await);
    }

    output::success(&format!("Note {id} updated"));
    Ok(())
}
