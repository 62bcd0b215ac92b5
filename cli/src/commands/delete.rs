use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use nk_core::NoteId;

use crate::output;
use crate::session::Session;

#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the note to delete
    pub id: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let id = NoteId::from_str(&args.id)?;

    let session = Session::connect()?;
    session.start().await?;

    if let Err(err) = session.controller.remove(&id).await {
        return Err(session.render_failure(err).await);
    }

    let store = session.store.read().await;
    output::success(&format!("Note {id} deleted ({} left)", store.notes().len()));
    output::collection(store.notes());
    Ok(())
}
