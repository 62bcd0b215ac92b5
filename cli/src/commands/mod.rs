pub mod add;
pub mod delete;
pub mod edit;
pub mod list;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use nk_core::{Draft, DraftField};

#[derive(Parser)]
#[command(
    name = "notekeep",
    author,
    version,
    about = "Notekeep - organize your thoughts and ideas",
    long_about = "A note-taking client backed by a remote service.\n\nSet NOTEKEEP_API_URL to \
                  the service's base address. The displayed collection is refreshed from the \
                  service after every change."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show all notes")]
    List(list::ListArgs),

    #[command(about = "Create a note")]
    Add(add::AddArgs),

    #[command(about = "Edit an existing note")]
    Edit(edit::EditArgs),

    #[command(about = "Delete a note")]
    Delete(delete::DeleteArgs),
}

/// The required-field gate: both draft fields must be non-empty before
/// submission is invoked. Nothing below the presentation layer enforces
/// this.
pub(crate) fn require_complete(draft: &Draft) -> Result<()> {
    if draft.is_complete() {
        return Ok(());
    }
    let field = if draft.title.is_empty() {
        DraftField::Title
    } else {
        DraftField::Content
    };
    bail!("{field} must not be empty")
}
