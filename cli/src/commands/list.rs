use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session::Session;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = Session::connect()?;
    session.start().await?;

    let store = session.store.read().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(store.notes())?);
        return Ok(());
    }

    output::header("Notes");
    output::collection(store.notes());
    Ok(())
}
