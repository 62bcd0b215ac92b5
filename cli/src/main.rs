use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;
mod session;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::list::run(args).await,
        Commands::Add(args) => commands::add::run(args).await,
        Commands::Edit(args) => commands::edit::run(args).await,
        Commands::Delete(args) => commands::delete::run(args).await,
    }
}
