use crate::{
    pkg::{
        internal::projection::{SortDirection, SortField},
        server::listen,
    },
    prelude::Result,
};
use clap::{Parser, Subcommand};

mod preview;

#[derive(Parser)]
#[command(about = "job listing admin page")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the page and the JSON api
    Listen,
    /// Print the projection of the startup listings as JSON
    Preview {
        #[arg(long, default_value = "")]
        search: String,
        /// company | publishDate
        #[arg(long)]
        sort: Option<SortField>,
        /// asc | desc
        #[arg(long)]
        direction: Option<SortDirection>,
    },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Preview {
            search,
            sort,
            direction,
        }) => {
            preview::print(&search, sort, direction)?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
