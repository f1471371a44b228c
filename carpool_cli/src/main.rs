use clap::{Parser, Subcommand};
use tracing::Level;

use crate::plan::PlanArgs;

mod export;
mod plan;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal carpool plan for a driver and passenger roster
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match cli.command {
        Commands::Plan { args } => plan::run(args).await,
    }
}
