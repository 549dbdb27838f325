//! lnpath CLI: command-line client for the route finder.
//!
//! Subcommands: init, route, status.

mod commands;

use clap::{Parser, Subcommand};

/// lnpath: find payment routes through a Lightning node.
#[derive(Parser, Debug)]
#[command(name = "lnpath", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default service configuration.
    Init(commands::init::InitArgs),
    /// Find routes to a destination.
    Route(commands::route::RouteArgs),
    /// Query the status of a running service.
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Route(args) => commands::route::run(args).await,
        Commands::Status(args) => commands::status::run(args).await,
    }
}
