//! Runlog CLI
//!
//! Command-line interface for fetching program run logs from the router.

mod commands;
mod config;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "runlog")]
#[command(about = "Program run log viewer", long_about = None)]
struct Cli {
    /// Router URL
    #[arg(
        long,
        env = "RUNLOG_ROUTER_URL",
        default_value = "http://localhost:11015"
    )]
    router_url: String,

    /// Access token attached to every request
    #[arg(long, env = "RUNLOG_AUTH_TOKEN")]
    auth_token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        router_url: cli.router_url,
        auth_token: cli.auth_token,
    };

    handle_command(cli.command, &config).await
}
