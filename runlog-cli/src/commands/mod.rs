//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod logs;

pub use logs::LogsCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Program run logs
    Logs {
        #[command(subcommand)]
        command: LogsCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Logs { command } => logs::handle_logs_command(command, config).await,
    }
}
