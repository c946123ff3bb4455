//! Log command handlers
//!
//! Handles fetching, paging, and run metadata for program logs.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use runlog_core::domain::log::{LogEntry, LogLevel};
use runlog_core::domain::run::{RunRecord, RunStatus};
use runlog_core::dto::log::LogWindow;
use uuid::Uuid;

use runlog_client::LogsClient;

use crate::config::Config;
use crate::types::ProgramSelector;

/// Logs subcommands
#[derive(Subcommand)]
pub enum LogsCommands {
    /// Fetch the available log range for a run
    Fetch {
        /// Program as namespace/app/program-type/program
        program: ProgramSelector,

        /// Run ID
        run_id: Uuid,

        /// Print structured entries instead of raw text
        #[arg(long)]
        json: bool,

        /// Start of the window (epoch seconds)
        #[arg(long)]
        start: Option<i64>,

        /// End of the window (epoch seconds)
        #[arg(long)]
        stop: Option<i64>,

        /// Maximum number of entries
        #[arg(long)]
        max: Option<u32>,
    },
    /// Fetch the next page of logs
    Next {
        /// Program as namespace/app/program-type/program
        program: ProgramSelector,

        /// Run ID
        run_id: Uuid,

        /// Print structured entries instead of raw text
        #[arg(long)]
        json: bool,

        /// Resume from an opaque log offset (implies --json)
        #[arg(long)]
        from_offset: Option<String>,
    },
    /// Fetch the previous page of logs
    Prev {
        /// Program as namespace/app/program-type/program
        program: ProgramSelector,

        /// Run ID
        run_id: Uuid,

        /// Print structured entries instead of raw text
        #[arg(long)]
        json: bool,
    },
    /// Show metadata for a run
    Metadata {
        /// Program as namespace/app/program-type/program
        program: ProgramSelector,

        /// Run ID
        run_id: Uuid,
    },
}

/// Handle logs commands
///
/// Routes logs subcommands to their respective handlers.
pub async fn handle_logs_command(command: LogsCommands, config: &Config) -> Result<()> {
    let mut client = LogsClient::new(&config.router_url);
    if let Some(token) = &config.auth_token {
        client = client.with_auth_token(token.as_str());
    }

    match command {
        LogsCommands::Fetch {
            program,
            run_id,
            json,
            start,
            stop,
            max,
        } => {
            let run = program.into_run_ref(run_id);
            let window = LogWindow {
                start,
                stop,
                from_offset: None,
                max,
            };
            if json {
                print_entries(client.get_logs_json(&run, &window).await?);
            } else {
                print!("{}", client.get_logs(&run, &window).await?);
            }
            Ok(())
        }
        LogsCommands::Next {
            program,
            run_id,
            json,
            from_offset,
        } => {
            let run = program.into_run_ref(run_id);
            match from_offset {
                Some(offset) => {
                    print_entries(client.next_logs_json_offset(&run, &offset).await?);
                }
                None if json => print_entries(client.next_logs_json(&run).await?),
                None => print!("{}", client.next_logs(&run).await?),
            }
            Ok(())
        }
        LogsCommands::Prev {
            program,
            run_id,
            json,
        } => {
            let run = program.into_run_ref(run_id);
            if json {
                print_entries(client.prev_logs_json(&run).await?);
            } else {
                print!("{}", client.prev_logs(&run).await?);
            }
            Ok(())
        }
        LogsCommands::Metadata { program, run_id } => {
            let run = program.into_run_ref(run_id);
            print_run_record(&client.get_logs_metadata(&run).await?);
            Ok(())
        }
    }
}

/// Print a page of structured log entries
fn print_entries(entries: Vec<LogEntry>) {
    if entries.is_empty() {
        println!("{}", "No log entries.".yellow());
        return;
    }

    for entry in &entries {
        print_log_entry(entry);
    }
}

/// Print a single log entry with colored level
fn print_log_entry(entry: &LogEntry) {
    let level_str = format!("{:?}", entry.level).to_uppercase();
    let level_colored = match entry.level {
        LogLevel::Trace | LogLevel::Debug => level_str.dimmed(),
        LogLevel::Info => level_str.cyan(),
        LogLevel::Warn => level_str.yellow(),
        LogLevel::Error => level_str.red(),
    };

    println!(
        "{} [{}] {}",
        entry
            .timestamp
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed(),
        level_colored,
        entry.message
    );
}

/// Print run metadata
fn print_run_record(record: &RunRecord) {
    println!("{}", "Run Details:".bold());
    println!("  Run ID: {}", record.run_id.to_string().cyan());
    println!("  Status: {}", colorize_status(&record.status));
    println!("  Start:  {}", record.start.format("%Y-%m-%d %H:%M:%S"));

    if let Some(end) = record.end {
        println!("  End:    {}", end.format("%Y-%m-%d %H:%M:%S"));

        let duration = end.signed_duration_since(record.start);
        println!("  Duration: {}s", duration.num_seconds());
    }
}

/// Colorize run status for display
fn colorize_status(status: &RunStatus) -> colored::ColoredString {
    let status_str = format!("{:?}", status);
    match status {
        RunStatus::Starting => status_str.yellow(),
        RunStatus::Running => status_str.cyan(),
        RunStatus::Suspended => status_str.dimmed(),
        RunStatus::Completed => status_str.green(),
        RunStatus::Failed => status_str.red(),
        RunStatus::Killed => status_str.red(),
    }
}
