//! filemanager - basic file operations sandboxed under a base directory.
//!
//! Usage:
//!   filemanager list [PATH]          List a directory (defaults to the base directory)
//!   filemanager create PATH          Create an empty file
//!   filemanager delete PATH          Delete a file or empty directory
//!   filemanager copy SRC DST         Copy a file
//!   filemanager move SRC DST         Move a file (copy, then delete the source)
//!   filemanager --help               Show help
//!
//! The base directory comes from `FILE_MANAGER_BASE_DIR` (default: the
//! current directory) and the log level from `LOG_LEVEL` (default: info).

use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use filemanager_core::{Config, FileOperation, FileRecord};
use filemanager_ops::{FileService, OperationOutcome, TracingLogger};

#[derive(Parser)]
#[command(
    name = "filemanager",
    version,
    about = "A modern file manager CLI application",
    long_about = "filemanager lists, creates, deletes, copies and moves files.\n\n\
                  Every path is resolved relative to the base directory, taken from \
                  FILE_MANAGER_BASE_DIR or --base-dir, and may not climb above it."
)]
struct Cli {
    /// Base directory for all paths (overrides FILE_MANAGER_BASE_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List files in a directory
    List {
        /// Directory to list, relative to the base directory
        #[arg(default_value = ".")]
        path: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Show sizes in human-readable units
        #[arg(short = 'H', long)]
        human: bool,

        /// Prefix each entry with its permission string
        #[arg(short, long)]
        long: bool,
    },

    /// Create a new file
    Create {
        /// File to create
        path: String,
    },

    /// Delete a file
    Delete {
        /// File to delete
        path: String,
    },

    /// Copy a file from source to destination
    Copy {
        /// Source file
        source: String,
        /// Destination file
        destination: String,
    },

    /// Move a file from source to destination
    Move {
        /// Source file
        source: String,
        /// Destination file
        destination: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How `list` output is rendered.
#[derive(Debug, Clone, Copy, Default)]
struct ListStyle {
    format: OutputFormat,
    human: bool,
    long: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(base_dir) = cli.base_dir {
        config.base_dir = base_dir;
    }

    init_tracing(&config)?;

    let service = FileService::from_config(&config, TracingLogger);

    let (operation, style) = match cli.command {
        Command::List {
            path,
            format,
            human,
            long,
        } => (
            FileOperation::list(path),
            ListStyle {
                format,
                human,
                long,
            },
        ),
        Command::Create { path } => (FileOperation::create(path), ListStyle::default()),
        Command::Delete { path } => (FileOperation::delete(path), ListStyle::default()),
        Command::Copy {
            source,
            destination,
        } => (
            FileOperation::copy(source, destination),
            ListStyle::default(),
        ),
        Command::Move {
            source,
            destination,
        } => (
            FileOperation::move_to(source, destination),
            ListStyle::default(),
        ),
    };

    let outcome = service.execute(&operation)?;
    tracing::debug!(summary = %outcome.summary(), "operation finished");

    report(&operation, &outcome, style)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies. Logs go
/// to stderr so stdout only carries command output.
fn init_tracing(config: &Config) -> Result<()> {
    let level = config
        .level_filter()
        .context("Failed to initialize logger")?;

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Print the result of a successful operation.
fn report(operation: &FileOperation, outcome: &OperationOutcome, style: ListStyle) -> Result<()> {
    match (operation, outcome) {
        (_, OperationOutcome::Listed(records)) => print_records(records, style)?,
        (FileOperation::Create { path }, _) => println!("Successfully created file: {path}"),
        (FileOperation::Delete { path }, _) => println!("Successfully deleted file: {path}"),
        (
            FileOperation::Copy {
                source,
                destination,
            },
            _,
        ) => println!("Successfully copied file from {source} to {destination}"),
        (
            FileOperation::Move {
                source,
                destination,
            },
            _,
        ) => println!("Successfully moved file from {source} to {destination}"),
        (FileOperation::List { .. }, _) => {}
    }

    Ok(())
}

/// Print directory records in the requested format.
fn print_records(records: &[FileRecord], style: ListStyle) -> Result<()> {
    match style.format {
        OutputFormat::Text => {
            for record in records {
                let size = if style.human {
                    format_size(record.size)
                } else {
                    record.size.to_string()
                };
                let line = format!(
                    "{}\t{}\t{}",
                    record.name,
                    size,
                    format_time(&record.modified)
                );

                if style.long {
                    println!("{}\t{}", record.mode_string(), line);
                } else {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(records).context("Failed to encode records")?
            );
        }
    }

    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Format a modification time in local time.
fn format_time(time: &std::time::SystemTime) -> String {
    let local: DateTime<Local> = (*time).into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}
