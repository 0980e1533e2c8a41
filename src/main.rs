//! karya-clear-messages - purge chat data from karya_tn.db
//!
//! Deletes every row of `messages` and `conversations` in one transaction.
//!
//! CHANGELOG:
//! - 10/19/2026 - Map failures to distinct exit statuses
//! - 10/19/2026 - Initial CLI

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use karya_db_cleaner::commands;
use karya_db_cleaner::db::connection::default_db_path;
use karya_db_cleaner::output::OutputControls;

/// Delete all messages and conversations from the Karya database.
#[derive(Parser, Debug)]
#[command(name = "karya-clear-messages")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Database file (defaults to $KARYA_DB_PATH, then ../data/karya_tn.db)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json || cli.compact,
        compact: cli.compact,
    };

    let db_path = cli.db.unwrap_or_else(default_db_path);
    tracing::debug!(path = %db_path.display(), "resolved database path");

    match commands::clear::run(&db_path, &output_controls) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
