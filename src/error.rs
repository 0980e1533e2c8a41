//! Errors raised while purging the database.
//!
//! CHANGELOG:
//! - 10/19/2026 - Split missing tables out of generic engine errors
//! - 10/19/2026 - Initial implementation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while clearing messages and conversations.
#[derive(Error, Debug)]
pub enum ClearError {
    #[error("Database not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Table not found: {0}")]
    MissingTable(String),

    #[error("{0}")]
    Engine(#[from] rusqlite::Error),
}

impl ClearError {
    /// Classify an engine error, pulling out "no such table" failures.
    pub fn from_engine(err: rusqlite::Error) -> Self {
        match missing_table_name(&err) {
            Some(table) => ClearError::MissingTable(table),
            None => ClearError::Engine(err),
        }
    }

    /// Short machine-readable code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ClearError::DatabaseNotFound(_) => "NOT_FOUND",
            ClearError::Open { .. } => "OPEN_FAILED",
            ClearError::MissingTable(_) => "MISSING_TABLE",
            ClearError::Engine(_) => "ERROR",
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ClearError::DatabaseNotFound(_) => 2,
            _ => 1,
        }
    }
}

/// Extract the table name from a SQLite "no such table: X" error.
///
/// Prepare errors may carry the SQL and offset after the message, so only the
/// first token following the marker is taken.
fn missing_table_name(err: &rusqlite::Error) -> Option<String> {
    const MARKER: &str = "no such table: ";

    let message = err.to_string();
    let start = message.find(MARKER)? + MARKER.len();
    message[start..]
        .split_whitespace()
        .next()
        .map(|table| table.to_string())
}
