//! Clear command: purge all messages and conversations.
//!
//! CHANGELOG:
//! - 10/19/2026 - Classify missing tables separately from engine errors
//! - 10/19/2026 - Initial implementation

use rusqlite::Connection;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::db::{connection::open_db, queries};
use crate::error::ClearError;
use crate::output::OutputControls;

/// Banner printed before the purge starts.
pub const BANNER: &str = "🗑️  Deleting all messages and conversations...";

/// Row counts removed by one purge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearReport {
    pub db_path: PathBuf,
    pub messages_deleted: usize,
    pub conversations_deleted: usize,
}

/// Delete every message and conversation in the database at `db_path`.
///
/// Nothing is opened or created when the file is missing. The connection is
/// dropped on every path out of this function.
pub fn clear_messages(db_path: &Path) -> Result<ClearReport, ClearError> {
    if !db_path.exists() {
        warn!(path = %db_path.display(), "database file not found");
        return Err(ClearError::DatabaseNotFound(db_path.to_path_buf()));
    }

    let mut conn = open_db(db_path).map_err(|source| ClearError::Open {
        path: db_path.to_path_buf(),
        source,
    })?;
    debug!(path = %db_path.display(), "opened database");

    let (messages_deleted, conversations_deleted) = clear_tables(&mut conn)?;

    Ok(ClearReport {
        db_path: db_path.to_path_buf(),
        messages_deleted,
        conversations_deleted,
    })
}

/// Delete both tables inside one transaction on an open connection.
///
/// Messages go first so a foreign key from messages to conversations never
/// blocks the second delete. Any error rolls the whole transaction back.
///
/// Returns `(messages, conversations)` deleted.
pub fn clear_tables(conn: &mut Connection) -> Result<(usize, usize), ClearError> {
    let tx = conn.transaction().map_err(ClearError::from_engine)?;

    let messages = tx
        .execute(queries::DELETE_ALL_MESSAGES, [])
        .map_err(ClearError::from_engine)?;
    debug!(table = queries::MESSAGES_TABLE, rows = messages, "deleted rows");

    let conversations = tx
        .execute(queries::DELETE_ALL_CONVERSATIONS, [])
        .map_err(ClearError::from_engine)?;
    debug!(table = queries::CONVERSATIONS_TABLE, rows = conversations, "deleted rows");

    tx.commit().map_err(ClearError::from_engine)?;
    info!(messages, conversations, "purge committed");

    Ok((messages, conversations))
}

/// Run the clear command and print the outcome.
pub fn run(db_path: &Path, output: &OutputControls) -> Result<ClearReport, ClearError> {
    if !output.json {
        println!("{}", BANNER);
    }

    match clear_messages(db_path) {
        Ok(report) => {
            if output.json {
                output.print(&SuccessOutput {
                    success: true,
                    report: &report,
                });
            } else {
                for line in report_lines(&report) {
                    println!("{}", line);
                }
            }
            Ok(report)
        }
        Err(err) => {
            if output.json {
                println!("{}", output.format_error(&err));
            } else {
                println!("{}", error_line(&err));
            }
            Err(err)
        }
    }
}

#[derive(Serialize)]
struct SuccessOutput<'a> {
    success: bool,
    #[serde(flatten)]
    report: &'a ClearReport,
}

/// Human-readable lines for a successful purge.
pub fn report_lines(report: &ClearReport) -> Vec<String> {
    vec![
        format!("✅ {} messages deleted", report.messages_deleted),
        format!("✅ {} conversations deleted", report.conversations_deleted),
        "🧹 Database cleaned successfully!".to_string(),
    ]
}

/// Human-readable line for a failed purge.
pub fn error_line(err: &ClearError) -> String {
    match err {
        ClearError::DatabaseNotFound(_) => format!("❌ {}", err),
        _ => format!("❌ Error while deleting: {}", err),
    }
}
