//! SQLite connection management for karya_tn.db.
//!
//! CHANGELOG:
//! - 10/19/2026 - Open existing databases only, never create (no SQLITE_OPEN_CREATE)
//! - 10/19/2026 - Initial implementation

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "KARYA_DB_PATH";

/// Database file name inside the `data` directory.
pub const DB_FILE_NAME: &str = "karya_tn.db";

/// Default karya_tn.db path.
///
/// Tries, in order:
/// 1. KARYA_DB_PATH env var
/// 2. `../data/karya_tn.db` next to the crate directory
///
/// The second path is fixed at build time, so it only points somewhere useful
/// for `cargo run` from a source checkout. Installed binaries should rely on
/// KARYA_DB_PATH or `--db`.
pub fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    sibling_data_path(Path::new(env!("CARGO_MANIFEST_DIR")))
}

/// `<dir>/../data/karya_tn.db`
pub fn sibling_data_path(dir: &Path) -> PathBuf {
    dir.join("..").join("data").join(DB_FILE_NAME)
}

/// Open a read-write connection to an existing database.
///
/// The file is never created; a missing file is an error from SQLite.
/// The connection closes when dropped.
pub fn open_db(db_path: &Path) -> rusqlite::Result<Connection> {
    Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_data_path() {
        let path = sibling_data_path(Path::new("/srv/karya/backend"));
        assert_eq!(path, PathBuf::from("/srv/karya/backend/../data/karya_tn.db"));
    }

    #[test]
    fn test_open_db_does_not_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);

        assert!(open_db(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_db_treats_uri_as_plain_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);
        let uri = format!("file:{}?mode=rwc", path.display());

        assert!(open_db(Path::new(&uri)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_db_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DB_FILE_NAME);
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE conversations (id INTEGER PRIMARY KEY);")
            .unwrap();

        let conn = open_db(&path).unwrap();
        let tables: i64 = conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(tables, 1);
    }
}
