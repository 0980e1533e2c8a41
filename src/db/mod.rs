//! Database module for SQLite access to karya_tn.db.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod connection;
pub mod queries;
