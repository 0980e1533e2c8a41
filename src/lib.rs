//! karya-db-cleaner library
//!
//! Exposes the purge operation for the binary and for tests.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

pub mod commands;
pub mod db;
pub mod error;
pub mod output;
