//! Command implementations.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod clear;
