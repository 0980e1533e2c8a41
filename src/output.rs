//! Output formatting for command results.
//!
//! CHANGELOG:
//! - 10/19/2026 - Error objects carry a machine-readable code
//! - 10/19/2026 - Initial implementation

use serde::Serialize;
use serde_json::json;

use crate::error::ClearError;

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
}

impl OutputControls {
    /// Serialize data according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let rendered = if self.compact {
            serde_json::to_string(data)
        } else {
            serde_json::to_string_pretty(data)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }

    /// Format an error as a JSON object.
    pub fn format_error(&self, error: &ClearError) -> String {
        self.emit(&json!({
            "success": false,
            "code": error.code(),
            "error": error.to_string(),
        }))
    }
}
