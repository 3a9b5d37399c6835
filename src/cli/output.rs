//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ShowError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ShowError) -> String {
    format!("Error: {}", e)
}
