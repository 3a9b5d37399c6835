//! CLI presentation: text, json and table formatters for list results.

use crate::cli::parse::ListFormat;
use crate::complete::LegacyBuffer;
use crate::error::ShowError;
use comfy_table::Table;

/// Format a list of candidate values or file names.
pub fn format_candidates(values: &[String], format: ListFormat) -> Result<String, ShowError> {
    match format {
        ListFormat::Text => Ok(values.join("\n")),
        ListFormat::Json => {
            let out = serde_json::json!({ "candidates": values });
            Ok(serde_json::to_string_pretty(&out)?)
        }
        ListFormat::Table => {
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["#", "Value"]);
            for (i, value) in values.iter().enumerate() {
                table.add_row(vec![(i + 1).to_string(), value.clone()]);
            }
            Ok(table.to_string())
        }
    }
}

/// Format a legacy buffer, marking where the last run starts.
pub fn format_legacy_buffer(buffer: &LegacyBuffer, format: ListFormat) -> Result<String, ShowError> {
    match format {
        ListFormat::Text => Ok(buffer.entries().join("\n")),
        ListFormat::Json => {
            let out = serde_json::json!({
                "entries": buffer.entries(),
                "last_start": buffer.last_start(),
            });
            Ok(serde_json::to_string_pretty(&out)?)
        }
        ListFormat::Table => {
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["Offset", "Value", "Last run"]);
            for (i, value) in buffer.entries().iter().enumerate() {
                let marker = if i >= buffer.last_start() { "*" } else { "" };
                table.add_row(vec![i.to_string(), value.clone(), marker.to_string()]);
            }
            Ok(table.to_string())
        }
    }
}
