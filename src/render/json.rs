use crate::error::ShowError;
use crate::tree::convert::nodes_to_json;
use crate::tree::Node;
use std::io::Write;

/// Write sibling nodes as one JSON object followed by a newline.
pub fn write_json(out: &mut dyn Write, nodes: &[&Node], pretty: bool) -> Result<(), ShowError> {
    let value = nodes_to_json(nodes.iter().copied());
    let encoded = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    writeln!(out, "{}", encoded)?;
    Ok(())
}
