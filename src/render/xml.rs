//! Pretty-printed XML, three spaces per indentation level.

use crate::tree::{Node, NodeKind};
use std::io::{self, Write};

const INDENT: usize = 3;

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Write `node` and its descendants starting at `level`.
pub fn write_xml(out: &mut dyn Write, node: &Node, level: usize) -> io::Result<()> {
    let pad = " ".repeat(level * INDENT);
    match node.kind() {
        NodeKind::Attribute => return Ok(()),
        NodeKind::Body => {
            return writeln!(out, "{}{}", pad, escape(node.value().unwrap_or_default()));
        }
        NodeKind::Element => {}
    }

    write!(out, "{}<{}", pad, node.name())?;
    for attr in node.attributes() {
        write!(out, " {}=\"{}\"", attr.name(), escape(attr.value().unwrap_or_default()))?;
    }

    let content: Vec<&Node> = node.content().collect();
    if content.is_empty() {
        return writeln!(out, "/>");
    }
    if content.iter().all(|c| c.kind() == NodeKind::Body) {
        write!(out, ">")?;
        for body in &content {
            write!(out, "{}", escape(body.value().unwrap_or_default()))?;
        }
        return writeln!(out, "</{}>", node.name());
    }

    writeln!(out, ">")?;
    for child in content {
        write_xml(out, child, level + 1)?;
    }
    writeln!(out, "{}</{}>", pad, node.name())
}
