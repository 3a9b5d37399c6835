//! Curly-brace text format: `name value;` for leaves, `name {` ... `}` for
//! containers. Attributes are not shown.

use crate::tree::{Node, NodeKind};
use std::io::{self, Write};

const INDENT: usize = 3;

pub fn write_text(out: &mut dyn Write, node: &Node, depth: usize) -> io::Result<()> {
    let pad = " ".repeat(depth * INDENT);
    match node.kind() {
        NodeKind::Attribute => Ok(()),
        NodeKind::Body => writeln!(out, "{}{};", pad, node.value().unwrap_or_default()),
        NodeKind::Element => {
            if node.is_leaf() {
                return writeln!(
                    out,
                    "{}{} {};",
                    pad,
                    node.name(),
                    node.body_text().unwrap_or_default()
                );
            }
            if node.content().next().is_none() {
                return writeln!(out, "{}{};", pad, node.name());
            }
            writeln!(out, "{}{} {{", pad, node.name())?;
            for child in node.content() {
                write_text(out, child, depth + 1)?;
            }
            writeln!(out, "{}}}", pad)
        }
    }
}
