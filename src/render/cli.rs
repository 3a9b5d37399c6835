//! Command-replay format: one line per leaf, each line carrying the full
//! path of element names and list keys leading to it.

use crate::tree::{Node, NodeKind};
use crate::types::GenModelStyle;
use std::io::{self, Write};

/// Write the commands that recreate `node`, each line starting with `prefix`.
///
/// An element is treated as a list entry when it holds a leaf named in
/// `list_keys`; its key values extend the prefix (with the key names under
/// [`GenModelStyle::All`]) before its other children are written.
pub fn write_cli(
    out: &mut dyn Write,
    node: &Node,
    prefix: &str,
    style: GenModelStyle,
    list_keys: &[String],
) -> io::Result<()> {
    if node.kind() != NodeKind::Element {
        return Ok(());
    }

    if node.is_leaf() {
        let value = node.body_text().unwrap_or_default();
        return match style {
            GenModelStyle::None => writeln!(out, "{}{}", prefix, value),
            GenModelStyle::Vars | GenModelStyle::All => {
                writeln!(out, "{}{} {}", prefix, node.name(), value)
            }
        };
    }
    if node.elements().next().is_none() {
        return writeln!(out, "{}{}", prefix, node.name());
    }

    let mut line = format!("{}{} ", prefix, node.name());
    let keys: Vec<&Node> = node
        .elements()
        .filter(|c| c.is_leaf() && list_keys.iter().any(|k| k == c.name()))
        .collect();
    for key in &keys {
        if style == GenModelStyle::All {
            line.push_str(key.name());
            line.push(' ');
        }
        line.push_str(key.body_text().unwrap_or_default());
        line.push(' ');
    }

    let mut written = false;
    for child in node.elements() {
        if keys.iter().any(|k| std::ptr::eq(*k, child)) {
            continue;
        }
        write_cli(out, child, &line, style, list_keys)?;
        written = true;
    }
    if !written {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
