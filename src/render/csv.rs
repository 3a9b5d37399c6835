//! Field projection for the CSV format.
//!
//! Values are written as-is: a value containing `;` or a newline corrupts
//! the row.

use crate::tree::Node;

/// Separator between the element name and each column.
pub const SEPARATOR: char = ';';

/// One row for `element`: its name, then `;value` per requested field.
///
/// A field that is missing, or present without children, yields an empty
/// column. The value is taken from the field's first child.
pub fn project(element: &Node, fields: &[String]) -> String {
    let mut row = String::from(element.name());
    for field in fields {
        row.push(SEPARATOR);
        if let Some(value) = element
            .find(field)
            .and_then(Node::first_child)
            .and_then(Node::value)
        {
            row.push_str(value);
        }
    }
    row.push('\n');
    row
}
