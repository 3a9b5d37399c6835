//! Conversion between JSON documents and configuration trees.
//!
//! Objects become elements, arrays become repeated sibling elements with the
//! same name, scalars become leaves and `null` becomes an empty element.
//! Keys starting with `@` become attributes of the enclosing element.

use crate::error::ShowError;
use crate::tree::node::{ConfigSubtree, Node, NodeKind, ROOT_NAME};
use serde_json::{Map, Value};

/// Build a tree from a JSON object; the object's members become the root's children.
pub fn subtree_from_json(value: &Value) -> Result<ConfigSubtree, ShowError> {
    let object = value.as_object().ok_or_else(|| {
        ShowError::Serialization("configuration document must be a JSON object".to_string())
    })?;
    let mut root = Node::element(ROOT_NAME);
    append_members(&mut root, object)?;
    Ok(ConfigSubtree::new(root))
}

fn append_members(parent: &mut Node, object: &Map<String, Value>) -> Result<(), ShowError> {
    for (key, value) in object {
        if let Some(attr) = key.strip_prefix('@') {
            let text = scalar_text(value).ok_or_else(|| {
                ShowError::Serialization(format!("attribute '{}' must be a scalar", attr))
            })?;
            parent.push(Node::attribute(attr, text));
            continue;
        }
        match value {
            Value::Array(items) => {
                for item in items {
                    if item.is_array() {
                        return Err(ShowError::Serialization(format!(
                            "nested arrays are not supported under '{}'",
                            key
                        )));
                    }
                    parent.push(element_from_value(key, item)?);
                }
            }
            other => parent.push(element_from_value(key, other)?),
        }
    }
    Ok(())
}

fn element_from_value(name: &str, value: &Value) -> Result<Node, ShowError> {
    match value {
        Value::Object(object) => {
            let mut element = Node::element(name);
            append_members(&mut element, object)?;
            Ok(element)
        }
        Value::Null => Ok(Node::element(name)),
        other => {
            let text = scalar_text(other).unwrap_or_default();
            Ok(Node::leaf(name, text))
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// JSON object for a sequence of sibling nodes.
///
/// Siblings sharing a name are collected into an array at the position of the
/// first occurrence.
pub fn nodes_to_json<'a, I>(nodes: I) -> Value
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut object = Map::new();
    for node in nodes {
        match node.kind() {
            NodeKind::Attribute => {
                let key = format!("@{}", node.name());
                object.insert(key, Value::String(node.value().unwrap_or_default().to_string()));
            }
            NodeKind::Body => {}
            NodeKind::Element => {
                let value = node_to_json(node);
                match object.get_mut(node.name()) {
                    Some(Value::Array(items)) => items.push(value),
                    Some(existing) => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, value]);
                    }
                    None => {
                        object.insert(node.name().to_string(), value);
                    }
                }
            }
        }
    }
    Value::Object(object)
}

fn node_to_json(node: &Node) -> Value {
    if node.is_leaf() && node.attributes().next().is_none() {
        return Value::String(node.body_text().unwrap_or_default().to_string());
    }
    if node.children().is_empty() {
        return Value::Null;
    }
    nodes_to_json(node.children())
}
