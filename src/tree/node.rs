//! Configuration tree nodes

use serde::{Deserialize, Serialize};

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Element,
    Body,
    Attribute,
}

/// A node of the configuration tree.
///
/// Body nodes carry text in `value` and have an empty name. Attribute nodes
/// carry both a name and a value and are stored among the children of the
/// element they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    name: String,
    value: Option<String>,
    children: Vec<Node>,
}

impl Node {
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element,
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Body,
            name: String::new(),
            value: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Attribute,
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Element holding a single body child, e.g. `<mtu>1500</mtu>`.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::element(name).with_child(Node::body(text))
    }

    /// Builder-style append.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value of a body or attribute node.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// All children, attributes included.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Children in document order, attributes excluded.
    pub fn content(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|c| c.kind != NodeKind::Attribute)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.kind == NodeKind::Element)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Node> {
        self.children
            .iter()
            .filter(|c| c.kind == NodeKind::Attribute)
    }

    /// First child of any kind.
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// First child element or attribute with the given name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.kind != NodeKind::Body && c.name == name)
    }

    /// Text of the first body child.
    pub fn body_text(&self) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.kind == NodeKind::Body)
            .and_then(|c| c.value.as_deref())
    }

    /// An element whose only content is text, e.g. `<mtu>1500</mtu>`.
    pub fn is_leaf(&self) -> bool {
        self.is_element()
            && self.body_text().is_some()
            && self.elements().next().is_none()
    }

    /// Number of nodes in this subtree, attributes included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}

/// A tree returned by a single store fetch. The root is the fetch envelope
/// and is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSubtree {
    root: Node,
}

/// Name of the root element wrapping every fetched tree.
pub const ROOT_NAME: &str = "config";

impl ConfigSubtree {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Empty tree with the standard root.
    pub fn empty() -> Self {
        Self::new(Node::element(ROOT_NAME))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Direct children of the root in document order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.root.content()
    }

    pub fn is_empty(&self) -> bool {
        self.children().next().is_none()
    }
}
