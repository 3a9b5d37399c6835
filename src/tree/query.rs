//! Tree query evaluation: select nodes of a tree with a path expression.

use crate::error::ShowError;
use crate::tree::node::Node;
use crate::tree::path::{PathExpr, Step};

/// Selects matching nodes from an in-memory tree.
///
/// Implementations must return matches in document order and must not
/// perform I/O.
pub trait TreeEvaluator: Send + Sync {
    fn select<'a>(&self, root: &'a Node, path: &str) -> Result<Vec<&'a Node>, ShowError>;
}

/// Evaluator for the path language in [`crate::tree::path`].
///
/// The first step is matched against the children of `root`; the root itself
/// is only selected by the path `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEvaluator;

impl PathEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn step_matches(step: &Step, node: &Node) -> bool {
        node.is_element()
            && step.matches_name(node.name())
            && step.predicates.iter().all(|p| {
                node.elements()
                    .any(|c| c.name() == p.child && c.body_text() == Some(p.value.as_str()))
            })
    }
}

impl TreeEvaluator for PathEvaluator {
    fn select<'a>(&self, root: &'a Node, path: &str) -> Result<Vec<&'a Node>, ShowError> {
        let expr = PathExpr::parse(path)?;
        let mut current: Vec<&'a Node> = vec![root];
        for step in &expr.steps {
            current = current
                .into_iter()
                .flat_map(|n| n.children().iter())
                .filter(|c| Self::step_matches(step, c))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        Ok(current)
    }
}

/// Copy of `root` keeping only the matched nodes and their ancestors.
///
/// Matched nodes are kept whole. The root is always kept, with its
/// attributes, even when nothing matched.
pub fn prune_to_matches(root: &Node, matches: &[&Node]) -> Node {
    fn keep(node: &Node, matches: &[&Node]) -> Option<Node> {
        if matches.iter().any(|m| std::ptr::eq(*m, node)) {
            return Some(node.clone());
        }
        let kept: Vec<Node> = node
            .elements()
            .filter_map(|c| keep(c, matches))
            .collect();
        if kept.is_empty() {
            None
        } else {
            Some(shell(node).with_children(kept))
        }
    }

    if matches.iter().any(|m| std::ptr::eq(*m, root)) {
        return root.clone();
    }
    let kept: Vec<Node> = root.elements().filter_map(|c| keep(c, matches)).collect();
    shell(root).with_children(kept)
}

/// Element with the same name and attributes but no content.
fn shell(node: &Node) -> Node {
    Node::element(node.name()).with_children(node.attributes().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::element("config").with_child(
            Node::element("interfaces")
                .with_child(
                    Node::element("interface")
                        .with_child(Node::leaf("name", "eth0"))
                        .with_child(Node::leaf("mtu", "1500")),
                )
                .with_child(
                    Node::element("interface")
                        .with_child(Node::leaf("name", "eth1"))
                        .with_child(Node::leaf("mtu", "9000")),
                ),
        )
        .with_child(Node::element("system").with_child(Node::leaf("hostname", "r1")))
    }

    #[test]
    fn test_select_root() {
        let tree = sample();
        let found = PathEvaluator.select(&tree, "/").unwrap();
        assert_eq!(found.len(), 1);
        assert!(std::ptr::eq(found[0], &tree));
    }

    #[test]
    fn test_select_in_document_order() {
        let tree = sample();
        let names: Vec<&str> = PathEvaluator
            .select(&tree, "/interfaces/interface/name")
            .unwrap()
            .into_iter()
            .map(|n| n.body_text().unwrap())
            .collect();
        assert_eq!(names, vec!["eth0", "eth1"]);
    }

    #[test]
    fn test_select_with_predicate() {
        let tree = sample();
        let mtus: Vec<&str> = PathEvaluator
            .select(&tree, "/interfaces/interface[name=eth1]/mtu")
            .unwrap()
            .into_iter()
            .map(|n| n.body_text().unwrap())
            .collect();
        assert_eq!(mtus, vec!["9000"]);
    }

    #[test]
    fn test_select_wildcard_and_no_match() {
        let tree = sample();
        assert_eq!(PathEvaluator.select(&tree, "/*").unwrap().len(), 2);
        assert!(PathEvaluator.select(&tree, "/nothing/here").unwrap().is_empty());
    }

    #[test]
    fn test_prune_keeps_ancestors_only() {
        let tree = sample();
        let matches = PathEvaluator
            .select(&tree, "/interfaces/interface[name=eth0]")
            .unwrap();
        let pruned = prune_to_matches(&tree, &matches);
        assert_eq!(pruned.name(), "config");
        assert_eq!(pruned.elements().count(), 1);
        let interfaces = pruned.find("interfaces").unwrap();
        assert_eq!(interfaces.elements().count(), 1);
        assert_eq!(
            interfaces.find("interface").unwrap().find("mtu").unwrap().body_text(),
            Some("1500")
        );
    }

    #[test]
    fn test_prune_with_no_matches_is_empty_root() {
        let tree = sample();
        let pruned = prune_to_matches(&tree, &[]);
        assert_eq!(pruned, Node::element("config"));
    }
}
