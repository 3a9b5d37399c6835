//! Configuration Tree
//!
//! In-memory representation of a configuration instance or a fetched part of
//! one. Elements own their attributes and children in document order.

pub mod convert;
pub mod node;
pub mod path;
pub mod query;

pub use node::{ConfigSubtree, Node, NodeKind};
pub use query::{PathEvaluator, TreeEvaluator};
