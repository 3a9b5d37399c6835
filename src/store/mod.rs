//! Configuration Store
//!
//! The request/response boundary to the configuration store. A fetch names an
//! instance and a query path and returns the instance root holding only the
//! branches that lead to the matched nodes.

pub mod memory;
pub mod persistence;

pub use memory::MemoryStore;
pub use persistence::SledConfigStore;

use crate::error::StoreError;
use crate::tree::node::{ConfigSubtree, Node};
use crate::tree::query::{prune_to_matches, TreeEvaluator};
use crate::types::ConfigInstance;

/// Path requesting a whole configuration instance.
pub const WHOLE_INSTANCE: &str = "/";

/// Store client interface
pub trait StoreClient: Send + Sync {
    /// Fetch the part of `instance` selected by `path`. Blocks until the
    /// whole subtree or an error is available.
    fn get_config(&self, instance: ConfigInstance, path: &str)
        -> Result<ConfigSubtree, StoreError>;
}

/// Narrow a full instance tree to `path`, as a store backend does before replying.
pub fn narrow(
    root: &Node,
    path: &str,
    evaluator: &dyn TreeEvaluator,
) -> Result<ConfigSubtree, StoreError> {
    if path.trim() == WHOLE_INSTANCE || path.trim().is_empty() {
        return Ok(ConfigSubtree::new(root.clone()));
    }
    let matches = evaluator
        .select(root, path)
        .map_err(|e| StoreError::InvalidPath(e.to_string()))?;
    Ok(ConfigSubtree::new(prune_to_matches(root, &matches)))
}
