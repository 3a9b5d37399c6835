//! Persistence layer for configuration instances

use crate::error::StoreError;
use crate::store::{narrow, StoreClient};
use crate::tree::node::ConfigSubtree;
use crate::tree::PathEvaluator;
use crate::types::ConfigInstance;
use bincode;
use sled;
use std::path::Path;
use tracing::debug;

/// Sled-based implementation of StoreClient
///
/// Each instance is one bincode-encoded tree under the key `instance:<name>`.
/// An instance that was never written reads as an empty tree.
pub struct SledConfigStore {
    db: sled::Db,
    evaluator: PathEvaluator,
}

impl SledConfigStore {
    /// Open (or create) a store at the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path).map_err(|e| {
            StoreError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to open sled database: {}", e),
            ))
        })?;
        Ok(Self::from_db(db))
    }

    pub fn from_db(db: sled::Db) -> Self {
        Self {
            db,
            evaluator: PathEvaluator::new(),
        }
    }

    fn key(instance: ConfigInstance) -> String {
        format!("instance:{}", instance.as_str())
    }

    /// Load the whole tree of an instance.
    pub fn load(&self, instance: ConfigInstance) -> Result<ConfigSubtree, StoreError> {
        let value = self
            .db
            .get(Self::key(instance).as_bytes())
            .map_err(|e| StoreError::Backend(format!("Failed to read instance: {}", e)))?;
        match value {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| StoreError::Codec(format!("Failed to decode instance: {}", e))),
            None => Ok(ConfigSubtree::empty()),
        }
    }

    /// Replace the whole tree of an instance.
    pub fn put(&self, instance: ConfigInstance, tree: &ConfigSubtree) -> Result<(), StoreError> {
        let value = bincode::serialize(tree)
            .map_err(|e| StoreError::Codec(format!("Failed to encode instance: {}", e)))?;
        self.db
            .insert(Self::key(instance).as_bytes(), value)
            .map_err(|e| StoreError::Backend(format!("Failed to write instance: {}", e)))?;
        self.db
            .flush()
            .map_err(|e| StoreError::Backend(format!("Failed to flush store: {}", e)))?;
        debug!(instance = %instance, nodes = tree.root().count(), "Stored configuration instance");
        Ok(())
    }
}

impl StoreClient for SledConfigStore {
    fn get_config(
        &self,
        instance: ConfigInstance,
        path: &str,
    ) -> Result<ConfigSubtree, StoreError> {
        let tree = self.load(instance)?;
        narrow(tree.root(), path, &self.evaluator)
    }
}
