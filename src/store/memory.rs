//! In-memory store, used for fixtures and as a fake in tests.

use crate::error::StoreError;
use crate::store::{narrow, StoreClient};
use crate::tree::node::{ConfigSubtree, Node, ROOT_NAME};
use crate::tree::PathEvaluator;
use crate::types::ConfigInstance;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store holding one tree per instance in memory.
///
/// Counts fetches and can be told to fail, so callers can check that
/// validation happens before any store access.
#[derive(Default)]
pub struct MemoryStore {
    instances: RwLock<HashMap<ConfigInstance, Node>>,
    failure: RwLock<Option<String>>,
    fetches: AtomicUsize,
    evaluator: PathEvaluator,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of `instance`.
    pub fn put(&self, instance: ConfigInstance, tree: ConfigSubtree) {
        self.instances.write().insert(instance, tree.into_root());
    }

    pub fn with_instance(self, instance: ConfigInstance, tree: ConfigSubtree) -> Self {
        self.put(instance, tree);
        self
    }

    /// Make every following fetch fail with a backend error.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write() = Some(message.into());
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl StoreClient for MemoryStore {
    fn get_config(
        &self,
        instance: ConfigInstance,
        path: &str,
    ) -> Result<ConfigSubtree, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.read().as_ref() {
            return Err(StoreError::Backend(message.clone()));
        }
        let instances = self.instances.read();
        match instances.get(&instance) {
            Some(root) => narrow(root, path, &self.evaluator),
            None => narrow(&Node::element(ROOT_NAME), path, &self.evaluator),
        }
    }
}
