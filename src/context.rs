//! Show context: the explicit handle passed to every completion and show
//! operation. Holds the injected collaborators and the CLI style settings.

use crate::config::CliConfig;
use crate::error::ShowError;
use crate::render::{DefaultSerializers, Serializers};
use crate::resolve::{KeyFormatResolver, PathResolver};
use crate::store::StoreClient;
use crate::tree::{PathEvaluator, TreeEvaluator};
use crate::types::GenModelStyle;
use std::sync::Arc;

/// Read-only state shared by the operations of one invocation.
#[derive(Clone)]
pub struct ShowContext {
    store: Arc<dyn StoreClient>,
    resolver: Arc<dyn PathResolver>,
    evaluator: Arc<dyn TreeEvaluator>,
    serializers: Arc<dyn Serializers>,
    settings: CliConfig,
}

impl ShowContext {
    /// Context with the default resolver, evaluator and serializers.
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self {
            store,
            resolver: Arc::new(KeyFormatResolver::new()),
            evaluator: Arc::new(PathEvaluator::new()),
            serializers: Arc::new(DefaultSerializers),
            settings: CliConfig::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn PathResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn TreeEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_serializers(mut self, serializers: Arc<dyn Serializers>) -> Self {
        self.serializers = serializers;
        self
    }

    pub fn with_settings(mut self, settings: CliConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn store(&self) -> &dyn StoreClient {
        self.store.as_ref()
    }

    pub fn resolver(&self) -> &dyn PathResolver {
        self.resolver.as_ref()
    }

    pub fn evaluator(&self) -> &dyn TreeEvaluator {
        self.evaluator.as_ref()
    }

    pub fn serializers(&self) -> &dyn Serializers {
        self.serializers.as_ref()
    }

    pub fn settings(&self) -> &CliConfig {
        &self.settings
    }

    /// Current command-replay style. The setting is stored raw, so an
    /// unparseable value surfaces here as a configuration error.
    pub fn genmodel_style(&self) -> Result<GenModelStyle, ShowError> {
        self.settings.genmodel_type.parse()
    }
}
