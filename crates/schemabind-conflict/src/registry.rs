//! Strategy catalog and registry.
//!
//! Strategies are named in configuration by identifier (for example
//! `schemabind_conflict::InformViaLogStrategy`). A [`StrategyCatalog`] maps
//! identifiers to loaders; a [`StrategyRegistry`] is built once per run from a
//! configuration string and indexes the loaded strategies by the name each one
//! reports about itself.
//!
//! # Example
//!
//! ```
//! use schemabind_conflict::StrategyRegistry;
//!
//! let registry = StrategyRegistry::new(Some(
//!     "schemabind_conflict::InformViaLogStrategy, no.such.Strategy",
//! ))
//! .unwrap();
//!
//! assert_eq!(registry.names(), vec!["informViaLog".to_string()]);
//! assert!(registry.lookup("informViaLog").is_ok());
//! assert!(registry.lookup("").is_err());
//! ```

use crate::inform_via_log::InformViaLogStrategy;
use crate::strategy::ClassNameConflictStrategy;
use crate::warn_via_dialog::WarnViaConsoleDialogStrategy;
use once_cell::sync::Lazy;
use schemabind_core::{BindError, BindResult};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Why a configured identifier could not be turned into a strategy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No loader is registered under the identifier
    #[error("no strategy implementation named '{0}'")]
    NotFound(String),

    /// The implementation exists but is not a conflict strategy
    #[error("'{0}' does not implement the conflict strategy capabilities")]
    MissingCapability(String),

    /// The implementation cannot be instantiated on its own
    #[error("'{0}' cannot be instantiated")]
    NotInstantiable(String),
}

type Loader = Box<dyn Fn() -> Result<Arc<dyn ClassNameConflictStrategy>, LoadError> + Send + Sync>;

/// Identifier to loader mapping consulted when a registry is built
#[derive(Default)]
pub struct StrategyCatalog {
    loaders: HashMap<String, Loader>,
}

static BUILTIN: Lazy<StrategyCatalog> = Lazy::new(StrategyCatalog::with_builtins);

impl StrategyCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog holding the built-in strategies
    pub fn builtin() -> &'static StrategyCatalog {
        &BUILTIN
    }

    /// A fresh catalog pre-populated with the built-in strategies
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        catalog.register::<InformViaLogStrategy>(InformViaLogStrategy::IDENTIFIER);
        catalog.register::<WarnViaConsoleDialogStrategy>(WarnViaConsoleDialogStrategy::IDENTIFIER);
        catalog
    }

    /// Register a strategy type constructed through its zero-argument `Default`
    pub fn register<S>(&mut self, identifier: impl Into<String>) -> &mut Self
    where
        S: ClassNameConflictStrategy + Default,
    {
        self.register_loader(identifier, || {
            Ok(Arc::new(S::default()) as Arc<dyn ClassNameConflictStrategy>)
        })
    }

    /// Register an arbitrary loader, which may refuse to produce a strategy
    pub fn register_loader<F>(&mut self, identifier: impl Into<String>, loader: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn ClassNameConflictStrategy>, LoadError> + Send + Sync + 'static,
    {
        self.loaders.insert(identifier.into(), Box::new(loader));
        self
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.loaders.contains_key(identifier)
    }

    /// Instantiate the strategy registered under `identifier`
    pub fn load(&self, identifier: &str) -> Result<Arc<dyn ClassNameConflictStrategy>, LoadError> {
        let loader = self
            .loaders
            .get(identifier)
            .ok_or_else(|| LoadError::NotFound(identifier.to_string()))?;
        loader()
    }
}

/// Split a configuration string into identifiers.
///
/// Commas and whitespace both separate; empty tokens are dropped.
pub fn split_identifiers(config: &str) -> impl Iterator<Item = &str> {
    config
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Name to strategy index, immutable once built
///
/// Each strategy is a singleton within the registry: every lookup of a name
/// hands out the same instance. Names are kept sorted so listing is stable.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: BTreeMap<String, Arc<dyn ClassNameConflictStrategy>>,
}

impl StrategyRegistry {
    /// Build a registry from the built-in catalog
    ///
    /// A missing configuration string is an error; an empty one yields an
    /// empty registry.
    pub fn new(config: Option<&str>) -> BindResult<Self> {
        Self::with_catalog(StrategyCatalog::builtin(), config)
    }

    /// Build a registry resolving identifiers through `catalog`
    ///
    /// Identifiers that fail to load are logged and skipped. When two
    /// strategies report the same name the one listed last is kept.
    pub fn with_catalog(catalog: &StrategyCatalog, config: Option<&str>) -> BindResult<Self> {
        let config = config.ok_or_else(|| {
            BindError::MissingConfiguration("conflict strategy list was not provided".into())
        })?;

        let mut strategies: BTreeMap<String, Arc<dyn ClassNameConflictStrategy>> = BTreeMap::new();
        let mut loaded: HashSet<&str> = HashSet::new();

        for identifier in split_identifiers(config) {
            if !loaded.insert(identifier) {
                tracing::debug!(%identifier, "strategy listed more than once");
                continue;
            }

            let strategy = match catalog.load(identifier) {
                Ok(strategy) => strategy,
                Err(err) => {
                    tracing::warn!(%identifier, error = %err, "skipping conflict strategy");
                    continue;
                }
            };

            let name = strategy.name().to_string();
            if name.is_empty() {
                tracing::warn!(%identifier, "skipping conflict strategy without a name");
                continue;
            }

            tracing::debug!(%identifier, %name, "conflict strategy registered");
            if strategies.insert(name.clone(), strategy).is_some() {
                tracing::warn!(%identifier, %name, "strategy name registered twice, keeping the later one");
            }
        }

        Ok(Self { strategies })
    }

    /// The strategy registered under `name`
    pub fn lookup(&self, name: &str) -> BindResult<Arc<dyn ClassNameConflictStrategy>> {
        self.strategies
            .get(name)
            .cloned()
            .ok_or_else(|| BindError::UnknownStrategy(name.to_string()))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.strategies.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("names", &self.names())
            .finish()
    }
}
