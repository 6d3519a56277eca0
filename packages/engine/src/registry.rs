//! Named style configs
//!
//! Lets configs extend each other by name (`"extend": "button"`), which is
//! also the only way an extend chain can loop back on itself.

use crate::config::StyleConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::flatten::ExtendLookup;
use crate::tv::{StyleFn, Tv};
use std::sync::Arc;
use tracing::debug;
use variantkit_common::OrderedMap;

#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    configs: OrderedMap<Arc<StyleConfig>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON object of name -> config.
    pub fn from_json(source: &str) -> ConfigResult<Self> {
        let configs: OrderedMap<StyleConfig> = serde_json::from_str(source)?;
        let mut registry = StyleRegistry::new();
        for (name, config) in configs {
            registry.insert(name, config);
        }
        debug!(configs = registry.len(), "Loaded style registry");
        Ok(registry)
    }

    /// Register a config, naming it. Replaces any config with the same name.
    pub fn insert(&mut self, name: impl Into<String>, config: StyleConfig) -> Arc<StyleConfig> {
        let name = name.into();
        let config = Arc::new(config.named(name.clone()));
        self.configs.insert(name, Arc::clone(&config));
        config
    }

    pub fn get(&self, name: &str) -> Option<Arc<StyleConfig>> {
        self.configs.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Build the style function of one registered config.
    pub fn build(&self, tv: &Tv, name: &str) -> ConfigResult<StyleFn> {
        let config = self.get(name).ok_or_else(|| ConfigError::NotFound {
            name: name.to_string(),
        })?;
        tv.tv_with_lookup(config, self)
    }

    /// Build every registered config, failing on the first broken one.
    pub fn build_all(&self, tv: &Tv) -> ConfigResult<OrderedMap<StyleFn>> {
        self.names()
            .map(|name| self.build(tv, name).map(|style| (name, style)))
            .collect()
    }
}

impl ExtendLookup for StyleRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<StyleConfig>> {
        self.get(name)
    }
}
