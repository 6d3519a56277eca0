//! Config merger
//!
//! Resolves the `extend` chain of a config into one [`FlattenedStyleConfig`],
//! most distant ancestor first. Every field is layered child-after-parent:
//! class lists concatenate, maps union, compound rules append and defaults
//! are overridden per variant.

use crate::cache::FlattenCache;
use crate::config::{
    CompoundSlot, CompoundVariant, Extend, SlotClasses, StyleConfig, VariantValue, BASE_SLOT,
};
use crate::error::{ConfigError, ConfigResult};
use std::sync::Arc;
use tracing::{debug, instrument};
use variantkit_common::{ClassValue, OrderedMap};

/// Looks up parents referenced by name (`extend: "button"`)
pub trait ExtendLookup {
    fn lookup(&self, name: &str) -> Option<Arc<StyleConfig>>;
}

/// Lookup for configs that only extend by reference
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl ExtendLookup for NoLookup {
    fn lookup(&self, _name: &str) -> Option<Arc<StyleConfig>> {
        None
    }
}

/// A config with its inheritance chain applied
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedStyleConfig {
    /// Classes routed to every slot
    pub base: ClassValue,

    /// Slot literals; `base` is always the first key
    pub slots: OrderedMap<ClassValue>,

    /// Whether any config in the chain declared `slots`
    pub has_slots: bool,

    pub variants: OrderedMap<OrderedMap<SlotClasses>>,

    pub compound_variants: Vec<CompoundVariant>,

    pub compound_slots: Vec<CompoundSlot>,

    pub default_variants: OrderedMap<VariantValue>,
}

impl FlattenedStyleConfig {
    pub fn new() -> Self {
        let mut slots = OrderedMap::new();
        slots.insert(BASE_SLOT, ClassValue::Empty);
        Self {
            base: ClassValue::Empty,
            slots,
            has_slots: false,
            variants: OrderedMap::new(),
            compound_variants: Vec::new(),
            compound_slots: Vec::new(),
            default_variants: OrderedMap::new(),
        }
    }

    /// Layer a more specific config on top of this one.
    pub fn layer(&mut self, child: &StyleConfig) {
        self.base = std::mem::take(&mut self.base).concat(child.base.clone());

        if let Some(slots) = &child.slots {
            self.has_slots = true;
            for (name, classes) in slots.iter() {
                let slot = self.slots.get_or_insert_with(name, ClassValue::default);
                *slot = std::mem::take(slot).concat(classes.clone());
            }
        }

        for (variant, values) in child.variants.iter() {
            let merged = self.variants.get_or_insert_with(variant, OrderedMap::new);
            for (value, classes) in values.iter() {
                merged
                    .get_or_insert_with(value, SlotClasses::default)
                    .append(classes.clone());
            }
        }

        self.compound_variants
            .extend(child.compound_variants.iter().cloned());
        self.compound_slots.extend(child.compound_slots.iter().cloned());

        for (variant, value) in child.default_variants.iter() {
            self.default_variants.insert(variant, value.clone());
        }
    }

    pub fn variant_keys(&self) -> Vec<String> {
        self.variants.keys().map(str::to_string).collect()
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys()
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Whether `value` is declared for `variant`.
    pub fn has_value(&self, variant: &str, value: &VariantValue) -> bool {
        self.variants
            .get(variant)
            .is_some_and(|values| values.contains_key(value.as_str()))
    }
}

impl Default for FlattenedStyleConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_parent(
    config: &StyleConfig,
    extend: &Extend,
    lookup: &dyn ExtendLookup,
) -> ConfigResult<Arc<StyleConfig>> {
    match extend {
        Extend::Config(parent) => Ok(Arc::clone(parent)),
        Extend::Named(name) => lookup.lookup(name).ok_or_else(|| ConfigError::UnknownParent {
            name: config.display_name().to_string(),
            parent: name.clone(),
        }),
    }
}

fn describe_chain(chain: &[Arc<StyleConfig>], repeated: &StyleConfig) -> String {
    chain
        .iter()
        .map(|config| config.display_name())
        .chain(std::iter::once(repeated.display_name()))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Flatten a config and its ancestors.
///
/// Walks the chain child-to-root, stopping early at the first ancestor
/// already present in `cache`, then layers root-first. Configs on the walked
/// chain are cached on the way back down, except those that reach an
/// ancestor by name: the lookup may answer differently next time.
#[instrument(skip_all, fields(config = config.display_name()))]
pub fn flatten(
    config: &Arc<StyleConfig>,
    lookup: &dyn ExtendLookup,
    cache: Option<&FlattenCache>,
) -> ConfigResult<Arc<FlattenedStyleConfig>> {
    if let Some(hit) = cache.and_then(|c| c.get(config)) {
        debug!("Flattened config cache hit");
        return Ok(hit);
    }

    let mut chain: Vec<Arc<StyleConfig>> = vec![Arc::clone(config)];
    let mut start: Option<Arc<FlattenedStyleConfig>> = None;

    loop {
        let current = &chain[chain.len() - 1];
        let Some(extend) = &current.extend else {
            break;
        };
        let parent = resolve_parent(current, extend, lookup)?;

        if chain.iter().any(|seen| Arc::ptr_eq(seen, &parent)) {
            return Err(ConfigError::CircularExtend {
                chain: describe_chain(&chain, &parent),
            });
        }

        if let Some(hit) = cache.and_then(|c| c.get(&parent)) {
            debug!(parent = parent.display_name(), "Reusing cached ancestor");
            start = Some(hit);
            break;
        }

        debug!(parent = parent.display_name(), depth = chain.len(), "Walking extend chain");
        chain.push(parent);
    }

    let mut flattened = match start {
        Some(ancestor) => (*ancestor).clone(),
        None => FlattenedStyleConfig::new(),
    };

    // Everything at or below the deepest named extend depends on the lookup.
    let named = chain
        .iter()
        .rposition(|config| matches!(config.extend, Some(Extend::Named(_))));

    let mut result = None;
    for (depth, config) in chain.iter().enumerate().rev() {
        flattened.layer(config);
        let layered = Arc::new(flattened.clone());
        result = Some(match cache {
            Some(cache) if named.map_or(true, |named| depth > named) => {
                cache.insert(Arc::clone(config), layered)
            }
            _ => layered,
        });
    }

    debug!(
        depth = chain.len(),
        variants = flattened.variants.len(),
        slots = flattened.slots.len(),
        "Flattened config"
    );

    Ok(result.unwrap_or_else(|| Arc::new(flattened)))
}

/// Flatten a config that only extends by reference, without caching.
pub fn merge(config: &Arc<StyleConfig>) -> ConfigResult<Arc<FlattenedStyleConfig>> {
    flatten(config, &NoLookup, None)
}
