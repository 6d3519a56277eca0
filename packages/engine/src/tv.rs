//! Entry point
//!
//! [`Tv`] is the configured factory (`createTV`); [`Tv::tv`] turns a
//! [`StyleConfig`] into a [`StyleFn`]. Flattening, validation and resolver
//! setup all happen once here, so calling a [`StyleFn`] never walks the
//! extend chain again.

use crate::adapter::{default_resolver, resolve_tokens};
use crate::cache::FlattenCache;
use crate::config::{Extend, StyleConfig, VariantValue, BASE_SLOT};
use crate::error::{ConfigResult, PropsResult};
use crate::flatten::{flatten, ExtendLookup, FlattenedStyleConfig, NoLookup};
use crate::options::TvOptions;
use crate::props::Props;
use crate::slots::{SlotSet, StyleEngine};
use crate::validate::{check_props, validate_config};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use variantkit_common::{normalize, ClassValue, OrderedMap};
use variantkit_merge::{ConflictResolver, TailwindMerger};

/// A configured style function factory
#[derive(Debug, Clone)]
pub struct Tv {
    options: TvOptions,
    resolver: Arc<dyn ConflictResolver>,
    cache: Arc<FlattenCache>,
}

impl Tv {
    pub fn new(options: TvOptions) -> Self {
        Self {
            resolver: default_resolver(&options),
            options,
            cache: Arc::new(FlattenCache::new()),
        }
    }

    /// Use a custom conflict resolver instead of the one implied by `twMerge`.
    pub fn with_resolver(mut self, resolver: Arc<dyn ConflictResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Share a flatten cache with other factories.
    pub fn with_cache(mut self, cache: Arc<FlattenCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn options(&self) -> &TvOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<FlattenCache> {
        &self.cache
    }

    /// Build a style function from a config whose parents are inline.
    pub fn tv(&self, config: impl Into<Arc<StyleConfig>>) -> ConfigResult<StyleFn> {
        self.tv_with_lookup(config, &NoLookup)
    }

    /// Build a style function, resolving named parents through `lookup`.
    #[instrument(skip_all, fields(config = tracing::field::Empty))]
    pub fn tv_with_lookup(
        &self,
        config: impl Into<Arc<StyleConfig>>,
        lookup: &dyn ExtendLookup,
    ) -> ConfigResult<StyleFn> {
        let config = config.into();
        tracing::Span::current().record("config", config.display_name());

        let flat = flatten(&config, lookup, Some(&self.cache))?;
        validate_config(&flat, self.options.strict)?;

        let variant_keys = flat.variant_keys();
        debug!(
            variants = variant_keys.len(),
            slots = flat.slots.len(),
            "Built style function"
        );

        Ok(StyleFn {
            engine: StyleEngine::new(
                flat,
                self.resolver.clone(),
                self.options.responsive_variants.clone(),
            ),
            config,
            variant_keys,
        })
    }

    /// Normalize, join and resolve conflicts with this factory's resolver.
    pub fn cn(&self, classes: impl Into<ClassValue>) -> String {
        resolve_tokens(&normalize(&classes.into()), &*self.resolver)
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new(TvOptions::default())
    }
}

/// Output of a style function: one class string, or one per slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    Class(String),
    Slots(OrderedMap<String>),
}

impl Resolved {
    pub fn as_class(&self) -> Option<&str> {
        match self {
            Resolved::Class(class) => Some(class),
            Resolved::Slots(_) => None,
        }
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        match self {
            Resolved::Class(class) if name == BASE_SLOT => Some(class),
            Resolved::Class(_) => None,
            Resolved::Slots(slots) => slots.get(name).map(String::as_str),
        }
    }
}

/// A resolved style function
#[derive(Debug, Clone)]
pub struct StyleFn {
    engine: StyleEngine,
    config: Arc<StyleConfig>,
    variant_keys: Vec<String>,
}

impl StyleFn {
    /// Resolve the root class string.
    pub fn call(&self, props: &Props) -> String {
        self.engine.resolve_slot(BASE_SLOT, props, None)
    }

    /// Like [`StyleFn::call`], rejecting unknown variants, values and slots.
    pub fn try_call(&self, props: &Props) -> PropsResult<String> {
        self.check_props(props)?;
        Ok(self.call(props))
    }

    /// Bind props to the slot callables.
    pub fn slots(&self, props: &Props) -> SlotSet<'_> {
        SlotSet::new(&self.engine, props.clone())
    }

    pub fn try_slots(&self, props: &Props) -> PropsResult<SlotSet<'_>> {
        self.check_props(props)?;
        Ok(self.slots(props))
    }

    /// A single class string without slots, every slot otherwise.
    pub fn resolve(&self, props: &Props) -> Resolved {
        if self.has_slots() {
            Resolved::Slots(self.slots(props).to_map())
        } else {
            Resolved::Class(self.call(props))
        }
    }

    pub fn check_props(&self, props: &Props) -> PropsResult<()> {
        check_props(self.engine.flattened(), props)
    }

    pub fn variant_keys(&self) -> &[String] {
        &self.variant_keys
    }

    pub fn default_variants(&self) -> &OrderedMap<VariantValue> {
        &self.engine.flattened().default_variants
    }

    pub fn slot_keys(&self) -> Vec<&str> {
        self.engine.flattened().slot_names().collect()
    }

    pub fn has_slots(&self) -> bool {
        self.engine.flattened().has_slots
    }

    /// The config this function was built from, before flattening.
    pub fn config(&self) -> &Arc<StyleConfig> {
        &self.config
    }

    pub fn flattened(&self) -> &Arc<FlattenedStyleConfig> {
        self.engine.flattened()
    }
}

impl From<&StyleFn> for Extend {
    fn from(style: &StyleFn) -> Self {
        Extend::Config(Arc::clone(&style.config))
    }
}

/// A factory with the given options.
pub fn create_tv(options: TvOptions) -> Tv {
    Tv::new(options)
}

/// Build a style function with default options.
pub fn tv(config: impl Into<Arc<StyleConfig>>) -> ConfigResult<StyleFn> {
    Tv::default().tv(config)
}

/// Normalize and join classes, collapsing conflicts.
pub fn cn(classes: impl Into<ClassValue>) -> String {
    TailwindMerger::new().resolve(&normalize(&classes.into()).join(" "))
}

/// Normalize and join classes without conflict resolution.
pub fn cx(classes: impl Into<ClassValue>) -> String {
    normalize(&classes.into()).join(" ")
}
