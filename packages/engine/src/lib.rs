//! # Variant style engine
//!
//! Resolves declarative style configs into class strings.
//!
//! ```text
//! StyleConfig ──flatten──▶ FlattenedStyleConfig ─┐
//!                                                 ├─▶ collect ─▶ resolve ─▶ String
//! Props ─────────────────▶ EffectiveSelection ───┘
//! ```
//!
//! Configs are flattened once per identity and cached; every call after that
//! is a pure function of the flattened config and the caller's props.

pub mod adapter;
pub mod cache;
pub mod collector;
pub mod compound;
pub mod config;
pub mod error;
pub mod flatten;
pub mod matcher;
pub mod options;
pub mod props;
pub mod registry;
pub mod slots;
pub mod tv;
pub mod validate;

#[cfg(test)]
mod tests_inheritance;

#[cfg(test)]
mod tests_slots;

#[cfg(test)]
mod tests_compound;

pub use cache::FlattenCache;
pub use config::{
    CompoundSlot, CompoundVariant, Condition, Extend, SlotClasses, SlotTarget, StyleConfig,
    VariantValue, BASE_SLOT,
};
pub use error::{ConfigError, ConfigResult, PropsError, PropsResult};
pub use flatten::{flatten, merge, ExtendLookup, FlattenedStyleConfig, NoLookup};
pub use matcher::{resolve_selection, resolve_selection_with, EffectiveSelection};
pub use options::{ResponsiveVariants, TvOptions};
pub use props::{PropValue, Props};
pub use registry::StyleRegistry;
pub use slots::{SlotSet, StyleEngine};
pub use tv::{cn, create_tv, cx, tv, Resolved, StyleFn, Tv};

// Re-export the class value model and resolver boundary so callers need one crate
pub use variantkit_common::{ClassValue, OrderedMap};
pub use variantkit_merge::{ConflictResolver, MergeConfig, TailwindMerger};
