//! Variant matcher
//!
//! Combines runtime props with declared defaults into the effective
//! selection used by the collector and the compound evaluator.

use crate::config::VariantValue;
use crate::flatten::FlattenedStyleConfig;
use crate::options::ResponsiveVariants;
use crate::props::{PropValue, Props, INITIAL_BREAKPOINT};
use variantkit_common::OrderedMap;

/// Effective variant values for one resolution, in variant declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveSelection {
    values: OrderedMap<VariantValue>,
    responsive: OrderedMap<OrderedMap<VariantValue>>,
}

impl EffectiveSelection {
    pub fn get(&self, variant: &str) -> Option<&VariantValue> {
        self.values.get(variant)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Breakpoint values beyond `initial` for a responsive variant.
    pub fn breakpoints(&self, variant: &str) -> Option<&OrderedMap<VariantValue>> {
        self.responsive.get(variant)
    }
}

/// Resolve the effective selection, ignoring responsive breakpoints.
pub fn resolve_selection(flat: &FlattenedStyleConfig, props: &Props) -> EffectiveSelection {
    resolve_selection_with(flat, props, &ResponsiveVariants::Disabled)
}

/// Resolve the effective selection.
///
/// Runtime values win over defaults. Variants neither selected nor
/// defaulted stay unset. Props naming undeclared variants are ignored.
pub fn resolve_selection_with(
    flat: &FlattenedStyleConfig,
    props: &Props,
    responsive: &ResponsiveVariants,
) -> EffectiveSelection {
    let mut selection = EffectiveSelection::default();

    for variant in flat.variants.keys() {
        let default = flat.default_variants.get(variant);

        let value = match props.get(variant) {
            Some(PropValue::Value(value)) => Some(value),
            Some(PropValue::Responsive(values)) => {
                let breakpoints: OrderedMap<VariantValue> = values
                    .iter()
                    .filter(|(bp, _)| *bp != INITIAL_BREAKPOINT && responsive.allows(bp))
                    .map(|(bp, value)| (bp, value.clone()))
                    .collect();
                if !breakpoints.is_empty() {
                    selection.responsive.insert(variant, breakpoints);
                }
                values.get(INITIAL_BREAKPOINT).or(default)
            }
            Some(PropValue::Undefined) | None => default,
        };

        if let Some(value) = value {
            selection.values.insert(variant, value.clone());
        }
    }

    selection
}
