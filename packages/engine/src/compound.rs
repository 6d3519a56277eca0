//! Compound condition evaluator

use crate::config::Condition;
use crate::matcher::EffectiveSelection;
use variantkit_common::OrderedMap;

/// Whether every condition holds for the selection.
///
/// A list condition is satisfied by any of its values; all variant names
/// must be satisfied. An empty condition map always matches.
pub fn matches(conditions: &OrderedMap<Condition>, selection: &EffectiveSelection) -> bool {
    conditions
        .iter()
        .all(|(variant, condition)| condition.accepts(selection.get(variant)))
}
