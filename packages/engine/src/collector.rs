//! Class collector
//!
//! Walks a flattened config in precedence order and routes normalized
//! tokens into per-slot lists:
//!
//! 1. `base`, into every slot
//! 2. slot literals
//! 3. variant classes, in variant declaration order
//! 4. matching compound variants
//! 5. matching compound slots, only into the slots they name
//!
//! Classes naming a slot that isn't declared are dropped.

use crate::compound::matches;
use crate::config::{SlotClasses, SlotTarget};
use crate::flatten::FlattenedStyleConfig;
use crate::matcher::EffectiveSelection;
use tracing::trace;
use variantkit_common::{normalize, ClassValue, OrderedMap, VisitorMut};

/// Collect the token lists of every slot. `base` is always the first key.
pub fn collect(flat: &FlattenedStyleConfig, selection: &EffectiveSelection) -> OrderedMap<Vec<String>> {
    let mut sink = Sink {
        slots: flat.slot_names().map(|name| (name, Vec::new())).collect(),
    };
    sink.walk(flat, selection);
    sink.slots
}

/// Collect the token list of one slot. Unknown slots collect nothing.
pub fn collect_slot(flat: &FlattenedStyleConfig, selection: &EffectiveSelection, slot: &str) -> Vec<String> {
    if !flat.has_slot(slot) {
        return Vec::new();
    }

    let mut sink = Sink {
        slots: std::iter::once((slot, Vec::new())).collect(),
    };
    sink.walk(flat, selection);
    sink.slots.remove(slot).unwrap_or_default()
}

struct Sink {
    slots: OrderedMap<Vec<String>>,
}

impl Sink {
    fn walk(&mut self, flat: &FlattenedStyleConfig, selection: &EffectiveSelection) {
        self.push_all(&flat.base, None);

        for (name, classes) in flat.slots.iter() {
            self.push_slot(name, classes, None);
        }

        for (variant, values) in flat.variants.iter() {
            let selected = selection.get(variant).and_then(|value| values.get(value.as_str()));
            if let Some(classes) = selected {
                self.push_classes(classes, None);
            }

            let Some(breakpoints) = selection.breakpoints(variant) else {
                continue;
            };
            for (breakpoint, value) in breakpoints.iter() {
                if let Some(classes) = values.get(value.as_str()) {
                    self.push_classes(classes, Some(breakpoint));
                }
            }
        }

        for compound in &flat.compound_variants {
            if matches(&compound.conditions, selection) {
                self.push_classes(&compound.classes, None);
            }
        }

        for compound in &flat.compound_slots {
            if !matches(&compound.conditions, selection) {
                continue;
            }
            for slot in &compound.slots {
                self.push_slot(slot, &compound.classes, None);
            }
        }
    }

    fn push_classes(&mut self, classes: &SlotClasses, breakpoint: Option<&str>) {
        for (target, value) in classes.entries() {
            match target {
                SlotTarget::All => self.push_all(value, breakpoint),
                SlotTarget::Slot(name) => self.push_slot(name, value, breakpoint),
            }
        }
    }

    fn push_all(&mut self, value: &ClassValue, breakpoint: Option<&str>) {
        let tokens = prefixed(value, breakpoint);
        if tokens.is_empty() {
            return;
        }
        for list in self.slots.values_mut() {
            list.extend(tokens.iter().cloned());
        }
    }

    fn push_slot(&mut self, slot: &str, value: &ClassValue, breakpoint: Option<&str>) {
        match self.slots.get_mut(slot) {
            Some(list) => list.extend(prefixed(value, breakpoint)),
            None => trace!(slot, "Skipping classes for slot outside collection"),
        }
    }
}

fn prefixed(value: &ClassValue, breakpoint: Option<&str>) -> Vec<String> {
    match breakpoint {
        Some(bp) => {
            let mut value = value.clone();
            BreakpointPrefix(bp).visit_class_value_mut(&mut value);
            normalize(&value)
        }
        None => normalize(value),
    }
}

/// Rewrites every class of a value to apply under one breakpoint
struct BreakpointPrefix<'a>(&'a str);

impl VisitorMut for BreakpointPrefix<'_> {
    fn visit_token_mut(&mut self, token: &mut String) {
        *token = token
            .split_whitespace()
            .map(|class| format!("{}:{}", self.0, class))
            .collect::<Vec<_>>()
            .join(" ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompoundSlot, CompoundVariant, StyleConfig};
    use crate::flatten::merge;
    use crate::matcher::{resolve_selection, resolve_selection_with};
    use crate::options::ResponsiveVariants;
    use crate::props::Props;
    use std::sync::Arc;

    fn flat(config: StyleConfig) -> Arc<FlattenedStyleConfig> {
        merge(&Arc::new(config)).unwrap()
    }

    #[test]
    fn test_slotless_config_collects_into_base() {
        let flat = flat(
            StyleConfig::new()
                .base("inline-flex")
                .variant("size", [("sm", "h-8"), ("lg", "h-12")])
                .default_variant("size", "sm"),
        );
        let slots = collect(&flat, &resolve_selection(&flat, &Props::new()));

        assert_eq!(slots.keys().collect::<Vec<_>>(), vec!["base"]);
        assert_eq!(slots.get("base").unwrap(), &vec!["inline-flex", "h-8"]);
    }

    #[test]
    fn test_precedence_order() {
        let flat = flat(
            StyleConfig::new()
                .base("b1")
                .slot("base", "s1")
                .slot("title", "t1")
                .variant("size", [("lg", "v1")])
                .compound_variant(CompoundVariant::new().when("size", "lg").class("c1"))
                .compound_slot(CompoundSlot::new(["title"]).class("cs1")),
        );
        let selection = resolve_selection(&flat, &Props::new().variant("size", "lg"));
        let slots = collect(&flat, &selection);

        assert_eq!(slots.get("base").unwrap(), &vec!["b1", "s1", "v1", "c1"]);
        assert_eq!(slots.get("title").unwrap(), &vec!["b1", "t1", "v1", "c1", "cs1"]);
    }

    #[test]
    fn test_unknown_slot_names_are_ignored() {
        let flat = flat(
            StyleConfig::new()
                .slot("title", "font-bold")
                .variant("tone", [("danger", SlotClasses::per_slot([("missing", "text-red")]))])
                .compound_slot(CompoundSlot::new(["missing", "title"]).class("truncate")),
        );
        let selection = resolve_selection(&flat, &Props::new().variant("tone", "danger"));
        let slots = collect(&flat, &selection);

        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get("title").unwrap(), &vec!["font-bold", "truncate"]);
    }

    #[test]
    fn test_collect_slot_matches_full_collection() {
        let flat = flat(
            StyleConfig::new()
                .base("rounded")
                .slot("header", "p-4")
                .slot("footer", "pt-2")
                .compound_slot(CompoundSlot::new(["header"]).class("border-b")),
        );
        let selection = resolve_selection(&flat, &Props::new());
        let all = collect(&flat, &selection);

        for slot in ["base", "header", "footer"] {
            assert_eq!(&collect_slot(&flat, &selection, slot), all.get(slot).unwrap());
        }
        assert!(collect_slot(&flat, &selection, "body").is_empty());
    }

    #[test]
    fn test_responsive_classes_follow_variant_classes() {
        let flat = flat(
            StyleConfig::new()
                .variant("size", [("sm", "h-8 px-2"), ("lg", "h-12")])
                .variant("tone", [("muted", "opacity-50")]),
        );
        let props = Props::new()
            .responsive("size", [("initial", "sm"), ("md", "lg")])
            .variant("tone", "muted");
        let selection = resolve_selection_with(&flat, &props, &ResponsiveVariants::All);

        let tokens = collect_slot(&flat, &selection, "base");
        assert_eq!(tokens, vec!["h-8", "px-2", "md:h-12", "opacity-50"]);
    }

    #[test]
    fn test_breakpoint_classes_without_initial_value() {
        let flat = flat(StyleConfig::new().variant("size", [("sm", "h-8"), ("lg", "h-12")]));
        let props = Props::new().responsive("size", [("md", "lg")]);
        let selection = resolve_selection_with(&flat, &props, &ResponsiveVariants::All);

        assert_eq!(collect_slot(&flat, &selection, "base"), vec!["md:h-12"]);
    }

    #[test]
    fn test_breakpoint_prefix_reaches_nested_values() {
        let value = ClassValue::Seq(vec![
            "h-8 px-2".into(),
            ClassValue::conditional([("ring-1", true), ("ring-2", false)]),
        ]);

        assert_eq!(prefixed(&value, Some("lg")), vec!["lg:h-8", "lg:px-2", "lg:ring-1"]);
        assert_eq!(prefixed(&value, None), vec!["h-8", "px-2", "ring-1"]);
    }
}
