//! Slot resolver
//!
//! A [`StyleEngine`] owns everything one resolution needs: the flattened
//! config, the conflict resolver and the responsive settings. Every call
//! recomputes the selection from scratch; nothing is mutated.

use crate::adapter::resolve_tokens;
use crate::collector::collect_slot;
use crate::config::BASE_SLOT;
use crate::flatten::FlattenedStyleConfig;
use crate::matcher::{resolve_selection_with, EffectiveSelection};
use crate::options::ResponsiveVariants;
use crate::props::Props;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::trace;
use variantkit_common::OrderedMap;
use variantkit_merge::ConflictResolver;

#[derive(Clone)]
pub struct StyleEngine {
    flat: Arc<FlattenedStyleConfig>,
    resolver: Arc<dyn ConflictResolver>,
    responsive: ResponsiveVariants,
}

impl StyleEngine {
    pub fn new(
        flat: Arc<FlattenedStyleConfig>,
        resolver: Arc<dyn ConflictResolver>,
        responsive: ResponsiveVariants,
    ) -> Self {
        Self {
            flat,
            resolver,
            responsive,
        }
    }

    pub fn flattened(&self) -> &Arc<FlattenedStyleConfig> {
        &self.flat
    }

    pub fn selection(&self, props: &Props) -> EffectiveSelection {
        resolve_selection_with(&self.flat, props, &self.responsive)
    }

    /// Resolve one slot.
    ///
    /// `call` holds props passed to the slot itself: its variant values win
    /// over `props`, and its class overrides land on this slot after the
    /// overrides from `props`.
    pub fn resolve_slot(&self, slot: &str, props: &Props, call: Option<&Props>) -> String {
        let props_for_selection = match call {
            Some(call) => Cow::Owned(props.overlay_variants(call)),
            None => Cow::Borrowed(props),
        };
        let selection = self.selection(&props_for_selection);
        let mut tokens = collect_slot(&self.flat, &selection, slot);

        if slot == BASE_SLOT {
            props.class_value().collect_into(&mut tokens);
            props.class_name_value().collect_into(&mut tokens);
        }
        if let Some(classes) = props.slot_classes().get(slot) {
            classes.collect_into(&mut tokens);
        }

        if let Some(call) = call {
            call.class_value().collect_into(&mut tokens);
            call.class_name_value().collect_into(&mut tokens);
            if let Some(classes) = call.slot_classes().get(slot) {
                classes.collect_into(&mut tokens);
            }
        }

        trace!(slot, tokens = tokens.len(), "Resolving slot");
        resolve_tokens(&tokens, &*self.resolver)
    }
}

impl fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleEngine")
            .field("slots", &self.flat.slots.len())
            .field("variants", &self.flat.variants.len())
            .field("resolver", &self.resolver)
            .field("responsive", &self.responsive)
            .finish()
    }
}

/// The slot callables of a slotted style function, bound to outer props
#[derive(Debug, Clone)]
pub struct SlotSet<'a> {
    engine: &'a StyleEngine,
    props: Props,
}

impl<'a> SlotSet<'a> {
    pub(crate) fn new(engine: &'a StyleEngine, props: Props) -> Self {
        Self { engine, props }
    }

    /// The root slot.
    pub fn base(&self) -> String {
        self.engine.resolve_slot(BASE_SLOT, &self.props, None)
    }

    /// Resolve a declared slot with the outer props.
    pub fn get(&self, slot: &str) -> Option<String> {
        self.has(slot)
            .then(|| self.engine.resolve_slot(slot, &self.props, None))
    }

    /// Resolve a declared slot with additional call-level props.
    pub fn slot(&self, slot: &str, call: &Props) -> Option<String> {
        self.has(slot)
            .then(|| self.engine.resolve_slot(slot, &self.props, Some(call)))
    }

    pub fn has(&self, slot: &str) -> bool {
        self.engine.flat.has_slot(slot)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.engine.flat.slot_names()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.keys()
            .map(|slot| (slot, self.engine.resolve_slot(slot, &self.props, None)))
    }

    pub fn to_map(&self) -> OrderedMap<String> {
        self.iter().collect()
    }
}
