//! Style configuration model
//!
//! A [`StyleConfig`] is authored once, either through the builder methods or
//! from JSON, and is immutable afterwards. The JSON shape follows the
//! `tv({...})` object literal: `base`, `slots`, `variants`,
//! `compoundVariants`, `compoundSlots`, `defaultVariants` and `extend`.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use variantkit_common::{ClassValue, OrderedMap, ShapeError, ShapeResult};

/// Name of the implicit root slot
pub const BASE_SLOT: &str = "base";

/// A declared value of a variant. Boolean variants use `"true"` / `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantValue(String);

impl VariantValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read a scalar JSON value; strings, booleans and numbers are accepted.
    pub fn from_json(field: &str, value: &Value) -> ShapeResult<Self> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            Value::Bool(b) => Ok(Self::from(*b)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(ShapeError::unexpected(field, "a string, boolean or number", json_kind(other))),
        }
    }
}

impl From<&str> for VariantValue {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for VariantValue {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<bool> for VariantValue {
    fn from(b: bool) -> Self {
        Self(if b { "true" } else { "false" }.to_string())
    }
}

impl From<i64> for VariantValue {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for VariantValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VariantValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for VariantValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        VariantValue::from_json("variant value", &value).map_err(de::Error::custom)
    }
}

/// Where a block of classes is routed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotTarget {
    /// Every slot (or the single implicit slot)
    All,
    /// Only the named slot
    Slot(String),
}

/// Classes attached to a variant value or compound rule.
///
/// Either a flat class value (applies to every slot) or a per-slot map.
/// Entries keep their declaration order so that merging a parent's classes
/// with a child's stays parent-then-child inside every slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotClasses {
    entries: Vec<(SlotTarget, ClassValue)>,
}

impl SlotClasses {
    /// Classes for every slot.
    pub fn all(classes: impl Into<ClassValue>) -> Self {
        Self {
            entries: vec![(SlotTarget::All, classes.into())],
        }
    }

    /// A per-slot map.
    pub fn per_slot<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ClassValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(slot, classes)| (SlotTarget::Slot(slot.into()), classes.into()))
                .collect(),
        }
    }

    /// Add classes for one slot.
    pub fn and_slot(mut self, slot: impl Into<String>, classes: impl Into<ClassValue>) -> Self {
        self.entries.push((SlotTarget::Slot(slot.into()), classes.into()));
        self
    }

    /// Append another block after this one.
    pub fn append(&mut self, other: SlotClasses) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[(SlotTarget, ClassValue)] {
        &self.entries
    }

    /// Slot names referenced by per-slot entries.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(target, _)| match target {
            SlotTarget::Slot(name) => Some(name.as_str()),
            SlotTarget::All => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, classes)| classes.is_empty())
    }

    /// Read the JSON form: an object whose values are all flags is a
    /// conditional class map, any other object is a per-slot map.
    ///
    /// Flags here are booleans, numbers and `null`. A string value always
    /// names slot classes, so `{ "bg-red": "yes" }` targets a slot called
    /// `bg-red`, which strict builds reject as unknown. Inside an array the
    /// same object is a conditional map with a truthy string.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(map) if !is_conditional_map(&map) => {
                let mut classes = SlotClasses::default();
                for (slot, value) in map {
                    let value: ClassValue = serde_json::from_value(value)?;
                    classes.entries.push((SlotTarget::Slot(slot), value));
                }
                Ok(classes)
            }
            other => Ok(SlotClasses::all(serde_json::from_value::<ClassValue>(other)?)),
        }
    }
}

fn is_conditional_map(map: &Map<String, Value>) -> bool {
    !map.is_empty()
        && map
            .values()
            .all(|v| matches!(v, Value::Bool(_) | Value::Number(_) | Value::Null))
}

impl From<&str> for SlotClasses {
    fn from(s: &str) -> Self {
        SlotClasses::all(s)
    }
}

impl From<String> for SlotClasses {
    fn from(s: String) -> Self {
        SlotClasses::all(s)
    }
}

impl From<ClassValue> for SlotClasses {
    fn from(value: ClassValue) -> Self {
        SlotClasses::all(value)
    }
}

impl From<Vec<&str>> for SlotClasses {
    fn from(items: Vec<&str>) -> Self {
        SlotClasses::all(items)
    }
}

impl<'de> Deserialize<'de> for SlotClasses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SlotClasses::from_json(value).map_err(de::Error::custom)
    }
}

/// One entry of a compound rule's conditions
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The variant must hold exactly this value
    Is(VariantValue),
    /// The variant must hold one of these values
    AnyOf(Vec<VariantValue>),
}

impl Condition {
    pub fn accepts(&self, selected: Option<&VariantValue>) -> bool {
        let Some(selected) = selected else {
            return false;
        };
        match self {
            Condition::Is(value) => value == selected,
            Condition::AnyOf(values) => values.contains(selected),
        }
    }

    fn from_json(field: &str, value: &Value) -> ShapeResult<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| VariantValue::from_json(field, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Condition::AnyOf),
            scalar => VariantValue::from_json(field, scalar).map(Condition::Is),
        }
    }

    /// Values this condition can be satisfied by.
    pub fn values(&self) -> &[VariantValue] {
        match self {
            Condition::Is(value) => std::slice::from_ref(value),
            Condition::AnyOf(values) => values,
        }
    }
}

/// Classes applied when a combination of variant values is selected
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundVariant {
    pub conditions: OrderedMap<Condition>,
    pub classes: SlotClasses,
}

impl CompoundVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, variant: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.conditions.insert(variant, Condition::Is(value.into()));
        self
    }

    pub fn when_any<V, I>(mut self, variant: impl Into<String>, values: I) -> Self
    where
        V: Into<VariantValue>,
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.conditions.insert(variant, Condition::AnyOf(values));
        self
    }

    pub fn class(mut self, classes: impl Into<ClassValue>) -> Self {
        self.classes.append(SlotClasses::all(classes));
        self
    }

    pub fn slot_class(mut self, slot: impl Into<String>, classes: impl Into<ClassValue>) -> Self {
        self.classes = self.classes.and_slot(slot, classes);
        self
    }
}

impl<'de> Deserialize<'de> for CompoundVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let mut compound = CompoundVariant::new();

        for (key, value) in map {
            match key.as_str() {
                "class" | "className" => {
                    let classes = SlotClasses::from_json(value).map_err(de::Error::custom)?;
                    compound.classes.append(classes);
                }
                _ => {
                    let condition = Condition::from_json(&key, &value).map_err(de::Error::custom)?;
                    compound.conditions.insert(key, condition);
                }
            }
        }

        Ok(compound)
    }
}

/// Classes applied to a subset of slots, optionally gated on variant values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSlot {
    pub slots: Vec<String>,
    pub conditions: OrderedMap<Condition>,
    pub classes: ClassValue,
}

impl CompoundSlot {
    pub fn new<S, I>(slots: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn when(mut self, variant: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.conditions.insert(variant, Condition::Is(value.into()));
        self
    }

    pub fn when_any<V, I>(mut self, variant: impl Into<String>, values: I) -> Self
    where
        V: Into<VariantValue>,
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.conditions.insert(variant, Condition::AnyOf(values));
        self
    }

    pub fn class(mut self, classes: impl Into<ClassValue>) -> Self {
        let current = std::mem::take(&mut self.classes);
        self.classes = current.concat(classes.into());
        self
    }
}

impl<'de> Deserialize<'de> for CompoundSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let mut compound = CompoundSlot::default();
        let mut saw_slots = false;

        for (key, value) in map {
            match key.as_str() {
                "slots" => {
                    compound.slots = serde_json::from_value(value).map_err(de::Error::custom)?;
                    saw_slots = true;
                }
                "class" | "className" => {
                    let classes: ClassValue = serde_json::from_value(value).map_err(de::Error::custom)?;
                    let current = std::mem::take(&mut compound.classes);
                    compound.classes = current.concat(classes);
                }
                _ => {
                    let condition = Condition::from_json(&key, &value).map_err(de::Error::custom)?;
                    compound.conditions.insert(key, condition);
                }
            }
        }

        if !saw_slots {
            return Err(de::Error::custom(ShapeError::missing("compoundSlots[].slots")));
        }
        Ok(compound)
    }
}

/// Parent reference of a config
#[derive(Debug, Clone)]
pub enum Extend {
    /// An inline or shared parent config
    Config(Arc<StyleConfig>),
    /// A parent looked up by name when the config is flattened
    Named(String),
}

impl<'de> Deserialize<'de> for Extend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(name) => Ok(Extend::Named(name)),
            value @ Value::Object(_) => {
                let parent: StyleConfig = serde_json::from_value(value).map_err(de::Error::custom)?;
                Ok(Extend::Config(Arc::new(parent)))
            }
            other => Err(de::Error::custom(ShapeError::unexpected(
                "extend",
                "a config name or object",
                json_kind(&other),
            ))),
        }
    }
}

/// The authoring unit of the variant engine
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Display name, used in error messages and logs
    #[serde(skip)]
    pub name: Option<String>,

    #[serde(default)]
    pub base: ClassValue,

    #[serde(default)]
    pub slots: Option<OrderedMap<ClassValue>>,

    #[serde(default)]
    pub variants: OrderedMap<OrderedMap<SlotClasses>>,

    #[serde(default)]
    pub compound_variants: Vec<CompoundVariant>,

    #[serde(default)]
    pub compound_slots: Vec<CompoundSlot>,

    #[serde(default)]
    pub default_variants: OrderedMap<VariantValue>,

    #[serde(default)]
    pub extend: Option<Extend>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn base(mut self, classes: impl Into<ClassValue>) -> Self {
        let current = std::mem::take(&mut self.base);
        self.base = current.concat(classes.into());
        self
    }

    pub fn slot(mut self, slot: impl Into<String>, classes: impl Into<ClassValue>) -> Self {
        self.slots
            .get_or_insert_with(OrderedMap::new)
            .insert(slot, classes.into());
        self
    }

    /// Declare a variant with its values in order.
    pub fn variant<K, V, I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        K: Into<String>,
        V: Into<SlotClasses>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values = values.into_iter().map(|(k, v)| (k, v.into())).collect();
        self.variants.insert(name, values);
        self
    }

    pub fn compound_variant(mut self, compound: CompoundVariant) -> Self {
        self.compound_variants.push(compound);
        self
    }

    pub fn compound_slot(mut self, compound: CompoundSlot) -> Self {
        self.compound_slots.push(compound);
        self
    }

    pub fn default_variant(mut self, variant: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.default_variants.insert(variant, value.into());
        self
    }

    pub fn extend(mut self, parent: impl Into<Extend>) -> Self {
        self.extend = Some(parent.into());
        self
    }

    /// Extend a config registered under `name`.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extend = Some(Extend::Named(name.into()));
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

impl From<Arc<StyleConfig>> for Extend {
    fn from(config: Arc<StyleConfig>) -> Self {
        Extend::Config(config)
    }
}

impl From<StyleConfig> for Extend {
    fn from(config: StyleConfig) -> Self {
        Extend::Config(Arc::new(config))
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
