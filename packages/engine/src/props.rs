//! Runtime props passed to a style function

use crate::config::{json_kind, VariantValue};
use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};
use variantkit_common::{ClassValue, OrderedMap, ShapeError, ShapeResult};

/// A runtime value supplied for a variant
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Explicitly undefined; the declared default applies
    Undefined,

    Value(VariantValue),

    /// Per-breakpoint values; `initial` is the unprefixed one
    Responsive(OrderedMap<VariantValue>),
}

/// Breakpoint key holding the unprefixed value of a responsive prop
pub const INITIAL_BREAKPOINT: &str = "initial";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    variants: OrderedMap<PropValue>,
    class: ClassValue,
    class_name: ClassValue,
    class_names: OrderedMap<ClassValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Select a variant value. Booleans become `"true"` / `"false"`.
    pub fn variant(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.variants.insert(name, PropValue::Value(value.into()));
        self
    }

    /// Mark a variant as explicitly undefined.
    pub fn unset(mut self, name: impl Into<String>) -> Self {
        self.variants.insert(name, PropValue::Undefined);
        self
    }

    /// Select per-breakpoint values for a variant.
    pub fn responsive<K, V, I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        K: Into<String>,
        V: Into<VariantValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values = values.into_iter().map(|(k, v)| (k, v.into())).collect();
        self.variants.insert(name, PropValue::Responsive(values));
        self
    }

    /// Override classes appended last to the root slot.
    pub fn class(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class = std::mem::take(&mut self.class).concat(classes.into());
        self
    }

    pub fn class_name(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class_name = std::mem::take(&mut self.class_name).concat(classes.into());
        self
    }

    /// Override classes appended last to one slot.
    pub fn slot_class(mut self, slot: impl Into<String>, classes: impl Into<ClassValue>) -> Self {
        let slot = slot.into();
        let entry = self.class_names.get_or_insert_with(&slot, ClassValue::default);
        *entry = std::mem::take(entry).concat(classes.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.variants.get(name)
    }

    pub fn variants(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.variants.iter()
    }

    pub fn class_value(&self) -> &ClassValue {
        &self.class
    }

    pub fn class_name_value(&self) -> &ClassValue {
        &self.class_name
    }

    pub fn slot_classes(&self) -> &OrderedMap<ClassValue> {
        &self.class_names
    }

    /// Variant selections of `self` with those of `other` laid on top.
    /// Class overrides are not carried over.
    pub fn overlay_variants(&self, other: &Props) -> Props {
        let mut variants = self.variants.clone();
        for (name, value) in other.variants.iter() {
            variants.insert(name, value.clone());
        }
        Props {
            variants,
            ..Props::default()
        }
    }

    fn from_json_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut props = Props::new();

        for (key, value) in map {
            match key.as_str() {
                "class" => props.class = serde_json::from_value(value)?,
                "className" => props.class_name = serde_json::from_value(value)?,
                "classNames" => props.class_names = serde_json::from_value(value)?,
                _ => {
                    let prop = prop_value_from_json(&key, value).map_err(de::Error::custom)?;
                    props.variants.insert(key, prop);
                }
            }
        }

        Ok(props)
    }
}

fn prop_value_from_json(name: &str, value: Value) -> ShapeResult<PropValue> {
    match value {
        Value::Null => Ok(PropValue::Undefined),
        Value::Object(map) => {
            let mut values = OrderedMap::new();
            for (breakpoint, value) in map {
                values.insert(breakpoint, VariantValue::from_json(name, &value)?);
            }
            Ok(PropValue::Responsive(values))
        }
        Value::Array(_) => Err(ShapeError::unexpected(name, "a variant value", json_kind(&value))),
        scalar => VariantValue::from_json(name, &scalar).map(PropValue::Value),
    }
}

impl<'de> Deserialize<'de> for Props {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Props::from_json_map(map).map_err(de::Error::custom)
    }
}
