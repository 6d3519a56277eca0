//! Class value representation
//!
//! A `ClassValue` is the recursive shape every class slot in a style config
//! accepts: a whitespace-separated string, a list of nested values, a map of
//! class strings to conditions, or nothing at all.

use crate::visitor::{walk_class_value, Visitor};
use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor as DeVisitor};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassValue {
    /// null, undefined, false, or an empty string
    #[default]
    Empty,

    /// One or more whitespace-separated class tokens
    Token(String),

    /// Nested values, visited left to right
    Seq(Vec<ClassValue>),

    /// Keys contribute their classes only when the paired flag is set
    Conditional(Vec<(ClassValue, bool)>),
}

impl ClassValue {
    /// Build a conditional value from `(classes, enabled)` pairs.
    pub fn conditional<K, I>(entries: I) -> Self
    where
        K: Into<ClassValue>,
        I: IntoIterator<Item = (K, bool)>,
    {
        ClassValue::Conditional(entries.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }

    /// Concatenate two values, `self` first.
    pub fn concat(self, other: ClassValue) -> ClassValue {
        match (self, other) {
            (ClassValue::Empty, other) => other,
            (this, ClassValue::Empty) => this,
            (ClassValue::Seq(mut items), other) => {
                items.push(other);
                ClassValue::Seq(items)
            }
            (this, other) => ClassValue::Seq(vec![this, other]),
        }
    }

    /// Whether the value contributes no tokens at all.
    pub fn is_empty(&self) -> bool {
        let mut probe = Probe { found: false };
        probe.visit_class_value(self);
        !probe.found
    }

    /// Flatten into an ordered list of class tokens.
    pub fn tokens(&self) -> Vec<String> {
        normalize(self)
    }

    /// Append this value's tokens to `out`.
    pub fn collect_into(&self, out: &mut Vec<String>) {
        let mut normalizer = Normalizer { tokens: out };
        normalizer.visit_class_value(self);
    }
}

/// Flatten a class value into an ordered list of tokens.
///
/// Strings split on whitespace, sequences are visited left to right and
/// conditional keys are visited in declared order when their flag is set.
pub fn normalize(value: &ClassValue) -> Vec<String> {
    let mut tokens = Vec::new();
    value.collect_into(&mut tokens);
    tokens
}

struct Normalizer<'a> {
    tokens: &'a mut Vec<String>,
}

impl Visitor for Normalizer<'_> {
    fn visit_token(&mut self, token: &str) {
        self.tokens.extend(token.split_whitespace().map(str::to_string));
    }
}

struct Probe {
    found: bool,
}

impl Visitor for Probe {
    fn visit_class_value(&mut self, value: &ClassValue) {
        if !self.found {
            walk_class_value(self, value);
        }
    }

    fn visit_token(&mut self, token: &str) {
        if token.split_whitespace().next().is_some() {
            self.found = true;
        }
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Token(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Token(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Token(s.clone())
    }
}

impl From<bool> for ClassValue {
    /// `true` carries no class name of its own, so both flags are empty.
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl From<i64> for ClassValue {
    fn from(n: i64) -> Self {
        if n == 0 {
            ClassValue::Empty
        } else {
            ClassValue::Token(n.to_string())
        }
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&normalize(self).join(" "))
    }
}

/// JSON truthiness for the values of a conditional class map.
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TruthyVisitor)
    }
}

struct TruthyVisitor;

impl<'de> DeVisitor<'de> for TruthyVisitor {
    type Value = Truthy;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a condition")
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Truthy, E> {
        Ok(Truthy(v))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Truthy, E> {
        Ok(Truthy(v != 0))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Truthy, E> {
        Ok(Truthy(v != 0))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Truthy, E> {
        Ok(Truthy(v != 0.0 && !v.is_nan()))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Truthy, E> {
        Ok(Truthy(!v.is_empty()))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Truthy, E> {
        Ok(Truthy(false))
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Truthy, E> {
        Ok(Truthy(false))
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Truthy, D::Error> {
        Truthy::deserialize(d)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Truthy, A::Error> {
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(Truthy(true))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Truthy, A::Error> {
        while map
            .next_entry::<serde::de::IgnoredAny, serde::de::IgnoredAny>()?
            .is_some()
        {}
        Ok(Truthy(true))
    }
}

struct ClassValueVisitor;

impl<'de> DeVisitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a class string, list, conditional map, or null")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ClassValue, E> {
        if v.trim().is_empty() {
            Ok(ClassValue::Empty)
        } else {
            Ok(ClassValue::Token(v.to_string()))
        }
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<ClassValue, E> {
        if v.trim().is_empty() {
            Ok(ClassValue::Empty)
        } else {
            Ok(ClassValue::Token(v))
        }
    }

    fn visit_bool<E: serde::de::Error>(self, _v: bool) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ClassValue, E> {
        Ok(ClassValue::from(v))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ClassValue, E> {
        if v == 0 {
            Ok(ClassValue::Empty)
        } else {
            Ok(ClassValue::Token(v.to_string()))
        }
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<ClassValue, E> {
        if v == 0.0 || v.is_nan() {
            Ok(ClassValue::Empty)
        } else {
            Ok(ClassValue::Token(v.to_string()))
        }
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<ClassValue, D::Error> {
        ClassValue::deserialize(d)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ClassValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<ClassValue>()? {
            items.push(item);
        }
        Ok(ClassValue::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ClassValue, A::Error> {
        let mut entries = Vec::new();
        while let Some((key, Truthy(on))) = map.next_entry::<String, Truthy>()? {
            entries.push((ClassValue::Token(key), on));
        }
        Ok(ClassValue::Conditional(entries))
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_splits_on_whitespace() {
        let value = ClassValue::from("  px-4   py-2\tfont-bold ");
        assert_eq!(value.tokens(), vec!["px-4", "py-2", "font-bold"]);
    }

    #[test]
    fn test_nested_sequence_keeps_order() {
        let value = ClassValue::Seq(vec![
            "a b".into(),
            ClassValue::Seq(vec!["c".into(), ClassValue::Empty, "d".into()]),
            "e".into(),
        ]);
        assert_eq!(value.tokens(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_conditional_in_declared_order() {
        let value = ClassValue::conditional([("z-10", true), ("hidden", false), ("a b", true)]);
        assert_eq!(value.tokens(), vec!["z-10", "a", "b"]);
    }

    #[test]
    fn test_falsy_values_contribute_nothing() {
        assert!(ClassValue::from(false).tokens().is_empty());
        assert!(ClassValue::from(None::<&str>).tokens().is_empty());
        assert!(ClassValue::from("   ").is_empty());
        assert!(ClassValue::from(0i64).is_empty());
        assert_eq!(ClassValue::from(3i64).tokens(), vec!["3"]);
    }

    #[test]
    fn test_concat_flattens_empty() {
        let joined = ClassValue::Empty.concat("a".into()).concat("b".into());
        assert_eq!(joined.tokens(), vec!["a", "b"]);
        assert_eq!(joined.to_string(), "a b");
    }

    #[test]
    fn test_deserialize_json_shapes() {
        let value: ClassValue = serde_json::from_str(
            r#"["rounded", null, false, {"shadow": true, "ring": 0, "border": "yes"}, [["p-2"]], 7]"#,
        )
        .unwrap();
        assert_eq!(value.tokens(), vec!["rounded", "shadow", "border", "p-2", "7"]);
    }
}
