//! Reference checks
//!
//! Unknown slot names and defaults are tolerated by resolution. These checks
//! surface them: as errors in strict mode, as warnings otherwise.

use crate::config::{SlotClasses, VariantValue};
use crate::error::{ConfigError, ConfigResult, PropsError, PropsResult};
use crate::flatten::FlattenedStyleConfig;
use crate::props::{PropValue, Props};
use tracing::warn;

/// Every dangling slot or default reference of a flattened config, in
/// declaration order.
pub fn config_issues(flat: &FlattenedStyleConfig) -> Vec<ConfigError> {
    let mut issues = Vec::new();

    for (variant, values) in flat.variants.iter() {
        for (value, classes) in values.iter() {
            unknown_slots(flat, classes, &format!("variants.{variant}.{value}"), &mut issues);
        }
    }

    for (index, compound) in flat.compound_variants.iter().enumerate() {
        unknown_slots(flat, &compound.classes, &format!("compoundVariants[{index}]"), &mut issues);
    }

    for (index, compound) in flat.compound_slots.iter().enumerate() {
        for slot in compound.slots.iter().filter(|slot| !flat.has_slot(slot)) {
            issues.push(ConfigError::UnknownSlot {
                slot: slot.clone(),
                location: format!("compoundSlots[{index}]"),
            });
        }
    }

    for (variant, value) in flat.default_variants.iter() {
        if !accepts_value(flat, variant, value) {
            issues.push(ConfigError::UnknownDefault {
                variant: variant.to_string(),
                value: value.to_string(),
            });
        }
    }

    issues
}

fn unknown_slots(
    flat: &FlattenedStyleConfig,
    classes: &SlotClasses,
    location: &str,
    issues: &mut Vec<ConfigError>,
) {
    for slot in classes.slot_names().filter(|slot| !flat.has_slot(slot)) {
        issues.push(ConfigError::UnknownSlot {
            slot: slot.to_string(),
            location: location.to_string(),
        });
    }
}

/// Fail on the first issue in strict mode, otherwise log each one.
pub fn validate_config(flat: &FlattenedStyleConfig, strict: bool) -> ConfigResult<()> {
    let issues = config_issues(flat);
    if strict {
        return match issues.into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        };
    }

    for issue in issues {
        warn!("{issue}; ignored");
    }
    Ok(())
}

/// A boolean variant declaring only `"true"` still accepts `false`.
fn accepts_value(flat: &FlattenedStyleConfig, variant: &str, value: &VariantValue) -> bool {
    flat.has_value(variant, value) || (*value == "false" && flat.has_value(variant, &"true".into()))
}

/// Reject props naming undeclared variants, values or slots.
pub fn check_props(flat: &FlattenedStyleConfig, props: &Props) -> PropsResult<()> {
    for (name, prop) in props.variants() {
        if !flat.variants.contains_key(name) {
            return Err(PropsError::UnknownVariant { name: name.to_string() });
        }

        let values: Vec<&VariantValue> = match prop {
            PropValue::Undefined => Vec::new(),
            PropValue::Value(value) => vec![value],
            PropValue::Responsive(values) => values.values().collect(),
        };
        if let Some(value) = values.into_iter().find(|v| !accepts_value(flat, name, v)) {
            return Err(PropsError::UnknownValue {
                variant: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    if let Some(slot) = props.slot_classes().keys().find(|slot| !flat.has_slot(slot)) {
        return Err(PropsError::UnknownSlot { slot: slot.to_string() });
    }

    Ok(())
}
