use serde::{Deserialize, Deserializer, Serialize, Serializer};
use variantkit_merge::MergeConfig;

/// Options of a style function factory, the `createTV` config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvOptions {
    /// Collapse conflicting utility classes; when off, only exact duplicates are removed
    #[serde(default = "default_tw_merge")]
    pub tw_merge: bool,

    #[serde(default)]
    pub tw_merge_config: MergeConfig,

    /// Reject unknown slots and defaults at construction, and unknown props in `try_*` calls
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub responsive_variants: ResponsiveVariants,
}

fn default_tw_merge() -> bool {
    true
}

impl Default for TvOptions {
    fn default() -> Self {
        Self {
            tw_merge: default_tw_merge(),
            tw_merge_config: MergeConfig::default(),
            strict: false,
            responsive_variants: ResponsiveVariants::default(),
        }
    }
}

/// Which breakpoints of a responsive prop value produce prefixed classes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResponsiveVariants {
    #[default]
    Disabled,
    All,
    Breakpoints(Vec<String>),
}

impl ResponsiveVariants {
    pub fn allows(&self, breakpoint: &str) -> bool {
        match self {
            ResponsiveVariants::Disabled => false,
            ResponsiveVariants::All => true,
            ResponsiveVariants::Breakpoints(list) => list.iter().any(|b| b == breakpoint),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, ResponsiveVariants::Disabled)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawResponsive {
    Flag(bool),
    List(Vec<String>),
}

impl<'de> Deserialize<'de> for ResponsiveVariants {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawResponsive::deserialize(deserializer)? {
            RawResponsive::Flag(false) => ResponsiveVariants::Disabled,
            RawResponsive::Flag(true) => ResponsiveVariants::All,
            RawResponsive::List(list) => ResponsiveVariants::Breakpoints(list),
        })
    }
}

impl Serialize for ResponsiveVariants {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponsiveVariants::Disabled => serializer.serialize_bool(false),
            ResponsiveVariants::All => serializer.serialize_bool(true),
            ResponsiveVariants::Breakpoints(list) => list.serialize(serializer),
        }
    }
}
