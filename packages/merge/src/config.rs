use serde::{Deserialize, Serialize};
use variantkit_common::OrderedMap;

/// Merger configuration, the `twMergeConfig` block of the engine options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeConfig {
    /// Utility prefix such as `tw-`; classes without it pass through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Separator between modifiers and the utility
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Extra conflict groups: group name -> exact classes or `prefix-*` patterns
    #[serde(default)]
    pub class_groups: OrderedMap<Vec<String>>,

    /// Extra conflicts: group name -> groups it overrides
    #[serde(default)]
    pub conflicting_class_groups: OrderedMap<Vec<String>>,
}

fn default_separator() -> String {
    ":".to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: default_separator(),
            class_groups: OrderedMap::new(),
            conflicting_class_groups: OrderedMap::new(),
        }
    }
}
