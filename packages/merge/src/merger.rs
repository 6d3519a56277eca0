//! Utility class merger
//!
//! Walks the class list from the end, keeping a class only if no later class
//! already claimed its conflict group under the same modifiers. Classes that
//! belong to no known group are always kept, in their original order.

use crate::config::MergeConfig;
use crate::groups::ClassGroups;
use crate::parse::parse_class;
use crate::ConflictResolver;
use std::collections::HashSet;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TailwindMerger {
    groups: ClassGroups,
    separator: String,
    prefix: Option<String>,
}

impl TailwindMerger {
    pub fn new() -> Self {
        Self::with_config(&MergeConfig::default())
    }

    pub fn with_config(config: &MergeConfig) -> Self {
        Self {
            groups: ClassGroups::from_config(config),
            separator: config.separator.clone(),
            prefix: config.prefix.clone(),
        }
    }

    /// Merge a whitespace-separated class list.
    pub fn merge(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        let mut claimed: HashSet<String> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for class in tokens.iter().rev().copied() {
            let Some(parsed) = parse_class(class, &self.separator, self.prefix.as_deref()) else {
                kept.push(class);
                continue;
            };
            let Some(group) = self.groups.lookup(parsed.utility) else {
                kept.push(class);
                continue;
            };

            let modifier_key = parsed.modifier_key();
            let key = format!("{}{}", modifier_key, group);
            if claimed.contains(&key) {
                trace!(class = %class, group = %group, "Dropping overridden class");
                continue;
            }

            for conflict in self.groups.conflicts(group) {
                claimed.insert(format!("{}{}", modifier_key, conflict));
            }
            claimed.insert(key);
            kept.push(class);
        }

        kept.reverse();
        kept.join(" ")
    }
}

impl Default for TailwindMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConflictResolver for TailwindMerger {
    fn resolve(&self, classes: &str) -> String {
        self.merge(classes)
    }
}
