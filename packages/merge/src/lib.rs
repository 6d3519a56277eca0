//! # Class conflict resolution
//!
//! The variant engine hands its final class list to a [`ConflictResolver`].
//! The resolver is a pluggable boundary: [`TailwindMerger`] ships a compact
//! utility-class table, [`ExactDedupe`] only removes exact duplicates, and
//! applications can supply their own implementation.

pub mod config;
pub mod dedupe;
pub mod groups;
pub mod merger;
pub mod parse;

pub use config::MergeConfig;
pub use dedupe::{dedupe_classes, ExactDedupe};
pub use groups::ClassGroups;
pub use merger::TailwindMerger;
pub use parse::{parse_class, ParsedClass};

/// Collapse conflicting utility classes in a space-joined class list.
///
/// For every pair of classes in the same conflict group only the last one is
/// kept; classes outside any known group pass through in their original order.
pub trait ConflictResolver: Send + Sync + std::fmt::Debug {
    fn resolve(&self, classes: &str) -> String;
}
