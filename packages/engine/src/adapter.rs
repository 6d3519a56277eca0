//! Conflict resolver adapter

use std::sync::Arc;
use variantkit_merge::{ConflictResolver, ExactDedupe, TailwindMerger};

use crate::options::TvOptions;

/// Join tokens with single spaces and hand them to the resolver.
pub fn resolve_tokens(tokens: &[String], resolver: &dyn ConflictResolver) -> String {
    resolver.resolve(&tokens.join(" "))
}

/// The resolver implied by a set of options. With `twMerge` off, exact
/// duplicates are still dropped keeping the last occurrence.
pub fn default_resolver(options: &TvOptions) -> Arc<dyn ConflictResolver> {
    if options.tw_merge {
        Arc::new(TailwindMerger::with_config(&options.tw_merge_config))
    } else {
        Arc::new(ExactDedupe)
    }
}
