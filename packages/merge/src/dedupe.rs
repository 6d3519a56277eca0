use crate::ConflictResolver;
use std::collections::HashSet;

/// Join classes, dropping exact duplicates but keeping each class at its last position.
pub fn dedupe_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = classes.into_iter().flat_map(str::split_whitespace).collect();
    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .filter(|t| seen.insert(**t))
        .copied()
        .collect();
    kept.reverse();
    kept.join(" ")
}

/// Resolver used when conflict resolution is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactDedupe;

impl ConflictResolver for ExactDedupe {
    fn resolve(&self, classes: &str) -> String {
        dedupe_classes([classes])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_last_occurrence() {
        assert_eq!(dedupe_classes(["a b a c"]), "b a c");
    }

    #[test]
    fn test_does_not_resolve_conflicts() {
        assert_eq!(ExactDedupe.resolve("p-2 p-4 p-2"), "p-4 p-2");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(dedupe_classes(["", "  "]), "");
    }
}
