//! Splitting a utility class into modifiers, flags and the bare utility

/// A utility class broken into its parts, e.g. `md:hover:!-mt-2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Modifiers in source order (`md`, `hover`)
    pub modifiers: Vec<&'a str>,
    pub important: bool,
    /// Utility without modifiers, `!`, `-` or the configured prefix (`mt-2`)
    pub utility: &'a str,
}

impl ParsedClass<'_> {
    /// Key shared by all classes applying under the same modifiers.
    ///
    /// Modifier order is normalized, except that arbitrary variants like
    /// `[&>*]` stay where they are since their position changes the selector.
    pub fn modifier_key(&self) -> String {
        let mut key = String::new();
        let mut run: Vec<&str> = Vec::new();

        for modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                for m in run.drain(..) {
                    key.push_str(m);
                    key.push(':');
                }
                key.push_str(modifier);
                key.push(':');
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        for m in run {
            key.push_str(m);
            key.push(':');
        }

        if self.important {
            key.push('!');
        }
        key
    }
}

/// Parse a single class token.
///
/// Returns `None` for empty tokens and, when `prefix` is set, for classes
/// that do not carry it; such classes are not utilities this merger knows.
pub fn parse_class<'a>(class: &'a str, separator: &str, prefix: Option<&str>) -> Option<ParsedClass<'a>> {
    if class.is_empty() || separator.is_empty() {
        return None;
    }

    let mut modifiers = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    let bytes = class.as_bytes();
    let sep = separator.as_bytes();
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth -= 1,
            _ => {
                if depth == 0 && bytes[idx..].starts_with(sep) {
                    modifiers.push(&class[start..idx]);
                    idx += sep.len();
                    start = idx;
                    continue;
                }
            }
        }
        idx += 1;
    }

    let mut utility = &class[start..];
    let mut important = false;

    if let Some(rest) = utility.strip_prefix('!') {
        utility = rest;
        important = true;
    } else if let Some(rest) = utility.strip_suffix('!') {
        utility = rest;
        important = true;
    }

    // `-mt-2` conflicts with `mt-2`
    if let Some(rest) = utility.strip_prefix('-') {
        utility = rest;
    }

    if let Some(prefix) = prefix {
        utility = utility.strip_prefix(prefix)?;
    }

    if utility.is_empty() {
        return None;
    }

    Some(ParsedClass {
        modifiers,
        important,
        utility,
    })
}
