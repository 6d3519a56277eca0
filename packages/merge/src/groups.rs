//! Conflict group table
//!
//! Maps a bare utility (`px-4`, `text-lg`) to the group of utilities that set
//! the same property. The built-in table is intentionally compact: it covers
//! the utilities component libraries reach for, and anything else passes
//! through the merger untouched. Projects add their own groups through
//! [`MergeConfig`](crate::MergeConfig).

use crate::config::MergeConfig;
use std::collections::HashMap;
use tracing::debug;

/// How the part after `prefix-` is validated
#[derive(Debug, Clone, Copy)]
enum ValueKind {
    /// Anything non-empty
    Any,
    /// Nothing, a number, or an arbitrary length (`border`, `border-2`)
    Width,
    /// Font size scale or an arbitrary length
    FontSize,
    /// Radius scale; the bare prefix is allowed
    Radius,
    /// Shadow scale; the bare prefix is allowed
    ShadowSize,
    /// Font weight keywords
    Weight,
    /// Bare prefix or any value (`grow`, `grow-0`)
    OptionalAny,
}

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Exact(&'static [&'static str]),
    Prefix(&'static str, ValueKind),
}

struct Rule {
    group: &'static str,
    matcher: Matcher,
}

const fn exact(group: &'static str, classes: &'static [&'static str]) -> Rule {
    Rule {
        group,
        matcher: Matcher::Exact(classes),
    }
}

const fn prefix(group: &'static str, prefix: &'static str, kind: ValueKind) -> Rule {
    Rule {
        group,
        matcher: Matcher::Prefix(prefix, kind),
    }
}

use ValueKind::*;

static RULES: &[Rule] = &[
    // Layout
    exact(
        "display",
        &[
            "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden",
            "contents", "table", "table-row", "table-cell", "flow-root", "list-item",
        ],
    ),
    exact("position", &["static", "fixed", "absolute", "relative", "sticky"]),
    exact("visibility", &["visible", "invisible", "collapse"]),
    exact("sr", &["sr-only", "not-sr-only"]),
    prefix("z", "z", Any),
    prefix("inset", "inset", Any),
    prefix("inset-x", "inset-x", Any),
    prefix("inset-y", "inset-y", Any),
    prefix("top", "top", Any),
    prefix("right", "right", Any),
    prefix("bottom", "bottom", Any),
    prefix("left", "left", Any),
    prefix("start", "start", Any),
    prefix("end", "end", Any),
    prefix("overflow", "overflow", Any),
    prefix("overflow-x", "overflow-x", Any),
    prefix("overflow-y", "overflow-y", Any),
    prefix("aspect", "aspect", Any),
    // Flexbox & grid
    exact("flex-direction", &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"]),
    exact("flex-wrap", &["flex-wrap", "flex-wrap-reverse", "flex-nowrap"]),
    prefix("flex", "flex", Any),
    prefix("grow", "grow", OptionalAny),
    prefix("shrink", "shrink", OptionalAny),
    prefix("basis", "basis", Any),
    prefix("order", "order", Any),
    prefix("grid-cols", "grid-cols", Any),
    prefix("grid-rows", "grid-rows", Any),
    prefix("col-span", "col-span", Any),
    prefix("row-span", "row-span", Any),
    prefix("items", "items", Any),
    prefix("justify", "justify", Any),
    prefix("self", "self", Any),
    prefix("place-items", "place-items", Any),
    prefix("gap", "gap", Any),
    prefix("gap-x", "gap-x", Any),
    prefix("gap-y", "gap-y", Any),
    // Spacing
    prefix("p", "p", Any),
    prefix("px", "px", Any),
    prefix("py", "py", Any),
    prefix("pt", "pt", Any),
    prefix("pr", "pr", Any),
    prefix("pb", "pb", Any),
    prefix("pl", "pl", Any),
    prefix("ps", "ps", Any),
    prefix("pe", "pe", Any),
    prefix("m", "m", Any),
    prefix("mx", "mx", Any),
    prefix("my", "my", Any),
    prefix("mt", "mt", Any),
    prefix("mr", "mr", Any),
    prefix("mb", "mb", Any),
    prefix("ml", "ml", Any),
    prefix("ms", "ms", Any),
    prefix("me", "me", Any),
    prefix("space-x", "space-x", Any),
    prefix("space-y", "space-y", Any),
    // Sizing
    prefix("w", "w", Any),
    prefix("h", "h", Any),
    prefix("min-w", "min-w", Any),
    prefix("min-h", "min-h", Any),
    prefix("max-w", "max-w", Any),
    prefix("max-h", "max-h", Any),
    prefix("size", "size", Any),
    // Typography
    exact("text-alignment", &["text-left", "text-center", "text-right", "text-justify", "text-start", "text-end"]),
    exact("text-overflow", &["truncate", "text-ellipsis", "text-clip"]),
    exact("text-wrap", &["text-wrap", "text-nowrap", "text-balance", "text-pretty"]),
    prefix("font-size", "text", FontSize),
    prefix("text-color", "text", Any),
    prefix("font-weight", "font", Weight),
    prefix("font-family", "font", Any),
    exact("font-style", &["italic", "not-italic"]),
    exact("text-transform", &["uppercase", "lowercase", "capitalize", "normal-case"]),
    exact("text-decoration", &["underline", "overline", "line-through", "no-underline"]),
    prefix("leading", "leading", Any),
    prefix("tracking", "tracking", Any),
    prefix("whitespace", "whitespace", Any),
    prefix("line-clamp", "line-clamp", Any),
    // Backgrounds
    exact("bg-attachment", &["bg-fixed", "bg-local", "bg-scroll"]),
    exact("bg-repeat", &["bg-repeat", "bg-no-repeat", "bg-repeat-x", "bg-repeat-y", "bg-repeat-round", "bg-repeat-space"]),
    exact("bg-size", &["bg-auto", "bg-cover", "bg-contain"]),
    exact(
        "bg-position",
        &[
            "bg-bottom", "bg-center", "bg-left", "bg-left-bottom", "bg-left-top", "bg-right",
            "bg-right-bottom", "bg-right-top", "bg-top",
        ],
    ),
    exact("bg-image", &["bg-none"]),
    prefix("bg-image", "bg-gradient-to", Any),
    prefix("bg-color", "bg", Any),
    // Borders
    exact("border-style", &["border-solid", "border-dashed", "border-dotted", "border-double", "border-hidden", "border-none"]),
    prefix("border-w", "border", Width),
    prefix("border-w-x", "border-x", Width),
    prefix("border-w-y", "border-y", Width),
    prefix("border-w-t", "border-t", Width),
    prefix("border-w-r", "border-r", Width),
    prefix("border-w-b", "border-b", Width),
    prefix("border-w-l", "border-l", Width),
    prefix("border-color", "border", Any),
    prefix("border-color-x", "border-x", Any),
    prefix("border-color-y", "border-y", Any),
    prefix("border-color-t", "border-t", Any),
    prefix("border-color-r", "border-r", Any),
    prefix("border-color-b", "border-b", Any),
    prefix("border-color-l", "border-l", Any),
    prefix("rounded", "rounded", Radius),
    prefix("rounded-s", "rounded-s", Radius),
    prefix("rounded-e", "rounded-e", Radius),
    prefix("rounded-t", "rounded-t", Radius),
    prefix("rounded-r", "rounded-r", Radius),
    prefix("rounded-b", "rounded-b", Radius),
    prefix("rounded-l", "rounded-l", Radius),
    prefix("rounded-tl", "rounded-tl", Radius),
    prefix("rounded-tr", "rounded-tr", Radius),
    prefix("rounded-br", "rounded-br", Radius),
    prefix("rounded-bl", "rounded-bl", Radius),
    prefix("ring-w", "ring", Width),
    prefix("ring-offset-w", "ring-offset", Width),
    prefix("ring-offset-color", "ring-offset", Any),
    prefix("ring-color", "ring", Any),
    exact("outline-style", &["outline-none", "outline", "outline-dashed", "outline-dotted", "outline-double"]),
    // Effects
    prefix("shadow", "shadow", ShadowSize),
    prefix("shadow-color", "shadow", Any),
    prefix("opacity", "opacity", Any),
    // Interactivity & transitions
    prefix("cursor", "cursor", Any),
    prefix("pointer-events", "pointer-events", Any),
    prefix("select", "select", Any),
    prefix("transition", "transition", OptionalAny),
    prefix("duration", "duration", Any),
    prefix("ease", "ease", Any),
    prefix("delay", "delay", Any),
    prefix("animate", "animate", Any),
    // SVG
    prefix("fill", "fill", Any),
    prefix("stroke-w", "stroke", Width),
    prefix("stroke", "stroke", Any),
];

static CONFLICTS: &[(&str, &[&str])] = &[
    ("p", &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("gap", &["gap-x", "gap-y"]),
    ("inset", &["inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end"]),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("font-size", &["leading"]),
    (
        "rounded",
        &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-tl",
            "rounded-tr", "rounded-br", "rounded-bl",
        ],
    ),
    ("rounded-s", &["rounded-tl", "rounded-bl"]),
    ("rounded-e", &["rounded-tr", "rounded-br"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    ("border-w", &["border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l"]),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-color-x", "border-color-y", "border-color-t", "border-color-r", "border-color-b",
            "border-color-l",
        ],
    ),
    ("border-color-x", &["border-color-r", "border-color-l"]),
    ("border-color-y", &["border-color-t", "border-color-b"]),
];

const SIZE_SCALE: &[&str] = &["xs", "sm", "md", "lg", "xl"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// `xs`, `sm`, ..., `xl`, `2xl`, `9xl`
fn is_tshirt(value: &str) -> bool {
    let scale = value.trim_start_matches(|c: char| c.is_ascii_digit());
    SIZE_SCALE.contains(&scale) && (scale == value || scale.ends_with("xl") || scale.ends_with("xs"))
}

fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    inner.starts_with("length:")
        || inner.starts_with("calc(")
        || inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

impl ValueKind {
    fn accepts(self, value: &str) -> bool {
        match self {
            Any => !value.is_empty(),
            OptionalAny => true,
            Width => value.is_empty() || is_number(value) || is_arbitrary_length(value),
            FontSize => value == "base" || is_tshirt(value) || is_arbitrary_length(value),
            Radius => {
                value.is_empty()
                    || matches!(value, "none" | "full")
                    || is_tshirt(value)
                    || is_arbitrary_length(value)
            }
            ShadowSize => {
                value.is_empty() || matches!(value, "none" | "inner") || is_tshirt(value) || is_arbitrary_length(value)
            }
            Weight => FONT_WEIGHTS.contains(&value),
        }
    }
}

impl Matcher {
    /// Length of the matched prefix, used to prefer the most specific rule.
    fn matches(&self, utility: &str) -> Option<usize> {
        match self {
            Matcher::Exact(classes) => classes.contains(&utility).then_some(usize::MAX),
            Matcher::Prefix(prefix, kind) => {
                let rest = utility.strip_prefix(prefix)?;
                let value = if rest.is_empty() {
                    rest
                } else {
                    rest.strip_prefix('-')?
                };
                kind.accepts(value).then_some(prefix.len())
            }
        }
    }
}

/// A project-defined group entry: exact class or `prefix-*` pattern
#[derive(Debug, Clone)]
enum CustomPattern {
    Exact(String),
    Prefix(String),
}

impl CustomPattern {
    fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix('*') {
            Some(prefix) => CustomPattern::Prefix(prefix.to_string()),
            None => CustomPattern::Exact(pattern.to_string()),
        }
    }

    fn matches(&self, utility: &str) -> bool {
        match self {
            CustomPattern::Exact(class) => class == utility,
            CustomPattern::Prefix(prefix) => utility.starts_with(prefix.as_str()) && utility.len() > prefix.len(),
        }
    }
}

/// Group lookup combining project groups with the built-in table
#[derive(Debug, Clone, Default)]
pub struct ClassGroups {
    custom: Vec<(String, CustomPattern)>,
    custom_conflicts: HashMap<String, Vec<String>>,
}

impl ClassGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        let mut groups = Self::new();
        for (group, patterns) in config.class_groups.iter() {
            for pattern in patterns {
                groups
                    .custom
                    .push((group.to_string(), CustomPattern::parse(pattern)));
            }
        }
        for (group, conflicts) in config.conflicting_class_groups.iter() {
            groups
                .custom_conflicts
                .insert(group.to_string(), conflicts.clone());
        }
        debug!(
            custom_groups = config.class_groups.len(),
            custom_conflicts = config.conflicting_class_groups.len(),
            "Built class group table"
        );
        groups
    }

    /// Find the conflict group of a bare utility.
    pub fn lookup<'a>(&'a self, utility: &str) -> Option<&'a str> {
        if let Some((group, _)) = self.custom.iter().find(|(_, p)| p.matches(utility)) {
            return Some(group.as_str());
        }

        let mut best: Option<(usize, &'static str)> = None;
        for rule in RULES {
            if let Some(len) = rule.matcher.matches(utility) {
                if best.map_or(true, |(best_len, _)| len > best_len) {
                    best = Some((len, rule.group));
                }
            }
        }
        best.map(|(_, group)| group)
    }

    /// Groups that a class from `group` overrides when it comes later.
    pub fn conflicts<'a>(&'a self, group: &str) -> Vec<&'a str> {
        let mut out: Vec<&str> = CONFLICTS
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, c)| c.to_vec())
            .unwrap_or_default();
        if let Some(extra) = self.custom_conflicts.get(group) {
            out.extend(extra.iter().map(String::as_str));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(utility: &str) -> Option<String> {
        ClassGroups::new().lookup(utility).map(str::to_string)
    }

    #[test]
    fn test_spacing_groups() {
        assert_eq!(group("p-2").as_deref(), Some("p"));
        assert_eq!(group("px-4").as_deref(), Some("px"));
        assert_eq!(group("pt-[3px]").as_deref(), Some("pt"));
        assert_eq!(group("m-auto").as_deref(), Some("m"));
    }

    #[test]
    fn test_text_utilities_split_by_value() {
        assert_eq!(group("text-sm").as_deref(), Some("font-size"));
        assert_eq!(group("text-2xl").as_deref(), Some("font-size"));
        assert_eq!(group("text-[14px]").as_deref(), Some("font-size"));
        assert_eq!(group("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group("text-center").as_deref(), Some("text-alignment"));
    }

    #[test]
    fn test_border_width_vs_color() {
        assert_eq!(group("border").as_deref(), Some("border-w"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-x-2").as_deref(), Some("border-w-x"));
        assert_eq!(group("border-red-500").as_deref(), Some("border-color"));
        assert_eq!(group("border-dashed").as_deref(), Some("border-style"));
    }

    #[test]
    fn test_display_exact_beats_prefix() {
        assert_eq!(group("flex").as_deref(), Some("display"));
        assert_eq!(group("flex-col").as_deref(), Some("flex-direction"));
        assert_eq!(group("flex-1").as_deref(), Some("flex"));
        assert_eq!(group("inline-flex").as_deref(), Some("display"));
    }

    #[test]
    fn test_unknown_utility_has_no_group() {
        assert_eq!(group("my-custom-widget").as_deref(), Some("my"));
        assert_eq!(group("prose").as_deref(), None);
        assert_eq!(group("group").as_deref(), None);
    }

    #[test]
    fn test_custom_groups_take_precedence() {
        let config: MergeConfig = serde_json::from_str(
            r#"{"classGroups": {"font-size": ["text-huge"], "glow": ["shadow-glow-*"]}}"#,
        )
        .unwrap();
        let groups = ClassGroups::from_config(&config);
        assert_eq!(groups.lookup("text-huge"), Some("font-size"));
        assert_eq!(groups.lookup("shadow-glow-red"), Some("glow"));
        assert_eq!(groups.lookup("shadow-lg"), Some("shadow"));
    }

    #[test]
    fn test_conflicts_include_custom_entries() {
        let config: MergeConfig =
            serde_json::from_str(r#"{"conflictingClassGroups": {"glow": ["shadow"]}}"#).unwrap();
        let groups = ClassGroups::from_config(&config);
        assert_eq!(groups.conflicts("glow"), vec!["shadow"]);
        assert!(groups.conflicts("p").contains(&"px"));
    }
}
