/// Inheritance tests - extend chains layered through the public factory
use crate::*;
use std::sync::Arc;

#[cfg(test)]
mod inheritance_tests {
    use super::*;

    fn no_merge() -> Tv {
        create_tv(TvOptions {
            tw_merge: false,
            ..TvOptions::default()
        })
    }

    #[test]
    fn test_base_is_concatenated_not_replaced() {
        let parent = Arc::new(StyleConfig::new().base("a"));
        let child = no_merge().tv(StyleConfig::new().base("b").extend(parent)).unwrap();
        assert_eq!(child.call(&Props::new()), "a b");
    }

    #[test]
    fn test_variant_value_classes_keep_parent_first() {
        let parent = Arc::new(StyleConfig::new().variant("size", [("sm", "h-8")]));
        let child = no_merge()
            .tv(StyleConfig::new().variant("size", [("sm", "py-1")]).extend(parent))
            .unwrap();
        assert_eq!(child.call(&Props::new().variant("size", "sm")), "h-8 py-1");
    }

    #[test]
    fn test_three_level_chain() {
        let root = Arc::new(
            StyleConfig::new()
                .base("root")
                .variant("size", [("sm", "h-8"), ("lg", "h-12")])
                .default_variant("size", "sm"),
        );
        let middle = Arc::new(StyleConfig::new().base("middle").extend(root));
        let leaf = no_merge()
            .tv(StyleConfig::new().base("leaf").default_variant("size", "lg").extend(middle))
            .unwrap();

        assert_eq!(leaf.call(&Props::new()), "root middle leaf h-12");
        assert_eq!(leaf.variant_keys(), ["size"]);
        assert_eq!(leaf.default_variants().get("size"), Some(&VariantValue::from("lg")));
    }

    #[test]
    fn test_child_slots_are_added_to_parent_slots() {
        let parent = Arc::new(StyleConfig::new().slot("header", "p-4"));
        let child = no_merge()
            .tv(StyleConfig::new().slot("footer", "pt-2").slot("header", "border-b").extend(parent))
            .unwrap();

        assert_eq!(child.slot_keys(), vec!["base", "header", "footer"]);
        let slots = child.slots(&Props::new());
        assert_eq!(slots.get("header").as_deref(), Some("p-4 border-b"));
    }

    #[test]
    fn test_parent_compound_rules_run_first() {
        let parent = Arc::new(
            StyleConfig::new()
                .variant("size", [("lg", "")])
                .compound_variant(CompoundVariant::new().when("size", "lg").class("text-lg")),
        );
        let child = tv(StyleConfig::new()
            .compound_variant(CompoundVariant::new().when("size", "lg").class("text-xl"))
            .extend(parent))
        .unwrap();

        assert_eq!(child.call(&Props::new().variant("size", "lg")), "text-xl");
    }

    #[test]
    fn test_shared_parent_is_flattened_once() {
        let factory = Tv::default();
        let parent = Arc::new(StyleConfig::new().base("rounded"));

        factory.tv(StyleConfig::new().base("p-2").extend(Arc::clone(&parent))).unwrap();
        factory.tv(StyleConfig::new().base("p-4").extend(Arc::clone(&parent))).unwrap();

        // parent + two children
        assert_eq!(factory.cache().len(), 3);
        assert!(factory.cache().get(&parent).is_some());
    }

    #[test]
    fn test_json_inline_extend() {
        let config = StyleConfig::from_json(
            r#"{ "base": "b", "extend": { "base": "a", "defaultVariants": { "tone": "muted" },
                 "variants": { "tone": { "muted": "opacity-50" } } } }"#,
        )
        .unwrap();
        let style = no_merge().tv(config).unwrap();
        assert_eq!(style.call(&Props::new()), "a b opacity-50");
    }
}
