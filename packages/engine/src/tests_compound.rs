/// Compound variant tests - AND across variants, OR within value lists
use crate::*;

#[cfg(test)]
mod compound_tests {
    use super::*;

    fn button() -> StyleFn {
        tv(StyleConfig::new()
            .variant("size", [("sm", "h-8"), ("lg", "h-12")])
            .variant("variant", [("default", "bg-primary"), ("destructive", "bg-destructive"), ("ghost", "")])
            .variant("disabled", [("true", "opacity-50")])
            .compound_variant(
                CompoundVariant::new()
                    .when("size", "lg")
                    .when("variant", "destructive")
                    .class("font-bold"),
            )
            .compound_variant(
                CompoundVariant::new()
                    .when_any("variant", ["destructive", "ghost"])
                    .when("disabled", true)
                    .class("cursor-not-allowed"),
            )
            .default_variant("size", "sm"))
        .unwrap()
    }

    #[test]
    fn test_requires_every_condition() {
        let style = button();
        assert!(!style.call(&Props::new().variant("size", "lg")).contains("font-bold"));
        assert!(!style
            .call(&Props::new().variant("variant", "destructive"))
            .contains("font-bold"));
        assert!(style
            .call(&Props::new().variant("size", "lg").variant("variant", "destructive"))
            .contains("font-bold"));
    }

    #[test]
    fn test_defaults_take_part_in_conditions() {
        let style = tv(StyleConfig::new()
            .variant("size", [("sm", ""), ("lg", "")])
            .compound_variant(CompoundVariant::new().when("size", "sm").class("text-xs"))
            .default_variant("size", "sm"))
        .unwrap();

        assert_eq!(style.call(&Props::new()), "text-xs");
        assert_eq!(style.call(&Props::new().variant("size", "lg")), "");
    }

    #[test]
    fn test_value_list_is_any_of() {
        let style = button();
        for variant in ["destructive", "ghost"] {
            let class = style.call(&Props::new().variant("variant", variant).variant("disabled", true));
            assert!(class.contains("cursor-not-allowed"), "{variant}: {class}");
        }
        let class = style.call(&Props::new().variant("variant", "default").variant("disabled", true));
        assert!(!class.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_compound_classes_follow_variant_classes() {
        let style = button();
        let class = style.call(&Props::new().variant("size", "lg").variant("variant", "destructive"));
        assert_eq!(class, "h-12 bg-destructive font-bold");
    }

    #[test]
    fn test_compound_per_slot_classes() {
        let style = tv(StyleConfig::new()
            .slot("icon", "size-4")
            .variant("size", [("lg", "")])
            .compound_variant(CompoundVariant::new().when("size", "lg").slot_class("icon", "size-6")))
        .unwrap();

        let slots = style.slots(&Props::new().variant("size", "lg"));
        assert_eq!(slots.get("icon").as_deref(), Some("size-6"));
        assert_eq!(slots.base(), "");
    }

    #[test]
    fn test_json_compound_conditions() {
        let style = tv(StyleConfig::from_json(
            r#"{
                "variants": { "color": { "primary": "", "secondary": "" }, "outline": { "true": "border" } },
                "compoundVariants": [
                    { "color": ["primary", "secondary"], "outline": true, "className": "border-2" }
                ]
            }"#,
        )
        .unwrap())
        .unwrap();

        let props = Props::from_json(r#"{ "color": "secondary", "outline": true }"#).unwrap();
        assert_eq!(style.call(&props), "border-2");
    }
}
