/// Slot tests - slot isolation, per-slot overrides and call-level props
use crate::*;

#[cfg(test)]
mod slot_tests {
    use super::*;

    fn card() -> StyleFn {
        tv(StyleConfig::from_json(
            r#"{
                "slots": {
                    "base": "rounded border",
                    "header": "p-4",
                    "title": "font-bold",
                    "footer": "pt-2"
                },
                "variants": {
                    "variant": {
                        "destructive": { "base": "border-red-500", "title": "text-red-500" }
                    },
                    "compact": { "true": { "header": "p-2", "footer": "pt-1" } }
                },
                "compoundSlots": [
                    { "slots": ["header"], "class": "border-b" },
                    { "slots": ["title", "footer"], "compact": true, "class": "text-sm" }
                ]
            }"#,
        )
        .unwrap())
        .unwrap()
    }

    #[test]
    fn test_compound_slot_stays_in_named_slots() {
        let card = card();
        let slots = card.slots(&Props::new());
        assert_eq!(slots.get("header").as_deref(), Some("p-4 border-b"));
        assert_eq!(slots.get("footer").as_deref(), Some("pt-2"));
    }

    #[test]
    fn test_per_slot_variant_classes() {
        let card = card();
        let slots = card.slots(&Props::new().variant("variant", "destructive"));
        assert_eq!(slots.base(), "rounded border border-red-500");
        assert_eq!(slots.get("title").as_deref(), Some("font-bold text-red-500"));
        assert_eq!(slots.get("header").as_deref(), Some("p-4 border-b"));
    }

    #[test]
    fn test_boolean_variant_with_compound_slot() {
        let card = card();
        let slots = card.slots(&Props::new().variant("compact", true));
        assert_eq!(slots.get("header").as_deref(), Some("p-2 border-b"));
        assert_eq!(slots.get("footer").as_deref(), Some("pt-1 text-sm"));
        assert_eq!(slots.get("title").as_deref(), Some("font-bold text-sm"));
    }

    #[test]
    fn test_class_names_target_one_slot() {
        let props = Props::from_json(r#"{ "classNames": { "footer": "pt-8" }, "class": "shadow" }"#).unwrap();
        let card = card();
        let slots = card.slots(&props);

        assert_eq!(slots.get("footer").as_deref(), Some("pt-8"));
        assert_eq!(slots.base(), "rounded border shadow");
        assert_eq!(slots.get("title").as_deref(), Some("font-bold"));
    }

    #[test]
    fn test_slot_call_props() {
        let style = card();
        let slots = style.slots(&Props::new());
        let title = slots.slot("title", &Props::new().variant("variant", "destructive").class("italic"));
        assert_eq!(title.as_deref(), Some("font-bold text-red-500 italic"));
    }

    #[test]
    fn test_unknown_slot_override_is_ignored() {
        let props = Props::new().slot_class("sidebar", "w-64");
        let style = card();
        assert_eq!(style.slots(&props).to_map().len(), 4);
        assert!(matches!(style.try_slots(&props), Err(PropsError::UnknownSlot { .. })));
    }

    #[test]
    fn test_resolve_returns_every_slot() {
        let resolved = card().resolve(&Props::new());
        let Resolved::Slots(slots) = resolved else {
            panic!("expected slots");
        };
        assert_eq!(slots.keys().collect::<Vec<_>>(), vec!["base", "header", "title", "footer"]);
    }
}
