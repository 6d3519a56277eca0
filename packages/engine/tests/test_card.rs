/// Card scenario - slotted config resolved from JSON
use variantkit::{tv, Props, StyleConfig, StyleFn};

fn card() -> StyleFn {
    let config = StyleConfig::from_json(
        r#"{
            "slots": { "base": "rounded", "title": "font-bold", "header": "p-4", "footer": "p-4" },
            "variants": {
                "variant": {
                    "default": {},
                    "destructive": { "base": "border-red", "title": "text-red" }
                }
            },
            "compoundSlots": [
                { "slots": ["header"], "variant": "destructive", "class": "bg-red-50" }
            ]
        }"#,
    )
    .expect("card config parses");
    tv(config).expect("card config is valid")
}

#[test]
fn test_destructive_title_and_base() {
    let card = card();
    let slots = card.slots(&Props::new().variant("variant", "destructive"));

    let title = slots.get("title").unwrap();
    assert!(title.split(' ').any(|t| t == "font-bold"));
    assert!(title.split(' ').any(|t| t == "text-red"));

    let base = slots.base();
    assert!(base.split(' ').any(|t| t == "rounded"));
    assert!(base.split(' ').any(|t| t == "border-red"));
}

#[test]
fn test_compound_slot_never_reaches_footer() {
    let card = card();
    for variant in ["default", "destructive"] {
        let slots = card.slots(&Props::new().variant("variant", variant));
        assert!(!slots.get("footer").unwrap().contains("bg-red-50"));
    }
    let slots = card.slots(&Props::new().variant("variant", "destructive"));
    assert_eq!(slots.get("header").as_deref(), Some("p-4 bg-red-50"));
}

#[test]
fn test_every_declared_slot_is_callable() {
    let card = card();
    assert!(card.has_slots());
    assert_eq!(card.slot_keys(), vec!["base", "title", "header", "footer"]);
    assert_eq!(card.variant_keys(), ["variant"]);
}
