/// Determinism tests - repeated and concurrent resolution produce identical output
use std::sync::Arc;
use std::thread;
use variantkit::{tv, CompoundSlot, CompoundVariant, Props, StyleConfig, StyleFn};

fn style() -> StyleFn {
    tv(StyleConfig::new()
        .base("flex gap-2")
        .slot("label", "text-sm")
        .slot("icon", "size-4")
        .variant("size", [("sm", "h-8"), ("md", "h-10"), ("lg", "h-12")])
        .variant("tone", [("neutral", "bg-gray-100"), ("danger", "bg-red-100")])
        .compound_variant(CompoundVariant::new().when("size", "lg").when("tone", "danger").class("font-bold"))
        .compound_slot(CompoundSlot::new(["icon"]).when_any("size", ["md", "lg"]).class("size-5"))
        .default_variant("size", "md"))
    .unwrap()
}

#[test]
fn test_repeated_calls_are_identical() {
    let style = style();
    let props = Props::new().variant("size", "lg").variant("tone", "danger").class("px-3");

    let first = style.resolve(&props);
    for _ in 0..10 {
        assert_eq!(style.resolve(&props), first);
    }
}

#[test]
fn test_rebuilt_functions_agree() {
    let props = Props::new().variant("tone", "neutral");
    let results: Vec<_> = (0..5).map(|_| style().slots(&props).to_map()).collect();
    for (i, result) in results.iter().enumerate().skip(1) {
        assert_eq!(&results[0], result, "Build {} differs from build 0", i);
    }
}

#[test]
fn test_concurrent_resolution() {
    let style = Arc::new(style());
    let expected = style.call(&Props::new().variant("size", "sm"));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let style = Arc::clone(&style);
            thread::spawn(move || style.call(&Props::new().variant("size", "sm")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
