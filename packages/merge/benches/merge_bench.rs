use criterion::{black_box, criterion_group, criterion_main, Criterion};
use variantkit_merge::{dedupe_classes, TailwindMerger};

fn merge_button_classes(c: &mut Criterion) {
    let merger = TailwindMerger::new();
    let classes = "inline-flex items-center justify-center rounded-md text-sm font-medium \
                   ring-offset-background transition-colors bg-primary text-primary-foreground \
                   hover:bg-primary/90 h-10 px-4 py-2 h-11 rounded-md px-8 bg-destructive";

    c.bench_function("merge_button_classes", |b| b.iter(|| merger.merge(black_box(classes))));
}

fn merge_with_modifiers(c: &mut Criterion) {
    let merger = TailwindMerger::new();
    let classes = "p-2 md:p-4 lg:hover:p-6 hover:lg:p-8 !p-1 md:p-3 focus-visible:ring-2 \
                   focus-visible:ring-ring focus-visible:ring-offset-2 disabled:opacity-50";

    c.bench_function("merge_with_modifiers", |b| b.iter(|| merger.merge(black_box(classes))));
}

fn dedupe_only(c: &mut Criterion) {
    let classes = "a b c d a b c d e f g a";
    c.bench_function("dedupe_only", |b| b.iter(|| dedupe_classes([black_box(classes)])));
}

criterion_group!(benches, merge_button_classes, merge_with_modifiers, dedupe_only);
criterion_main!(benches);
