//! Render-path benchmarks: variant derivation, list render, markup.

use std::hint::black_box;

use cardwall_components::{CardList, CardVariants, Component, RenderContext};
use cardwall_core::{Item, Position};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn make_items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("Post {i}"), format!("Body text for post {i}")))
        .collect()
}

fn bench_variant_derivation(c: &mut Criterion) {
    c.bench_function("variants_derive", |b| {
        b.iter(|| {
            let v = CardVariants::derive(black_box(Position::of(0, 10)), black_box(true));
            black_box(v.class_list().attr())
        });
    });
}

fn bench_list_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_list_render");
    for n in [1usize, 10, 100] {
        let items = make_items(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            let ctx = RenderContext::with_width(800);
            b.iter(|| black_box(CardList::new(items).render(&ctx)));
        });
    }
    group.finish();
}

fn bench_markup(c: &mut Criterion) {
    let items = make_items(50);
    let ctx = RenderContext::with_width(800);
    let tree = CardList::new(&items).render(&ctx);
    c.bench_function("markup_50_cards", |b| {
        b.iter(|| black_box(tree.to_markup()));
    });
}

criterion_group!(
    benches,
    bench_variant_derivation,
    bench_list_render,
    bench_markup
);
criterion_main!(benches);
