use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gazetteer_core::{distance::edit_distance, DefaultBackend, PlaceDb, PlaceRecord, PlaceSearch};

fn synthetic_db(n: usize) -> PlaceDb<DefaultBackend> {
    // Deterministic pseudo-names so runs are comparable.
    let syllables = ["ber", "lon", "par", "mar", "lin", "don", "is", "seille", "ten", "burg"];
    let records = (0..n)
        .map(|i| {
            let city = format!(
                "{}{}{}",
                syllables[i % syllables.len()],
                syllables[(i / 3) % syllables.len()],
                i % 7
            );
            PlaceRecord::new(&city, "State", "Country")
        })
        .collect();
    PlaceDb::from_records(records)
}

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("edit_distance/short_names", |b| {
        b.iter(|| edit_distance(black_box("marseille"), black_box("marseile")))
    });
}

fn bench_typo_search(c: &mut Criterion) {
    let db = synthetic_db(10_000);
    c.bench_function("search_typo_tolerant/10k_records", |b| {
        b.iter(|| db.search_typo_tolerant(black_box("berlon3"), 2, 5))
    });
}

fn bench_substring_filter(c: &mut Criterion) {
    let db = synthetic_db(10_000);
    c.bench_function("find_cities_containing/10k_records", |b| {
        b.iter(|| db.find_cities_containing(black_box("lon"), 10))
    });
}

criterion_group!(
    benches,
    bench_edit_distance,
    bench_typo_search,
    bench_substring_filter
);
criterion_main!(benches);
