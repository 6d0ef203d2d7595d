// Criterion benchmarks for Pet Facts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pet_facts::core::{filter_pets, sanitize, Catalog};
use pet_facts::models::FilterCriteria;
use serde_json::json;

fn create_catalog(records_per_category: usize) -> Catalog {
    let categories = ["cachorro", "gato", "coelho", "ave"];
    let mut doc = serde_json::Map::new();

    for (c, name) in categories.iter().enumerate() {
        let pets: Vec<_> = (0..records_per_category)
            .map(|i| {
                let food = if i % 2 == 0 { "Carne" } else { "Peixe" };
                let exercise = if i % 3 == 0 { "Correr diariamente" } else { "Caminhadas" };
                json!({
                    "raca": format!("Raça {c}-{i}"),
                    "comida_permitida": ["Ração", food],
                    "curiosidades": ["Muito brincalhão", format!("Curiosidade número {i}")],
                    "exercicios": exercise,
                })
            })
            .collect();
        doc.insert(name.to_string(), json!(pets));
    }

    Catalog::from_value(serde_json::Value::Object(doc)).unwrap()
}

fn bench_sanitize(c: &mut Criterion) {
    let input = "<p>Seria ótimo ter mais informações sobre coelhos!</p> <script>alert('x')</script> 🐰"
        .repeat(5);

    c.bench_function("sanitize_suggestion", |b| {
        b.iter(|| sanitize(black_box(Some(input.as_str()))));
    });
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pets");

    for records in [10, 100, 1000].iter() {
        let catalog = create_catalog(*records);
        let unconstrained = FilterCriteria::default();
        let combined = FilterCriteria::default()
            .with_food("carne")
            .with_curiosity("brincalhão")
            .with_exercise("correr");

        group.bench_with_input(BenchmarkId::new("unconstrained", records), records, |b, _| {
            b.iter(|| filter_pets(black_box(&catalog), black_box(&unconstrained)).len());
        });

        group.bench_with_input(BenchmarkId::new("combined", records), records, |b, _| {
            b.iter(|| filter_pets(black_box(&catalog), black_box(&combined)).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sanitize, bench_filter);

criterion_main!(benches);
