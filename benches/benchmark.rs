use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_dictionary::{AvlTreeMap, Dictionary};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("map_insert", |b| {
        let mut map = AvlTreeMap::new();
        b.iter(|| {
            for value in &values {
                map.insert(*value, *value);
            }
        })
    });

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, *value);
    }

    c.bench_function("map_find", |b| {
        b.iter(|| {
            for value in &values {
                let _ = black_box(map.find(value));
            }
        })
    });

    c.bench_function("map_iter", |b| {
        b.iter(|| {
            for (k, v) in &map {
                black_box((k, v));
            }
        })
    });

    c.bench_function("map_remove", |b| {
        let mut map = map.clone();
        b.iter(|| {
            for value in &values {
                let _ = map.remove(value);
            }
        })
    });

    let words: Vec<String> = values.iter().map(|value| format!("word{value}")).collect();
    let mut dictionary = Dictionary::new();
    for word in &words {
        dictionary.insert(word.clone(), word.to_uppercase());
    }

    c.bench_function("dictionary_find", |b| {
        b.iter(|| {
            for word in &words {
                let _ = black_box(dictionary.find(word.as_str()));
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
