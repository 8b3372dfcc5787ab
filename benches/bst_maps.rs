use avl_collections::avl_tree::AvlMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreemap_insert(c: &mut Criterion) {
    c.bench_function("bench btreemap insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = BTreeMap::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = BTreeMap::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        keys.push(key);
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avl_map_insert(c: &mut Criterion) {
    c.bench_function("bench avl_map insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = AvlMap::with_capacity(NUM_OF_OPERATIONS);
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                let val = rng.next_u32();

                map.insert(key, val);
            }
        })
    });
}

fn bench_avl_map_get(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = AvlMap::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        let val = rng.next_u32();

        map.insert(key, val);
        keys.push(key);
    }

    c.bench_function("bench avl_map get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_avl_map_remove(c: &mut Criterion) {
    c.bench_function("bench avl_map remove", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut map = AvlMap::with_capacity(NUM_OF_OPERATIONS);
            let mut keys = Vec::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                map.insert(key, key);
                keys.push(key);
            }
            for key in &keys {
                black_box(map.remove(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_get,
    bench_btreemap_insert,
    bench_avl_map_get,
    bench_avl_map_insert,
    bench_avl_map_remove,
);
criterion_main!(benches);
