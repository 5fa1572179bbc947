use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use dyn_array::DynArray;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const COUNT: usize = 1 << 12;

struct Rng(StdRng);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    fn collect<T>(&mut self, count: usize) -> T
    where
        T: FromIterator<u32>,
    {
        std::iter::repeat_with(|| self.0.next_u32())
            .take(count)
            .collect()
    }
}

fn push(c: &mut Criterion) {
    let mut rng = Rng::new(42);
    let values: Vec<u32> = rng.collect(COUNT);

    c.bench_function("push dyn_array", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for &value in &values {
                array.push(value);
            }
            black_box(array)
        })
    });

    c.bench_function("push vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for &value in &values {
                vec.push(value);
            }
            black_box(vec)
        })
    });
}

fn insert_front(c: &mut Criterion) {
    let mut rng = Rng::new(7);
    let values: Vec<u32> = rng.collect(COUNT / 8);

    c.bench_function("insert front dyn_array", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for &value in &values {
                let _ = array.insert(0, value);
            }
            black_box(array)
        })
    });

    c.bench_function("insert front vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for &value in &values {
                vec.insert(0, value);
            }
            black_box(vec)
        })
    });
}

fn clone_from(c: &mut Criterion) {
    let mut rng = Rng::new(13);
    let source: DynArray<u32> = rng.collect(COUNT);
    let source_vec: Vec<u32> = source.to_vec();

    c.bench_function("clone_from dyn_array", |b| {
        b.iter_batched_ref(
            || DynArray::<u32>::with_capacity(COUNT),
            |target| target.clone_from(black_box(&source)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("clone_from vec", |b| {
        b.iter_batched_ref(
            || Vec::<u32>::with_capacity(COUNT),
            |target| target.clone_from(black_box(&source_vec)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, push, insert_front, clone_from);
criterion_main!(benches);
