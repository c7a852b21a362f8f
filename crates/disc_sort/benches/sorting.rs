mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use disc_sort::sort::{RecursionOrder, SortAutomaton};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const LENGTHS: [usize; 4] = [50, 500, 5_000, 50_000];

fn random_angles(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(60.0..120.0)).collect()
}

fn sorting_run_to_end_benches(c: &mut Criterion) {
    for order in [RecursionOrder::SmallerFirst, RecursionOrder::LargerFirst] {
        let mut group = c.benchmark_group(format!("sorting/run_to_end/{order:?}"));

        for &len in &LENGTHS {
            let input = random_angles(len, 0x5EED ^ len as u64);
            group.throughput(common::elements_throughput(len));

            group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
                b.iter_batched(
                    || SortAutomaton::new(input.clone()).with_order(order),
                    |mut automaton| {
                        let _ = automaton.start();
                        black_box(automaton.run_to_end());
                    },
                    BatchSize::SmallInput,
                );
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sorting_run_to_end_benches
}
criterion_main!(benches);
