extern crate criterion;

use self::criterion::*;
use hufftree::build_tree;
use hufftree::build_tree_sorted;
use hufftree::Leaf;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// deterministic pseudo random weights, skewed like text
fn gen_weights(num_symbols: usize) -> Vec<u64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..num_symbols)
        .map(|symbol| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1000) * 1000 / (symbol as u64 + 1)
        })
        .collect()
}

fn gen_leaves(weights: &[u64]) -> Vec<Leaf<u32>> {
    weights
        .iter()
        .enumerate()
        .map(|(symbol, weight)| Leaf::new(symbol as u32, *weight))
        .collect()
}

/// very simple heap based tree, only depths are computed
fn build_tree_heap(weights: &[u64]) -> Vec<u32> {
    let mut parents: Vec<usize> = vec![usize::MAX; weights.len()];
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = weights
        .iter()
        .enumerate()
        .map(|(pos, weight)| Reverse((*weight, pos)))
        .collect();
    while let (Some(Reverse(el1)), Some(Reverse(el2))) = (heap.pop(), heap.pop()) {
        let parent = parents.len();
        parents.push(usize::MAX);
        parents[el1.1] = parent;
        parents[el2.1] = parent;
        heap.push(Reverse((el1.0 + el2.0, parent)));
    }
    let mut depths = vec![0_u32; parents.len()];
    for pos in (0..parents.len()).rev() {
        if parents[pos] != usize::MAX {
            depths[pos] = depths[parents[pos]] + 1;
        }
    }
    depths.truncate(weights.len());
    depths
}

fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for num_symbols in [29_usize, 256, 4096].iter() {
        let weights = gen_weights(*num_symbols);
        group.throughput(Throughput::Elements(*num_symbols as u64));
        group.bench_with_input(
            BenchmarkId::new("build_tree", num_symbols),
            &weights,
            |b, w| {
                b.iter_batched(
                    || gen_leaves(w),
                    |leaves| build_tree(leaves),
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("build_tree_sorted", num_symbols),
            &weights,
            |b, w| {
                let mut sorted = w.clone();
                sorted.sort_unstable();
                b.iter_batched(
                    || gen_leaves(&sorted),
                    |leaves| build_tree_sorted(leaves),
                    BatchSize::SmallInput,
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("build_tree_heap", num_symbols),
            &weights,
            |b, w| {
                b.iter(|| build_tree_heap(w));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("code_table", num_symbols),
            &weights,
            |b, w| {
                let tree = build_tree(gen_leaves(w)).unwrap();
                b.iter(|| tree.code_table().map(|table| table.len()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, build);
criterion_main!(benches);
