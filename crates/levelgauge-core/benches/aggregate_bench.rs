//! Criterion benchmarks for the aggregation engine.
//!
//! - `classify_1000`: classify 1000 mixed blocks.
//! - `levels_1000`: aggregate all three categories over 1000 mixed blocks.

use criterion::{criterion_group, criterion_main, Criterion};
use levelgauge_core::block::BlockRef;
use levelgauge_core::inventory::ShipInventory;
use levelgauge_core::test_utils::*;

fn build_blocks(count: usize) -> Vec<BlockRef> {
    let blocks: Vec<_> = (0..count)
        .map(|i| match i % 3 {
            0 => TestBlock::gas_tank(&format!("O2 {i}"), "OxygenTankSmall", 50_000.0, 0.5),
            1 => TestBlock::gas_tank(&format!("H2 {i}"), "LargeHydrogenTank", 15_000.0, 0.25),
            _ => TestBlock::container(&format!("Cargo {i}"), 421.0, 100.0, 900.0, 12),
        })
        .collect();
    refs(&blocks)
}

fn bench_classify(c: &mut Criterion) {
    let blocks = build_blocks(1000);
    c.bench_function("classify_1000", |b| {
        b.iter(|| {
            let mut inventory = ShipInventory::new();
            inventory.classify(blocks.iter().cloned());
            inventory
        })
    });
}

fn bench_levels(c: &mut Criterion) {
    let mut inventory = ShipInventory::new();
    inventory.classify(build_blocks(1000));
    c.bench_function("levels_1000", |b| b.iter(|| inventory.levels()));
}

criterion_group!(benches, bench_classify, bench_levels);
criterion_main!(benches);
