//! Refresh benchmarks for build_hci.
//!
//! Run with: `cargo bench -p build_hci`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use build_core::droid::DroidType;
use build_hci::controller::BuildInterfaceController;
use build_hci::host::HeadlessHost;
use build_hci::settings::BuildMenuSettings;
use build_test_utils::fixtures::{ids, order_build, pos, WorldBuilder, ENEMY, LOCAL};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Refresh with a mix of builders, combat droids and enemy units.
pub fn refresh_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");

    for droids in [10, 100, 1000] {
        let mut builder = WorldBuilder::new()
            .structure(ids::FACTORY)
            .structure(ids::RESEARCH)
            .structure(ids::POWER_GEN);
        for i in 0..droids {
            let (player, droid_type) = match i % 4 {
                0 => (LOCAL, DroidType::Construct),
                1 => (LOCAL, DroidType::CyborgConstruct),
                2 => (LOCAL, DroidType::Weapon),
                _ => (ENEMY, DroidType::Construct),
            };
            builder = builder.droid(player, droid_type, pos(i, i));
        }
        let (world, spawned) = builder.build_shared();
        for &droid in spawned.iter().step_by(8) {
            order_build(&mut world.borrow_mut(), droid, ids::WALL);
        }

        let host = Rc::new(RefCell::new(HeadlessHost::new()));
        let controller =
            BuildInterfaceController::new(world.clone(), host, BuildMenuSettings::default());

        group.bench_with_input(BenchmarkId::from_parameter(droids), &droids, |b, _| {
            b.iter(|| {
                let mut controller = controller.borrow_mut();
                controller.refresh();
                black_box(controller.highlighted_stats())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, refresh_benchmark);
criterion_main!(benches);
