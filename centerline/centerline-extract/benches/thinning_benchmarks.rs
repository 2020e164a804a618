//! Benchmarks for skeleton extraction.
//!
//! Run with: cargo bench -p centerline-extract
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p centerline-extract -- --save-baseline main
//! 2. After changes: cargo bench -p centerline-extract -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use centerline_extract::{extract_skeleton, SkeletonParams};
use nalgebra::Point3;
use vc_spatial::{VoxelCoord, VoxelGrid};

// =============================================================================
// Test Grid Generation
// =============================================================================

/// A solid cylinder along Z: the typical vessel cross-section workload.
fn solid_cylinder(radius: i32, length: i32) -> VoxelGrid<bool> {
    let side = (2 * radius + 3) as u32;
    let mut grid = VoxelGrid::try_new(
        0.4,
        Point3::origin(),
        (side, side, (length + 2) as u32),
    )
    .unwrap();

    let center = radius + 1;
    for z in 1..=length {
        for x in 0..side as i32 {
            for y in 0..side as i32 {
                let dx = x - center;
                let dy = y - center;
                if dx * dx + dy * dy <= radius * radius {
                    grid.set(VoxelCoord::new(x, y, z), true);
                }
            }
        }
    }
    grid
}

/// A solid L-bend: two cylinders meeting at a right angle, so the
/// thinning front has to negotiate a corner.
fn solid_bend(radius: i32, arm: i32) -> VoxelGrid<bool> {
    let side = (arm + 2 * radius + 4) as u32;
    let mut grid = VoxelGrid::try_new(0.4, Point3::origin(), (side, side, side)).unwrap();

    let center = radius + 1;
    for t in 1..=arm {
        for a in -radius..=radius {
            for b in -radius..=radius {
                if a * a + b * b <= radius * radius {
                    grid.set(VoxelCoord::new(center + a, center + b, t), true);
                    grid.set(VoxelCoord::new(center + a, t, center + b), true);
                }
            }
        }
    }
    grid
}

// =============================================================================
// Thinning Benchmarks
// =============================================================================

fn bench_thinning(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thinning");
    group.sample_size(20);

    let test_cases = [
        ("cylinder_r3_l40", solid_cylinder(3, 40)),
        ("cylinder_r5_l80", solid_cylinder(5, 80)),
        ("bend_r4_a40", solid_bend(4, 40)),
    ];

    for (name, grid) in &test_cases {
        group.throughput(Throughput::Elements(grid.count_occupied() as u64));

        group.bench_with_input(BenchmarkId::new("extract_skeleton", name), grid, |b, grid| {
            let params = SkeletonParams::default();
            b.iter(|| extract_skeleton(black_box(grid), black_box(&params)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_thinning);
criterion_main!(benches);
