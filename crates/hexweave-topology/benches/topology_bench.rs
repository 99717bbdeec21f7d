//! Benchmarks for Hexweave Topology
//!
//! Measures performance of:
//! - Neighbor enumeration (cached offsets)
//! - World position to cell / vertex rounding
//! - Canonical vertex and edge construction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::DVec2;
use hexweave_topology::{cells_within, HexCoord, HexEdge, HexVertex, NeighborOffsets};

/// Benchmark neighbor enumeration through the shared cache
fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    let center = HexCoord::new(17, -42);
    for &radius in &[1u32, 2, 4, 8, 16] {
        group.throughput(Throughput::Elements(cells_within(u64::from(radius)) - 1));
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            b.iter(|| black_box(center).neighbors(black_box(r)))
        });
    }
    group.finish();
}

/// Benchmark a cold cache against a warm one
fn bench_offset_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset_cache");

    for &radius in &[4u32, 16] {
        group.bench_with_input(BenchmarkId::new("cold", radius), &radius, |b, &r| {
            b.iter(|| NeighborOffsets::new().offsets(black_box(r)))
        });

        let warm = NeighborOffsets::new();
        warm.offsets(radius);
        group.bench_with_input(BenchmarkId::new("warm", radius), &radius, |b, &r| {
            b.iter(|| warm.offsets(black_box(r)))
        });
    }
    group.finish();
}

/// Benchmark world-plane rounding
fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");

    let points = [
        DVec2::ZERO,
        DVec2::new(12.3, -7.9),
        DVec2::new(-1500.25, 880.5),
    ];

    for (idx, point) in points.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("cell", idx), point, |b, &p| {
            b.iter(|| HexCoord::nearest(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("vertex", idx), point, |b, &p| {
            b.iter(|| HexVertex::nearest(black_box(p)))
        });
    }
    group.finish();
}

/// Benchmark canonical identity construction
fn bench_identities(c: &mut Criterion) {
    let mut group = c.benchmark_group("identities");
    let cell = HexCoord::new(5, -3);

    group.bench_function("vertex_new", |b| {
        b.iter(|| {
            (0..6)
                .map(|d| HexVertex::new(black_box(cell), d))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("edge_new", |b| {
        b.iter(|| {
            cell.adjacent()
                .iter()
                .filter_map(|n| HexEdge::new(black_box(cell), *n).ok())
                .count()
        })
    });

    let vertex = HexVertex::new(cell, 3);
    group.bench_function("vertex_adjacency", |b| {
        b.iter(|| {
            let v = black_box(vertex);
            (v.adjacent_cells(), v.adjacent_edges(), v.adjacent_vertices())
        })
    });

    let edge = HexEdge::from_direction(cell, 4);
    group.bench_function("edge_from_vertices", |b| {
        let [v0, v1] = edge.vertices();
        b.iter(|| HexEdge::from_vertices(black_box(v0), black_box(v1)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_neighbors,
    bench_offset_cache,
    bench_nearest,
    bench_identities,
);

criterion_main!(benches);
