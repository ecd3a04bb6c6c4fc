//! Benchmarks for piece geometry and catalog construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fusion::geometry::{all_orientations, transform, Rotation, Transform};
use fusion::levels::LEVEL_TABLE;
use fusion::pieces::PIECE_TABLE;
use fusion::placement::valid_origins;
use fusion::Catalog;

/// Benchmark one flipped three-quarter turn of the L piece.
fn bench_transform(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let cells = catalog.piece(6).unwrap().cells().to_vec();

    c.bench_function("transform_l_piece", |b| {
        b.iter(|| transform(black_box(&cells), Rotation::R270, true))
    });
}

/// Benchmark computing all orientations for every piece.
fn bench_orientations(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let pieces = catalog.pieces();

    c.bench_function("all_orientations", |b| {
        b.iter(|| {
            for piece in &pieces {
                black_box(all_orientations(piece.cells()));
            }
        })
    });
}

/// Benchmark the bounds sweep over every orientation of every piece.
fn bench_placement_sweep(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let oriented: Vec<_> = catalog
        .pieces()
        .iter()
        .flat_map(|piece| Transform::ALL.map(|t| piece.oriented(t)))
        .collect();

    c.bench_function("valid_origins_sweep", |b| {
        b.iter(|| {
            oriented
                .iter()
                .map(|cells| valid_origins(black_box(cells)).len())
                .sum::<usize>()
        })
    });
}

/// Benchmark building the catalog from the compiled-in tables.
fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| Catalog::build(black_box(PIECE_TABLE), black_box(LEVEL_TABLE)))
    });
}

criterion_group!(
    benches,
    bench_transform,
    bench_orientations,
    bench_placement_sweep,
    bench_catalog_build
);
criterion_main!(benches);
