// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for catalog operations.
//!
//! Measures the performance of:
//! - Upload filtering (extension partitioning)
//! - Catalog mutations (push, reorder, remove)
//! - Render-plan computation for a populated gallery
//! - Single-file import through the decode pipeline

use criterion::{criterion_group, criterion_main, Criterion};
use iced::widget::image::Handle;
use iced_vitrine::catalog::accept;
use iced_vitrine::catalog::{import, Catalog, MediaRecord};
use iced_vitrine::ui::gallery::{Collaborators, Props, RenderPlan};
use std::hint::black_box;
use std::path::PathBuf;

/// Builds a catalog of `len` synthetic records.
fn sample_catalog(len: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for index in 0..len {
        catalog.push(MediaRecord::new(
            PathBuf::from(format!("media-{index:03}.png")),
            Handle::from_rgba(1, 1, vec![0; 4]),
        ));
    }
    catalog
}

/// Benchmark the drop filter over a mixed batch of paths.
fn bench_partition_uploads(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_ops");

    let batch: Vec<PathBuf> = (0..64)
        .map(|index| {
            let extension = match index % 4 {
                0 => "png",
                1 => "jpg",
                2 => "jpeg",
                _ => "txt",
            };
            PathBuf::from(format!("upload-{index:03}.{extension}"))
        })
        .collect();

    group.bench_function("partition_uploads_64", |b| {
        b.iter(|| {
            let (accepted, rejected) = accept::partition_uploads(batch.clone());
            black_box((accepted, rejected));
        });
    });

    group.finish();
}

/// Benchmark catalog mutations at a storefront-typical size.
fn bench_catalog_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_ops");

    let catalog = sample_catalog(32);
    let middle = catalog.records()[16].id();

    group.bench_function("push_32", |b| {
        b.iter(|| {
            black_box(sample_catalog(32));
        });
    });

    group.bench_function("move_toward_front", |b| {
        b.iter(|| {
            let mut working = catalog.clone();
            working.move_toward_front(middle);
            black_box(&working);
        });
    });

    group.bench_function("remove_middle", |b| {
        b.iter(|| {
            let mut working = catalog.clone();
            working.remove(middle);
            black_box(&working);
        });
    });

    group.finish();
}

/// Benchmark the pure per-frame plan computation.
fn bench_render_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_ops");

    let catalog = sample_catalog(32);
    let authorize = || true;

    group.bench_function("render_plan_32", |b| {
        b.iter(|| {
            let props = Props::new(catalog.records(), Collaborators::standard(None, &authorize))
                .editable(true);
            black_box(RenderPlan::of(&props));
        });
    });

    group.finish();
}

/// Benchmark importing a small PNG end to end.
fn bench_import_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_ops");

    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("sample.png");
    image_rs::RgbImage::from_pixel(64, 64, image_rs::Rgb([180, 40, 40]))
        .save(&path)
        .expect("Failed to write fixture image");

    group.bench_function("import_png_64x64", |b| {
        b.iter(|| {
            let media = import::import_file(&path).unwrap();
            black_box(media);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_partition_uploads,
    bench_catalog_mutations,
    bench_render_plan,
    bench_import_file
);
criterion_main!(benches);
