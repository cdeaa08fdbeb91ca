// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use proteus::model::Selection;
use proteus::render::{rasterize, RasterOptions};
use proteus::scene::build_scene;
use proteus::tui::demo_map;

// Benchmark identity (keep stable):
// - Group name: `raster.demo`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (`scene`, `grid`, `highlight`).
fn benches_raster(c: &mut Criterion) {
    let graph = demo_map().expect("demo map");
    let mut group = c.benchmark_group("raster.demo");

    group.bench_function("scene", |b| {
        b.iter(|| {
            let scene = build_scene(black_box(&graph));
            black_box(scene.nodes.len())
        })
    });

    let scene = build_scene(&graph);
    group.bench_function("grid", |b| {
        b.iter(|| {
            let raster =
                rasterize(black_box(&scene), RasterOptions::default()).expect("rasterize");
            black_box(raster.height())
        })
    });

    let mut highlight_scene = build_scene(&graph);
    let order = graph.node_order().to_vec();
    group.bench_function("highlight", |b| {
        b.iter(|| {
            for node_id in &order {
                highlight_scene.apply_highlight(&Selection::Node(node_id.clone()));
            }
            black_box(highlight_scene.nodes.len())
        })
    });

    group.finish();
}

criterion_group!(benches, benches_raster);
criterion_main!(benches);
