// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use arc3d_geometry::{build_arc, Point2D};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_build_arc(c: &mut Criterion) {
    let start = Point2D::new(3834358.0, 3699610.0);
    let end = Point2D::new(3877714.0, 3757735.0);

    let mut group = c.benchmark_group("build_arc");
    for segments in [4u32, 10, 32, 128] {
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &segments,
            |b, &segments| {
                b.iter(|| build_arc(black_box(start), black_box(end), segments, 90.0, 0.5))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build_arc);
criterion_main!(benches);
