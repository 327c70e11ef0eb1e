// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the near-white clearing pass in whiteout-image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};

use whiteout_core::Threshold;
use whiteout_image::clear_near_white;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Clear a 512x512 synthetic logo: white background with a dark filled
/// circle, so roughly a quarter of the pixels take the keep branch.
fn bench_clear_near_white(c: &mut Criterion) {
    let (width, height) = (512u32, 512u32);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as i64 - 256;
        let dy = y as i64 - 256;
        if dx * dx + dy * dy < 150 * 150 {
            Rgba([30, 60, 120, 255])
        } else {
            Rgba([252, 252, 252, 255])
        }
    });

    c.bench_function("clear_near_white (512x512)", |b| {
        b.iter(|| {
            let (out, cleared) = clear_near_white(black_box(&img), Threshold::DEFAULT);
            black_box((out, cleared));
        });
    });
}

criterion_group!(benches, bench_clear_near_white);
criterion_main!(benches);
