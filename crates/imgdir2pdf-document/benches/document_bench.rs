// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the imgdir2pdf-document crate. Covers the natural
// filename sort, which runs once per scan over every matching name.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use imgdir2pdf_document::scan::natural;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Sort 5000 scanner-style names (`scan_<n>.jpg` plus a few unnumbered
/// covers) in natural order.
fn bench_natural_sort(c: &mut Criterion) {
    let mut names: Vec<String> = (0..5000u32)
        .rev()
        .map(|n| format!("scan_{:0width$}.jpg", n, width = (n % 4) as usize))
        .collect();
    names.extend(["cover.png", "back.png", "scan_.jpg"].map(String::from));

    c.bench_function("natural_sort (5000 names)", |b| {
        b.iter(|| {
            let mut batch = black_box(names.clone());
            natural::sort_naturally(&mut batch, |name| name.as_bytes().to_vec());
            black_box(batch);
        });
    });

    c.bench_function("sort_key (single name)", |b| {
        b.iter(|| black_box(natural::sort_key(black_box(b"IMG_20240101_000123.jpeg"))));
    });
}

criterion_group!(benches, bench_natural_sort);
criterion_main!(benches);
