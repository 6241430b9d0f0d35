// Copyright (c) 2026 - present The retrace developers
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use retrace_diff::hunk::find_change_block;
use retrace_diff::line::DiffLine;
use retrace_diff::selection::make_selection;
use retrace_diff::twoside::TwoSideDiff;

/// A large diff with one hunk per ~10 lines, the shape a viewer scrolls
/// through while the resolver runs on every pointer move.
fn synthetic_diff(hunks: usize) -> Vec<DiffLine> {
    let mut lines = Vec::with_capacity(hunks * 10);
    for h in 0..hunks {
        let base = h * 8 + 1;
        lines.push(DiffLine::indicator("@@"));
        lines.push(DiffLine::normal("ctx", base, base));
        lines.push(DiffLine::normal("ctx", base + 1, base + 1));
        lines.push(DiffLine::deleted("old", base + 2));
        lines.push(DiffLine::deleted("old", base + 3));
        lines.push(DiffLine::added("new", base + 2));
        lines.push(DiffLine::added("new", base + 3));
        lines.push(DiffLine::added("new", base + 4));
        lines.push(DiffLine::normal("ctx", base + 4, base + 5));
        lines.push(DiffLine::normal("ctx", base + 5, base + 6));
    }
    lines
}

fn diff_benchmark(c: &mut Criterion) {
    let lines = synthetic_diff(200);

    c.bench_function("find_change_block_sweep", |b| {
        b.iter(|| {
            let mut resolved = 0usize;
            for anchor in 0..lines.len() {
                if find_change_block(std::hint::black_box(&lines), anchor).is_some() {
                    resolved += 1;
                }
            }
            std::hint::black_box(resolved)
        })
    });

    c.bench_function("make_selection_full_range", |b| {
        b.iter(|| {
            let selection =
                make_selection(std::hint::black_box(&lines), 0, lines.len() - 1, true, false);
            std::hint::black_box(selection.has_changes)
        })
    });

    c.bench_function("twoside_projection", |b| {
        b.iter(|| {
            let twoside = TwoSideDiff::from_combined(std::hint::black_box(&lines));
            std::hint::black_box(twoside.height())
        })
    });
}

criterion_group!(benches, diff_benchmark);
criterion_main!(benches);
