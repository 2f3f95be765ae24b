//! Benchmarks for board construction and the backtracking search.
//!
//! Construction includes the consistency pre-check, the full search, the
//! solution snapshot, and the reset; the solve benchmark isolates the
//! search itself on an already-built board.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_core::{Board, solve};

const CLASSIC: &str = "
    53..7....
    6..195...
    .98....6.
    8...6...3
    4..8.3..1
    7...2...6
    .6....28.
    ...419..5
    ....8..79
";

const EMPTY: &str = "
    .........
    .........
    .........
    .........
    .........
    .........
    .........
    .........
    .........
";

fn bench_construction(c: &mut Criterion) {
    let puzzles = [("classic", CLASSIC), ("empty", EMPTY)];

    for (param, text) in puzzles {
        c.bench_with_input(BenchmarkId::new("board_new", param), &text, |b, text| {
            b.iter(|| {
                let board: Board = hint::black_box(text).parse().unwrap();
                hint::black_box(board)
            });
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [("classic", CLASSIC), ("empty", EMPTY)];

    for (param, text) in puzzles {
        let board: Board = text.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("solve", param), &board, |b, board| {
            b.iter_batched_ref(
                || hint::black_box(board.clone()),
                |board| {
                    let solved = solve(board);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_construction, bench_solve);
criterion_main!(benches);
