//! Batch solver for 9×9 number-place puzzles.
//!
//! Reads a grid as text from a file or stdin, derives its solution, and
//! prints both with block separators. `--trace` re-runs the search on
//! the live board and prints every trial placement.
//!
//! # Usage
//!
//! ```sh
//! ninefold puzzle.txt
//! echo "53..7...." ... | ninefold
//! ninefold --trace puzzle.txt
//! ```
//!
//! The grid text holds 81 cells in reading order: digits `1`-`9`, blanks
//! as `.`, `_`, or `0`, whitespace ignored. Exit code 0 on success, 1
//! when the puzzle has no valid completion, 2 on malformed input or I/O
//! failure.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use ninefold_core::{Board, BoardError, Search};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File holding the grid text; read from stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print every search step while re-solving the puzzle.
    #[arg(long)]
    trace: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match read_input(args.file.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read puzzle: {err}");
            process::exit(2);
        }
    };

    let start = Instant::now();
    let mut board: Board = match text.parse() {
        Ok(board) => board,
        Err(BoardError::Unsolvable) => {
            eprintln!("puzzle has no valid completion");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };
    log::debug!("solution derived in {:?}", start.elapsed());

    println!("Puzzle:");
    println!("{}", pretty(&board.working_rows()));
    println!("Solution:");
    println!("{}", pretty(&board.solution_rows()));

    if args.trace {
        trace_search(&mut board);
    }
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Renders raw rows (`0` = empty) as a block-separated grid.
fn pretty(rows: &[[u8; 9]; 9]) -> String {
    let mut out = String::new();
    for (r, row) in rows.iter().enumerate() {
        if r % 3 == 0 {
            out.push_str("+-------+-------+-------+\n");
        }
        for (c, &cell) in row.iter().enumerate() {
            if c % 3 == 0 {
                out.push_str("| ");
            }
            out.push(if cell == 0 { '.' } else { char::from(b'0' + cell) });
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out.push_str("+-------+-------+-------+");
    out
}

/// Drives the step iterator over the board, one printed line per trial.
/// The board is left solved, the way a watched solve ends.
fn trace_search(board: &mut Board) {
    println!("Trace:");
    let start = Instant::now();
    let mut placements = 0u64;
    let mut rejections = 0u64;
    let mut search = Search::new(board);
    for step in search.by_ref() {
        if step.accepted {
            placements += 1;
            println!("  place  {} at {}", step.candidate, step.position);
        } else {
            rejections += 1;
            println!("  reject {} at {}", step.candidate, step.position);
        }
    }
    let solved = search.outcome().unwrap_or(false);
    log::debug!("trace finished in {:?}", start.elapsed());
    println!();
    println!("{placements} placements, {rejections} rejections, solved: {solved}");
}
