//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! - Builds a pseudo-random square grid (fixed seed, so runs are comparable) and
//!   plants a few known words near its top-left corner.
//! - Runs the solver several times per case and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Bigger grid, more repeats:      `cargo run --bin bench_local --release -- -s 400 -r 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsearch::direction::Direction;
use wordsearch::grid::Grid;
use wordsearch::solver::{self, SearchOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grid side length (the grid is square)
    #[arg(short = 's', long, default_value_t = 200)]
    size: usize,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Seed for the grid letters
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

/// (word, start row, start column, direction); fits in grids of side >= 17.
const PLANTED: [(&str, usize, usize, Direction); 4] = [
    ("PUZZLE", 1, 1, Direction::East),
    ("HIDDEN", 3, 1, Direction::SouthEast),
    ("REVERSE", 10, 8, Direction::West),
    ("CLIMB", 16, 1, Direction::North),
];

/// xorshift64; good enough to scatter letters.
fn next_random(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn build_rows(size: usize, seed: u64) -> Vec<Vec<char>> {
    let mut state = seed.max(1);
    let mut rows: Vec<Vec<char>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    let offset = u8::try_from(next_random(&mut state) % 26).unwrap_or(0);
                    char::from(b'A' + offset)
                })
                .collect()
        })
        .collect();

    for (word, start_row, start_column, direction) in PLANTED {
        let (mut row, mut column) = (start_row, start_column);
        for ch in word.chars() {
            if row < size && column < size {
                rows[row][column] = ch;
            }
            row = row.wrapping_add_signed(direction.dy());
            column = column.wrapping_add_signed(direction.dx());
        }
    }
    rows
}

fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let rows: Vec<String> = build_rows(cli.size, cli.seed)
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect();
    let grid = Grid::from_rows(&rows)?;
    eprintln!("Grid: {}x{}", grid.height(), grid.width());

    let planted: Vec<&str> = PLANTED.iter().map(|(w, ..)| *w).collect();
    let cases: Vec<(&str, Vec<&str>, SearchOptions)> = vec![
        ("planted words", planted.clone(), SearchOptions::default()),
        ("planted words, forward only", planted.clone(), SearchOptions::default().with_allow_reversed(false)),
        ("planted words, case-sensitive", planted, SearchOptions::default().with_case_sensitive(true)),
        ("single letters", vec!["Q", "Z"], SearchOptions::default()),
    ];

    eprintln!("\n{:<32} | {:>10} | {:>8}", "case", "median (s)", "hits");
    eprintln!("{:-<32}-+-{:-<10}-+-{:-<8}", "", "", "");
    for (name, words, options) in &cases {
        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut num_hits = 0;
        for _ in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = solver::solve(black_box(&grid), words, options)?;
            times.push(t_solve.elapsed().as_secs_f64());
            num_hits = black_box(result.hits.len());
        }
        eprintln!("{name:<32} | {:>10.4} | {num_hits:>8}", median(times));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_planted_words_are_found() {
        let rows: Vec<String> = build_rows(40, 7).into_iter().map(|r| r.into_iter().collect()).collect();
        let grid = Grid::from_rows(&rows).unwrap();
        for (word, _, _, direction) in PLANTED {
            let result = solver::solve(&grid, &[word], &SearchOptions::default().with_case_sensitive(true)).unwrap();
            assert!(
                result.hits.iter().any(|h| h.direction() == direction),
                "{word} should be found going {direction}"
            );
        }
    }
}
