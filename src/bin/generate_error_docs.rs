//! Generate error code documentation from the source of truth (error enums).
//!
//! Reads codes, descriptions, details, and help text straight from the
//! `SolverError`, `GridError` and `HitParseError` implementations.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::errors::{GridError, HitParseError};
use wordsearch::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::Grid(GridError::RaggedRow { row: 1, expected: 3, found: 2 }),
        SolverError::InvalidWord { index: 2 },
        SolverError::NoWords,
    ]
}

fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::EmptyGrid,
        GridError::EmptyRow { row: 1 },
        GridError::RaggedRow { row: 1, expected: 3, found: 2 },
        GridError::OutOfBounds { row: 3, column: 0, height: 3, width: 3 },
    ]
}

fn all_hit_parse_error_variants() -> Vec<HitParseError> {
    vec![
        HitParseError::WrongFieldCount { record: "CAT;0;0".to_string(), found: 3 },
        HitParseError::InvalidNumber {
            field: "row",
            value: "-1".to_string(),
            // ParseIntError has no public constructor; make one the honest way
            source: match "-1".parse::<usize>() {
                Err(e) => e,
                Ok(_) => unreachable!("'-1' is not a usize"),
            },
        },
        HitParseError::InvalidDirection { value: "8".to_string() },
        HitParseError::EmptyWord,
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001–S003)](#solver-errors)");
    println!("- [Grid Errors (G001–G004)](#grid-errors)");
    println!("- [Hit Record Errors (H001–H004)](#hit-record-errors)\n");

    println!("## Solver Errors\n");
    println!("Top-level errors from `solve`. S001 wraps a grid error.\n");
    generate_error_docs!(all_solver_error_variants());

    println!("## Grid Errors\n");
    println!("Errors building a grid from rows (G001–G003) or reading outside it (G004).\n");
    generate_error_docs!(all_grid_error_variants());

    println!("## Hit Record Errors\n");
    println!("Errors parsing a `word;column;row;direction` record.\n");
    generate_error_docs!(all_hit_parse_error_variants());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_code_documented_once() {
        let codes: Vec<&str> = all_solver_error_variants().iter().map(SolverError::code)
            .chain(all_grid_error_variants().iter().map(GridError::code))
            .chain(all_hit_parse_error_variants().iter().map(HitParseError::code))
            .collect();
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), 11);
        assert_eq!(unique.len(), codes.len());
    }
}
