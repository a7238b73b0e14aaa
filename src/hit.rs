//! One occurrence of a word in the grid.
//!
//! A hit is an immutable value: the word exactly as it was requested, the
//! zero-based start cell, and the direction the word runs in. Hits are produced
//! by the solver; the only other way to obtain one is to parse it back from its
//! interchange form, which validates every field.
//!
//! # Interchange
//!
//! The text record is four `;`-separated fields in the order
//! `word;column;row;direction`, with the direction as its integer code (see
//! [`Direction`]). Serde uses the same field order and encoding:
//!
//! ```
//! use wordsearch::grid::Grid;
//! use wordsearch::hit::SearchHit;
//! use wordsearch::solver::{solve, SearchOptions};
//!
//! let grid = Grid::from_rows(["CAT", "ARA", "TAT"])?;
//! let result = solve(&grid, &["CAT"], &SearchOptions::default())?;
//! assert_eq!(result.hits[0].to_record(), "CAT;0;0;0");
//!
//! let parsed: SearchHit = "CAT;0;0;0".parse()?;
//! assert_eq!(parsed, result.hits[0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::errors::HitParseError;

const RECORD_SEPARATOR: char = ';';
const RECORD_FIELDS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHit")]
pub struct SearchHit {
    word: String,
    column: usize,
    row: usize,
    direction: Direction,
}

/// Unvalidated deserialization target.
#[derive(Deserialize)]
struct RawHit {
    word: String,
    column: usize,
    row: usize,
    direction: Direction,
}

impl TryFrom<RawHit> for SearchHit {
    type Error = HitParseError;

    fn try_from(raw: RawHit) -> Result<Self, Self::Error> {
        if raw.word.is_empty() {
            return Err(HitParseError::EmptyWord);
        }
        Ok(SearchHit::new(&raw.word, raw.row, raw.column, raw.direction))
    }
}

impl SearchHit {
    pub(crate) fn new(word: &str, row: usize, column: usize, direction: Direction) -> Self {
        debug_assert!(!word.is_empty(), "hits are never created for empty words");
        SearchHit { word: word.to_string(), column, row, direction }
    }

    /// The word as it was requested (original case).
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The `(row, column)` cells covered by the word, first letter first.
    ///
    /// For solver-produced hits this always yields one cell per character. For a
    /// parsed hit whose path would run past row or column zero, the iterator
    /// stops at the edge.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dx, dy) = self.direction.delta();
        (0..self.word.chars().count()).map_while(move |i| {
            let i = isize::try_from(i).ok()?;
            let row = self.row.checked_add_signed(dy * i)?;
            let column = self.column.checked_add_signed(dx * i)?;
            Some((row, column))
        })
    }

    /// The cell holding the word's last character.
    #[must_use]
    pub fn end(&self) -> Option<(usize, usize)> {
        self.cells().last()
    }

    /// `word;column;row;direction`
    #[must_use]
    pub fn to_record(&self) -> String {
        format!(
            "{word}{RECORD_SEPARATOR}{column}{RECORD_SEPARATOR}{row}{RECORD_SEPARATOR}{direction}",
            word = self.word,
            column = self.column,
            row = self.row,
            direction = self.direction.code(),
        )
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at (row {}, column {}) going {}",
            self.word, self.row, self.column, self.direction
        )
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<usize, HitParseError> {
    value.trim().parse().map_err(|source| HitParseError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

impl FromStr for SearchHit {
    type Err = HitParseError;

    /// Parse a `word;column;row;direction` record.
    ///
    /// Splitting starts from the right, so a word that itself contains `;`
    /// still parses.
    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = record.rsplitn(RECORD_FIELDS, RECORD_SEPARATOR).collect();
        let &[direction, row, column, word] = fields.as_slice() else {
            return Err(HitParseError::WrongFieldCount {
                record: record.to_string(),
                found: fields.len(),
            });
        };

        if word.is_empty() {
            return Err(HitParseError::EmptyWord);
        }
        let column = parse_field("column", column)?;
        let row = parse_field("row", row)?;
        let code: u8 = direction.trim().parse().map_err(|source| HitParseError::InvalidNumber {
            field: "direction",
            value: direction.to_string(),
            source,
        })?;
        let direction = Direction::try_from(code)?;

        Ok(SearchHit::new(word, row, column, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_order() {
        let hit = SearchHit::new("Cat", 2, 5, Direction::SouthWest);
        assert_eq!(hit.to_record(), "Cat;5;2;3");
    }

    #[test]
    fn test_parse_record() {
        let hit: SearchHit = "dog;4;1;6".parse().unwrap();
        assert_eq!(hit.word(), "dog");
        assert_eq!(hit.column(), 4);
        assert_eq!(hit.row(), 1);
        assert_eq!(hit.direction(), Direction::NorthWest);
    }

    #[test]
    fn test_parse_word_with_separator() {
        let hit: SearchHit = "a;b;0;0;0".parse().unwrap();
        assert_eq!(hit.word(), "a;b");
        assert_eq!(hit.to_record(), "a;b;0;0;0");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "CAT;0;0".parse::<SearchHit>(),
            Err(HitParseError::WrongFieldCount { found: 3, .. })
        ));
        assert!(matches!(
            "CAT;x;0;0".parse::<SearchHit>(),
            Err(HitParseError::InvalidNumber { field: "column", .. })
        ));
        assert!(matches!(
            "CAT;0;-1;0".parse::<SearchHit>(),
            Err(HitParseError::InvalidNumber { field: "row", .. })
        ));
        assert!(matches!(
            "CAT;0;0;8".parse::<SearchHit>(),
            Err(HitParseError::InvalidDirection { .. })
        ));
        assert!(matches!(
            "CAT;0;0;east".parse::<SearchHit>(),
            Err(HitParseError::InvalidNumber { field: "direction", .. })
        ));
        assert_eq!(";0;0;0".parse::<SearchHit>(), Err(HitParseError::EmptyWord));
    }

    #[test]
    fn test_cells() {
        let hit = SearchHit::new("CAT", 2, 2, Direction::NorthWest);
        let cells: Vec<_> = hit.cells().collect();
        assert_eq!(cells, vec![(2, 2), (1, 1), (0, 0)]);
        assert_eq!(hit.end(), Some((0, 0)));
    }

    #[test]
    fn test_cells_stop_at_edge() {
        let hit: SearchHit = "CAT;1;0;4".parse().unwrap();
        assert_eq!(hit.cells().collect::<Vec<_>>(), vec![(0, 1), (0, 0)]);
    }

    #[test]
    fn test_display() {
        let hit = SearchHit::new("CAT", 0, 0, Direction::East);
        assert_eq!(hit.to_string(), "CAT at (row 0, column 0) going East");
    }
}
