//! Error types for grid construction and hit-record parsing, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Grid errors (G001-G004):
//!
//! - G001: `EmptyGrid` (Grid has no rows)
//! - G002: `EmptyRow` (A grid row has no characters)
//! - G003: `RaggedRow` (Grid rows have inconsistent lengths)
//! - G004: `OutOfBounds` (Cell access outside the grid)
//!
//! The first three are the "malformed grid" family and are reported at
//! construction time; see [`GridError::is_malformed`].
//!
//! Hit-record errors (H001-H004):
//!
//! - H001: `WrongFieldCount` (Record does not have four fields)
//! - H002: `InvalidNumber` (A numeric field is not a non-negative integer)
//! - H003: `InvalidDirection` (Direction is not 0-7 or a known name)
//! - H004: `EmptyWord` (Record has an empty word)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::GridError;
//! use wordsearch::grid::Grid;
//!
//! match Grid::from_rows(["CAT", "DOGS"]) {
//!     Err(e) => {
//!         assert!(e.is_malformed());
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::num::ParseIntError;

/// Errors raised while building or reading a [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid has no rows")]
    EmptyGrid,

    #[error("Grid row {row} is empty")]
    EmptyRow { row: usize },

    #[error("Grid row {row} has {found} characters (expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cell (row {row}, column {column}) is outside the grid ({height} rows x {width} columns)")]
    OutOfBounds {
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },
}

impl GridError {
    /// True for the errors that mean the input rows could not form a rectangle.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        !matches!(self, GridError::OutOfBounds { .. })
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "G001",
            GridError::EmptyRow { .. } => "G002",
            GridError::RaggedRow { .. } => "G003",
            GridError::OutOfBounds { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "Grid has no rows",
            GridError::EmptyRow { .. } => "A grid row has no characters",
            GridError::RaggedRow { .. } => "Grid rows have inconsistent lengths",
            GridError::OutOfBounds { .. } => "Cell access outside the grid",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "A grid needs at least one row and one column. The input contained no (non-blank) rows.",
            GridError::EmptyRow { .. } => "Every grid row must contain at least one character, so a grid can never have zero columns.",
            GridError::RaggedRow { .. } => "A grid is rectangular: every row must have exactly as many characters as the first row.",
            GridError::OutOfBounds { .. } => "A caller asked for a cell whose row or column lies outside the grid. The solver checks bounds before stepping, so this only comes from direct use of the grid accessors.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyGrid => Some("Provide at least one row of letters, e.g. 'CAT'"),
            GridError::EmptyRow { .. } => Some("Remove the empty row or fill it with letters"),
            GridError::RaggedRow { .. } => Some("Pad or trim rows so they all have the same length (e.g. 'CAT' / 'ARA' / 'TAT')"),
            GridError::OutOfBounds { .. } => Some("Rows and columns are zero-based; check against height() and width() first"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Keeps the `GridError` itself as the payload, so callers can recover it with
/// `io::Error::get_ref` and report its code.
impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, ge)
    }
}

/// Errors raised while parsing a `word;column;row;direction` hit record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HitParseError {
    #[error("Hit record \"{record}\" has {found} field(s) (expected 4)")]
    WrongFieldCount { record: String, found: usize },

    #[error("Invalid {field} \"{value}\": {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid direction \"{value}\" (expected 0-7 or a compass name)")]
    InvalidDirection { value: String },

    #[error("Hit record has an empty word")]
    EmptyWord,
}

impl HitParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            HitParseError::WrongFieldCount { .. } => "H001",
            HitParseError::InvalidNumber { .. } => "H002",
            HitParseError::InvalidDirection { .. } => "H003",
            HitParseError::EmptyWord => "H004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            HitParseError::WrongFieldCount { .. } => "Record does not have four fields",
            HitParseError::InvalidNumber { .. } => "A numeric field is not a non-negative integer",
            HitParseError::InvalidDirection { .. } => "Direction is not 0-7 or a known name",
            HitParseError::EmptyWord => "Record has an empty word",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            HitParseError::WrongFieldCount { .. } => "A hit record is exactly four ';'-separated fields: word, column, row, direction.",
            HitParseError::InvalidNumber { .. } => "Column, row and direction must be written as non-negative base-10 integers.",
            HitParseError::InvalidDirection { .. } => "Directions are encoded 0=East, 1=South, 2=SouthEast, 3=SouthWest, 4=West, 5=North, 6=NorthWest, 7=NorthEast.",
            HitParseError::EmptyWord => "A hit always names the word that was found, so the word field cannot be empty.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            HitParseError::WrongFieldCount { .. } => Some("Example record: 'CAT;0;2;1' (word CAT, column 0, row 2, going South)"),
            HitParseError::InvalidNumber { .. } => Some("Use plain digits, e.g. '12' rather than '-1' or 'twelve'"),
            HitParseError::InvalidDirection { .. } => Some("Use a code between 0 and 7, or a name such as 'east' or 'NW'"),
            HitParseError::EmptyWord => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_grid_errors() -> Vec<GridError> {
        vec![
            GridError::EmptyGrid,
            GridError::EmptyRow { row: 1 },
            GridError::RaggedRow { row: 2, expected: 3, found: 4 },
            GridError::OutOfBounds { row: 5, column: 0, height: 3, width: 3 },
        ]
    }

    fn all_hit_parse_errors() -> Vec<HitParseError> {
        vec![
            HitParseError::WrongFieldCount { record: "CAT;0".to_string(), found: 2 },
            HitParseError::InvalidNumber {
                field: "row",
                value: "x".to_string(),
                source: "x".parse::<usize>().unwrap_err(),
            },
            HitParseError::InvalidDirection { value: "9".to_string() },
            HitParseError::EmptyWord,
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = GridError::RaggedRow { row: 2, expected: 3, found: 4 };
        assert_eq!(err.code(), "G003");
        let detailed = err.display_detailed();
        assert!(detailed.contains("G003"));
        assert!(detailed.contains("same length"));
        assert!(detailed.contains("row 2 has 4 characters (expected 3)"));
    }

    #[test]
    fn test_malformed_classification() {
        for err in all_grid_errors() {
            let expect_malformed = !matches!(err, GridError::OutOfBounds { .. });
            assert_eq!(err.is_malformed(), expect_malformed, "{err:?}");
        }
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = HashSet::new();
        for code in all_grid_errors().iter().map(GridError::code)
            .chain(all_hit_parse_errors().iter().map(HitParseError::code))
        {
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 8);
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = HitParseError::EmptyWord;
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), "Hit record has an empty word (H004)");
    }

    #[test]
    fn test_invalid_number_keeps_source() {
        use std::error::Error;
        let err = &all_hit_parse_errors()[1];
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Invalid row \"x\""));
    }

    #[test]
    fn test_grid_error_into_io_error() {
        let io_err: io::Error = GridError::EmptyGrid.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(io_err.to_string(), "Grid has no rows");
        let inner = io_err.get_ref().and_then(|e| e.downcast_ref::<GridError>());
        assert_eq!(inner, Some(&GridError::EmptyGrid));
    }
}
