//! The immutable letter grid a puzzle is solved against.
//!
//! A `Grid` is a rectangle of `height` rows by `width` columns, stored row-major
//! in one flat `Vec<char>`. Coordinates are zero-based `(row, column)`.
//!
//! Construction validates the shape once:
//! - at least one row, and no row may be empty (so both dimensions are >= 1);
//! - every row has exactly as many characters as the first.
//!
//! After that the grid never changes, so it can be shared by reference with any
//! number of readers.
//!
//! Like `word_list`, the text entry point (`parse_from_str`) never touches the
//! filesystem and works in WASM builds; `load_from_path` is native-only.

use std::fmt;

use crate::direction::Direction;
use crate::errors::GridError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows of text, one character per cell.
    ///
    /// Rows are taken exactly as given (no trimming).
    ///
    /// # Errors
    ///
    /// Returns a malformed-grid `GridError` if there are no rows, a row is empty,
    /// or the rows differ in length.
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (row, text) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(text.as_ref().chars());
            let found = cells.len() - before;

            if found == 0 {
                return Err(GridError::EmptyRow { row });
            }
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::RaggedRow { row, expected: width, found });
            }
            height += 1;
        }

        if height == 0 {
            return Err(GridError::EmptyGrid);
        }

        debug_assert_eq!(cells.len(), width * height);
        Ok(Grid { cells, width, height })
    }

    /// Parse a grid from free-form text: one row per line.
    ///
    /// Whitespace inside a line is ignored, so `"C A T"` and `"CAT"` are the same
    /// row, and blank lines are skipped. This is the loose format puzzles are
    /// usually typed or pasted in.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_rows`].
    pub fn parse_from_str(contents: &str) -> Result<Grid, GridError> {
        let rows = contents
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|row| !row.is_empty());
        Grid::from_rows(rows)
    }

    /// Native-only convenience method: read a grid file and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if the file cannot be read, or if its contents do
    /// not form a valid grid (reported as `InvalidData`).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Grid> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data)?)
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width
    }

    /// Character at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if either coordinate is outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Result<char, GridError> {
        if self.contains(row, column) {
            Ok(self.cell(row, column))
        } else {
            Err(GridError::OutOfBounds { row, column, height: self.height, width: self.width })
        }
    }

    /// Unchecked read for callers that have already validated the coordinate.
    pub(crate) fn cell(&self, row: usize, column: usize) -> char {
        debug_assert!(
            self.contains(row, column),
            "({row}, {column}) outside {}x{}",
            self.height,
            self.width
        );
        self.cells[row * self.width + column]
    }

    /// The cell reached by taking `steps` unit steps from `(row, column)` in
    /// `direction`, or `None` if that lands outside the grid.
    #[must_use]
    pub fn try_step(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
        steps: usize,
    ) -> Option<(usize, usize)> {
        let steps = isize::try_from(steps).ok()?;
        let r = row.checked_add_signed(direction.dy().checked_mul(steps)?)?;
        let c = column.checked_add_signed(direction.dx().checked_mul(steps)?)?;
        self.contains(r, c).then_some((r, c))
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// A copy of this grid with every cell passed through [`fold_char`].
    pub(crate) fn to_folded(&self) -> Grid {
        Grid {
            cells: self.cells.iter().map(|&c| fold_char(c)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

/// One-to-one case folding used for case-insensitive comparison.
///
/// Goes through the uppercase form first so that letters with more than one
/// lowercase form meet (`Σ`, `σ`, `ς` all fold to `σ`). A letter whose
/// uppercase is several characters (`ß`) is lowercased directly instead.
pub(crate) fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let base = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    base.to_lowercase().next().unwrap_or(base)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_grid() -> Grid {
        Grid::from_rows(["CAT", "ARA", "TAT"]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let grid = Grid::from_rows(["ABCD", "EFGH"]).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_get_row_major() {
        let grid = Grid::from_rows(["ABCD", "EFGH"]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), 'A');
        assert_eq!(grid.get(0, 3).unwrap(), 'D');
        assert_eq!(grid.get(1, 0).unwrap(), 'E');
        assert_eq!(grid.get(1, 2).unwrap(), 'G');
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = cat_grid();
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfBounds { row: 3, column: 0, height: 3, width: 3 })
        );
        assert!(grid.get(0, 3).is_err());
        assert!(grid.get(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_empty_grid() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::from_rows(rows), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(Grid::from_rows([""]), Err(GridError::EmptyRow { row: 0 }));
        assert_eq!(Grid::from_rows(["AB", ""]), Err(GridError::EmptyRow { row: 1 }));
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            Grid::from_rows(["ABC", "DE", "FGH"]),
            Err(GridError::RaggedRow { row: 1, expected: 3, found: 2 })
        );
        assert!(Grid::from_rows(["AB", "CDE"]).unwrap_err().is_malformed());
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let grid = Grid::from_rows(["ÅÄÖ", "abc"]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 1).unwrap(), 'Ä');
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::from_rows(["x"]).unwrap();
        assert_eq!((grid.height(), grid.width()), (1, 1));
        assert_eq!(grid.get(0, 0).unwrap(), 'x');
    }

    #[test]
    fn test_parse_from_str_ignores_spacing() {
        let grid = Grid::parse_from_str("C A T\n\n  ARA\nT A T  \n").unwrap();
        assert_eq!(grid, cat_grid());
    }

    #[test]
    fn test_parse_from_str_blank_input() {
        assert_eq!(Grid::parse_from_str("\n   \n"), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_try_step() {
        let grid = cat_grid();
        assert_eq!(grid.try_step(0, 0, Direction::East, 2), Some((0, 2)));
        assert_eq!(grid.try_step(0, 0, Direction::East, 3), None);
        assert_eq!(grid.try_step(2, 2, Direction::NorthWest, 2), Some((0, 0)));
        assert_eq!(grid.try_step(0, 0, Direction::North, 1), None);
        assert_eq!(grid.try_step(1, 1, Direction::SouthWest, 1), Some((2, 0)));
        assert_eq!(grid.try_step(1, 1, Direction::South, 0), Some((1, 1)));
        assert_eq!(grid.try_step(0, 0, Direction::South, usize::MAX), None);
    }

    #[test]
    fn test_rows_and_display() {
        let grid = cat_grid();
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["CAT", "ARA", "TAT"]);
        assert_eq!(grid.to_string(), "CAT\nARA\nTAT");
    }

    #[test]
    fn test_to_folded() {
        let grid = Grid::from_rows(["CaT", "ÄbÖ"]).unwrap().to_folded();
        assert_eq!(grid.to_string(), "cat\näbö");
    }

    #[test]
    fn test_fold_char() {
        assert_eq!(fold_char('Q'), 'q');
        assert_eq!(fold_char('q'), 'q');
        assert_eq!(fold_char('Σ'), 'σ');
        assert_eq!(fold_char('\u{3c2}'), 'σ');
        assert_eq!(fold_char('ß'), 'ß');
        assert_eq!(fold_char('ẞ'), 'ß');
        assert_eq!(fold_char('7'), '7');
    }
}
