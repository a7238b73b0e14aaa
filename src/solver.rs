//! The word-search solver: finds every placement of every requested word.
//!
//! # Algorithm
//!
//! For each word (in the order given), for each cell in row-major order, for each
//! enabled direction in canonical order (East, South, SouthEast, SouthWest, West,
//! North, NorthWest, NorthEast):
//!
//! 1. if the word's last letter would land outside the grid, skip the attempt;
//! 2. otherwise compare letters one by one, giving up at the first mismatch;
//! 3. on a full match, emit a [`SearchHit`].
//!
//! The output order is therefore word → cell → direction, and is identical for
//! identical inputs. Nothing is deduplicated unless asked: a word listed twice is
//! searched twice, and a one-letter word matches once per enabled direction at
//! each cell holding that letter.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with three variants:
//!
//! - S001: `Grid` (Grid construction or access failed (wraps [`GridError`]))
//! - S002: `InvalidWord` (A requested word is empty)
//! - S003: `NoWords` (Word list is empty)
//!
//! Words are validated before any searching, so an error never comes with
//! partial results.
//!
//! # Examples
//!
//! ```
//! use wordsearch::direction::Direction;
//! use wordsearch::grid::Grid;
//! use wordsearch::solver::{self, SearchOptions};
//!
//! let grid = Grid::from_rows(["CAT", "ARA", "TAT"])?;
//! let result = solver::solve(&grid, &["cat", "dog"], &SearchOptions::default())?;
//!
//! let found: Vec<_> = result.hits.iter().map(|h| (h.row(), h.column(), h.direction())).collect();
//! assert_eq!(found, vec![(0, 0, Direction::East), (0, 0, Direction::South)]);
//! assert!(result.status.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Bounded time
//!
//! ```
//! use std::time::Duration;
//! use wordsearch::solver::{self, SearchOptions, SolveStatus};
//!
//! let options = SearchOptions::default().with_time_budget(Duration::from_secs(5));
//! let result = solver::solve_rows(["ABC", "DEF"], &["be"], &options)?;
//!
//! match result.status {
//!     SolveStatus::Complete => println!("{} hits", result.hits.len()),
//!     SolveStatus::TimedOut { elapsed } => println!("partial after {elapsed:?}"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;
use std::collections::HashSet;
use std::time::Duration;

use instant::Instant;
use log::{debug, info, warn};

use crate::direction::Direction;
use crate::errors::GridError;
use crate::grid::{fold_char, Grid};
use crate::hit::SearchHit;

/// Settings for one `solve` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Compare letters exactly. When false (the default) grid and word letters
    /// are both folded first; hits still report the word as given.
    ///
    /// Folding is one character to one character: letters with several case
    /// forms share one (`Σ`, `σ` and `ς` all match), but a letter whose
    /// uppercase is several characters (`ß` → `SS`) only matches itself.
    pub case_sensitive: bool,
    /// Also scan West, North, NorthWest and NorthEast. Default true.
    pub allow_reversed: bool,
    /// Skip a word that is an exact repeat of an earlier one. Default false.
    pub dedupe_words: bool,
    /// Stop early once this much wall-clock time has passed. Default: no limit.
    pub time_budget: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            allow_reversed: true,
            dedupe_words: false,
            time_budget: None,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_allow_reversed(mut self, allow_reversed: bool) -> Self {
        self.allow_reversed = allow_reversed;
        self
    }

    #[must_use]
    pub fn with_dedupe_words(mut self, dedupe_words: bool) -> Self {
        self.dedupe_words = dedupe_words;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, limit: Duration) -> Self {
        self.time_budget = Some(limit);
        self
    }

    /// The directions scanned at each cell, in canonical order.
    #[must_use]
    pub fn directions(&self) -> &'static [Direction] {
        if self.allow_reversed {
            &Direction::ALL
        } else {
            &Direction::FORWARD
        }
    }
}

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every word was searched over the whole grid.
    Complete,

    /// The time budget expired; `hits` holds what was found before that.
    TimedOut { elapsed: Duration },
}

impl SolveStatus {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, SolveStatus::Complete)
    }

    /// Short machine-readable label ("complete" / "timed_out").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Complete => "complete",
            SolveStatus::TimedOut { .. } => "timed_out",
        }
    }
}

/// Successful solver run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Hits in canonical order.
    pub hits: Vec<SearchHit>,
    pub status: SolveStatus,
}

impl SolveResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl IntoIterator for SolveResult {
    type Item = SearchHit;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Unified error type for the solver.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The grid could not be built (only from [`solve_rows`]) or was misused.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// The word at `index` in the request is the empty string.
    #[error("word #{index} is empty")]
    InvalidWord { index: usize },

    /// Nothing to search for.
    #[error("no words to search for")]
    NoWords,
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "S001",
            SolverError::InvalidWord { .. } => "S002",
            SolverError::NoWords => "S003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "Grid construction or access failed",
            SolverError::InvalidWord { .. } => "A requested word is empty",
            SolverError::NoWords => "Word list is empty",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::Grid(_) => "The grid rows could not be turned into a rectangular grid. This wraps an underlying GridError (see Grid Errors section for specific error codes).",
            SolverError::InvalidWord { .. } => "Every requested word must contain at least one character. Words are checked before searching starts, so no partial results are returned.",
            SolverError::NoWords => "The request did not name any words, so there is nothing to search for.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidWord { .. } => Some("Remove empty entries from the word list (blank lines, trailing separators)"),
            SolverError::NoWords => Some("Pass at least one word, e.g. 'CAT'"),
            SolverError::Grid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::Grid(ge) => {
                format!("{}\n  caused by: {}", self.code(), ge.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(
                &self.to_string(),
                self.code(),
                self.help(),
            ),
        }
    }
}

/// Wall-clock limit checked between units of work.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Fail fast on an empty request or an empty word.
fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<(), SolverError> {
    if words.is_empty() {
        return Err(SolverError::NoWords);
    }
    match words.iter().position(|w| w.as_ref().is_empty()) {
        Some(index) => Err(SolverError::InvalidWord { index }),
        None => Ok(()),
    }
}

/// Does `pattern` read from `(row, column)` in `direction`?
///
/// `grid` and `pattern` must already be folded the same way.
fn matches_at(
    grid: &Grid,
    pattern: &[char],
    row: usize,
    column: usize,
    direction: Direction,
) -> bool {
    let Some(last_step) = pattern.len().checked_sub(1) else {
        return false;
    };
    // Bounds first: a matching prefix that runs off the edge is not a hit.
    if grid.try_step(row, column, direction, last_step).is_none() {
        return false;
    }
    pattern.iter().enumerate().all(|(i, &expected)| {
        grid.try_step(row, column, direction, i)
            .is_some_and(|(r, c)| grid.cell(r, c) == expected)
    })
}

/// Search `grid` for every word in `words`.
///
/// # Errors
///
/// `SolverError::NoWords` if `words` is empty, `SolverError::InvalidWord` if
/// any word is empty. Both are reported before searching starts.
pub fn solve<S: AsRef<str>>(
    grid: &Grid,
    words: &[S],
    options: &SearchOptions,
) -> Result<SolveResult, SolverError> {
    validate_words(words)?;

    let start = Instant::now();
    let budget = options.time_budget.map(TimeBudget::new);
    let out_of_time = || budget.as_ref().is_some_and(TimeBudget::expired);

    let haystack: Cow<Grid> = if options.case_sensitive {
        Cow::Borrowed(grid)
    } else {
        Cow::Owned(grid.to_folded())
    };
    let directions = options.directions();

    let mut hits = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut timed_out = false;

    'words: for word in words {
        let word = word.as_ref();

        if options.dedupe_words && !seen.insert(word) {
            debug!("[solver] skipping repeated word {word:?}");
            continue;
        }

        let pattern: Vec<char> = if options.case_sensitive {
            word.chars().collect()
        } else {
            word.chars().map(fold_char).collect()
        };

        let before = hits.len();
        for row in 0..haystack.height() {
            for column in 0..haystack.width() {
                if out_of_time() {
                    timed_out = true;
                    break 'words;
                }
                for &direction in directions {
                    if matches_at(&haystack, &pattern, row, column, direction) {
                        hits.push(SearchHit::new(word, row, column, direction));
                    }
                }
            }
        }
        debug!("[solver] {word:?}: {} hit(s)", hits.len() - before);
    }

    let status = match (&budget, timed_out) {
        (Some(b), true) => {
            let elapsed = b.elapsed();
            warn!(
                "[solver] time budget of {:?} expired after {:.3}s; returning {} partial hit(s)",
                b.limit,
                elapsed.as_secs_f64(),
                hits.len()
            );
            SolveStatus::TimedOut { elapsed }
        }
        _ => SolveStatus::Complete,
    };

    info!(
        "[solver] searched {} word(s) in a {}x{} grid: {} hit(s), {} in {:.3}s",
        words.len(),
        grid.height(),
        grid.width(),
        hits.len(),
        status.as_str(),
        start.elapsed().as_secs_f64()
    );

    Ok(SolveResult { hits, status })
}

/// Build a grid from `rows` and search it.
///
/// # Errors
///
/// `SolverError::Grid` if the rows do not form a valid grid, plus everything
/// [`solve`] reports. Words are checked first.
pub fn solve_rows<R, S, W>(
    rows: R,
    words: &[W],
    options: &SearchOptions,
) -> Result<SolveResult, SolverError>
where
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: AsRef<str>,
{
    validate_words(words)?;
    let grid = Grid::from_rows(rows)?;
    solve(&grid, words, options)
}
