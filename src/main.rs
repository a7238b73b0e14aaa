use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use wordsearch::errors::GridError;
use wordsearch::grid::Grid;
use wordsearch::solver::{self, SearchOptions, SolveStatus};
use wordsearch::word_list::WordList;

/// Word-search puzzle solver
///
/// Prints one `word;column;row;direction` record per hit on stdout
/// (direction codes: 0=E 1=S 2=SE 3=SW 4=W 5=N 6=NW 7=NE).
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the grid file (one row of letters per line)
    grid: PathBuf,

    /// Words to look for (added after any --word-list entries)
    words: Vec<String>,

    /// Path to a word list file (one word per line, '#' for comments)
    #[arg(short = 'w', long)]
    word_list: Option<PathBuf>,

    /// Match letter case exactly
    #[arg(short = 'c', long)]
    case_sensitive: bool,

    /// Only search the four forward directions (E, S, SE, SW)
    #[arg(long)]
    no_reverse: bool,

    /// Search each distinct word once
    #[arg(long)]
    dedupe: bool,

    /// Give up after this many milliseconds and print what was found
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Print hits as a JSON array instead of records
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn search_options(&self) -> SearchOptions {
        let options = SearchOptions::default()
            .with_case_sensitive(self.case_sensitive)
            .with_allow_reversed(!self.no_reverse)
            .with_dedupe_words(self.dedupe);
        match self.timeout_ms {
            Some(ms) => options.with_time_budget(Duration::from_millis(ms)),
            None => options,
        }
    }
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], printing any error (with its code and help text
/// when it is a `SolverError` or a `GridError`) before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        eprintln!("Error: {}", describe_error(e.as_ref()));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Coded errors print with their code and help; anything else prints as is.
///
/// Grid files are loaded through `io::Result`, so a malformed grid arrives as
/// an `io::Error` carrying the `GridError`.
fn describe_error(e: &(dyn std::error::Error + 'static)) -> String {
    if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
        return solver_err.display_detailed();
    }
    let grid_err = e
        .downcast_ref::<std::io::Error>()
        .and_then(std::io::Error::get_ref)
        .and_then(|inner| inner.downcast_ref::<GridError>());
    match grid_err {
        Some(ge) => ge.display_detailed(),
        None => e.to_string(),
    }
}

/// Load the grid and words, solve, print hits on stdout and a summary on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let grid = Grid::load_from_path(&cli.grid)?;
    let mut word_list = match &cli.word_list {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::default(),
    };
    word_list.extend(cli.words.iter().cloned());
    let load_secs = t_load.elapsed().as_secs_f64();
    log::debug!("grid {}x{}, {} word(s)", grid.height(), grid.width(), word_list.len());

    let t_solve = Instant::now();
    let result = solver::solve(&grid, &word_list.words, &cli.search_options())?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.hits)?);
    } else {
        for hit in &result.hits {
            println!("{}", hit.to_record());
        }
    }

    if let SolveStatus::TimedOut { elapsed } = result.status {
        eprintln!("⚠️  Timed out after {:.3}s; some hits may be missing", elapsed.as_secs_f64());
    }

    eprintln!(
        "Loaded {}x{} grid and {} word(s) in {:.3}s; solved in {:.3}s ({} hits).",
        grid.height(),
        grid.width(),
        word_list.len(),
        load_secs,
        solve_secs,
        result.hits.len()
    );

    Ok(())
}
