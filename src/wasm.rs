use crate::errors::HitParseError;
use crate::grid::Grid;
use crate::hit::SearchHit;
use crate::log::init_logger;
use crate::solver::{solve_rows, SearchOptions, SolverError};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G003", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // report the grid problem itself rather than the wrapper
        match &e {
            SolverError::Grid(ge) => WasmError {
                code: ge.code().to_string(),
                message: ge.to_string(),
                description: ge.description().to_string(),
                details: ge.details().to_string(),
                help: ge.help().map(str::to_string),
            },
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<HitParseError> for WasmError {
    fn from(e: HitParseError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn internal_serialization_error(code: &str, what: &str, e: serde_wasm_bindgen::Error) -> WasmError {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize logging with the specified debug setting.
///
/// Must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    hits: Vec<SearchHit>,
    status: String,
}

/// JS entry: (rows: string[], words: string[], case_sensitive: boolean, allow_reversed: boolean)
/// returns `{ hits: Array<{word, column, row, direction}>, status: "complete" | "timed_out" }`
#[wasm_bindgen]
pub fn solve_grid_wasm(
    rows: JsValue,
    words: JsValue,
    case_sensitive: bool,
    allow_reversed: bool,
) -> Result<JsValue, JsValue> {
    let rows: Vec<String> = serde_wasm_bindgen::from_value(rows).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("rows must be string[]: {e}"),
        description: "Invalid grid format".to_string(),
        details: "The rows parameter must be a JavaScript array of strings, one per grid row.".to_string(),
        help: Some("Pass equal-length strings, e.g. ['CAT', 'ARA', 'TAT']".to_string()),
    })?;
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM002".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog']".to_string()),
    })?;

    let options = SearchOptions::default()
        .with_case_sensitive(case_sensitive)
        .with_allow_reversed(allow_reversed);
    let result = solve_rows(&rows, &words, &options).map_err(WasmError::from)?;

    let wasm_result = WasmSolveResult {
        status: result.status.as_str().to_string(),
        hits: result.hits,
    };

    serde_wasm_bindgen::to_value(&wasm_result)
        .map_err(|e| internal_serialization_error("WASM003", "solver result", e).into())
}

/// Parse free-form grid text (one row per line, spaces ignored) into rows.
///
/// # Errors
/// Returns a `JsValue` error if the text is not a rectangular grid.
#[wasm_bindgen]
pub fn parse_grid(text: &str) -> Result<JsValue, JsValue> {
    let grid = Grid::parse_from_str(text).map_err(|ge| WasmError::from(SolverError::Grid(ge)))?;
    let rows: Vec<String> = grid.rows().map(|row| row.iter().collect()).collect();
    serde_wasm_bindgen::to_value(&rows)
        .map_err(|e| internal_serialization_error("WASM004", "grid", e).into())
}

/// Parse a newline-separated word list (blank and `#` lines skipped).
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text);
    serde_wasm_bindgen::to_value(&word_list.words)
        .map_err(|e| internal_serialization_error("WASM005", "word list", e).into())
}

/// Parse one `word;column;row;direction` record into a hit object.
#[wasm_bindgen]
pub fn parse_hit_record(record: &str) -> Result<JsValue, JsValue> {
    let hit: SearchHit = record.parse().map_err(WasmError::from)?;
    serde_wasm_bindgen::to_value(&hit)
        .map_err(|e| internal_serialization_error("WASM006", "hit", e).into())
}

/// Generate a debug report users can paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(
    rows: usize,
    columns: usize,
    word_count: usize,
    error_message: &str,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String is infallible
    let _ = writeln!(&mut report, "=== WORDSEARCH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Grid: {} rows x {} columns", rows, columns);
    let _ = writeln!(&mut report, "Words: {}", word_count);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
