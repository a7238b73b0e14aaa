// Reusable library API — visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod grid;
pub mod hit;
pub mod log;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::Direction;
pub use grid::Grid;
pub use hit::SearchHit;
pub use solver::{solve, SearchOptions, SolveResult, SolveStatus, SolverError};
