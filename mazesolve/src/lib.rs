//! mazesolve — command-line front end for the gridmaze solver.
//!
//! Reading, option handling and board rendering live here; the search itself
//! is in `gridmaze-paths`.

pub mod cli;
pub mod render;

pub use cli::{Args, RenderOptions, report, report_json};
