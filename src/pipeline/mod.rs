//! Import pipeline
//!
//! Sequential orchestration of the five stages: prepare workspace, extract,
//! sanitize and select, publish, restore the base branch.

mod progress;
mod run;

pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use run::{list_archives, run_import, RunPaths, RunReport};
