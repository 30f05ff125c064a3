//! CLI commands
//!
//! Command implementations for the `zipmr` binary.

mod import;

pub use import::run_import_command;
