//! Command-line interface.
//!
//! `args` defines the clap surface, `run` owns dispatch and error
//! reporting, `commands` implements the subcommand handlers.

pub mod args;
pub mod commands;
pub mod run;

pub use run::run;
