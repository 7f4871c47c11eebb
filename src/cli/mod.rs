//! CLI support for rulesql
//!
//! Provides programmatic access to the `rulesql` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod check;
mod compile;
mod operators;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use compile::{CompileRequest, execute_compile};
pub use operators::{operator_reference, sql_shape};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parsing or compiling the filter failed
    #[error(transparent)]
    Filter(#[from] crate::Error),

    /// Serializing output failed
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No filter provided
    #[error("No filter provided. Use --query or pipe JSON to stdin.")]
    NoInput,
}
