//! Error types for the client generator.
//!
//! Every variant is terminal for the invoking process; the binary maps all
//! of them to exit code 1.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the stored argument record.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access argument record {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed argument record {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize argument record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Top-level error for a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No `--file` given and nothing stored from a previous run.
    #[error("The argument '--file' is not provided, and there are no saved arguments.")]
    MissingArguments,

    /// The generator container ran but exited unsuccessfully.
    #[error("generator process failed: {}", describe_status(.code))]
    ProcessFailure { code: Option<i32> },

    /// The container runtime binary could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
