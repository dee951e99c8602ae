//! Error types for loading reports and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Problems in a raw engine result table or a result set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResultsError {
    #[error("expected a labels line containing `text_size`")]
    MissingLabels,

    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },

    #[error("results for engine `{0}` already registered")]
    DuplicateEngine(String),
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum BenchPlotError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("benchmark `{benchmark}`, engine `{engine}`: {source}")]
    Results {
        benchmark: String,
        engine: String,
        #[source]
        source: ResultsError,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("viewer error: {0}")]
    Viewer(String),
}
