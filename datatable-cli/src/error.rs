//! CLI errors

use std::path::PathBuf;

use datatable_lib::TableError;

/// Errors that end the program with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: expected a JSON array of objects")]
    NotAnArray { path: PathBuf },

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Column '{0}' cannot be sorted")]
    NotSortable(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl CliError {
    /// Creates a read error for a path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON error for a path.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
