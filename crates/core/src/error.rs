use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load one of the input description files.
///
/// Any of these aborts the run before a matrix is built.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Input file does not exist: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON/YAML, or valid syntax with the wrong shape.
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Error type for matrix generation and output.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to serialize matrix: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write matrix to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised only in strict mode; by default unknown keys are skipped.
    #[error("Unknown architecture keys (not in mappings): {}", keys.join(", "))]
    UnknownArchitectures { keys: Vec<String> },
}

/// Convenience result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// A triple skipped because its architecture key has no mapping.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LookupWarning {
    pub image: String,
    pub version: String,
    pub architecture: String,
}

impl fmt::Display for LookupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "architecture '{}' not found in mappings (image {} version {}); skipping",
            self.architecture, self.image, self.version
        )
    }
}
