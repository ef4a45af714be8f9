//! Error types for library generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for library generation operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur while generating or writing the parts table.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Series density is not a positive integer.
    #[error("invalid series density: {steps} (must be a positive integer)")]
    InvalidSeries {
        /// The rejected step count.
        steps: u32,
    },

    /// No package sizes were supplied.
    #[error("no package sizes configured")]
    EmptySizes,

    /// No decade multipliers were supplied.
    #[error("no decade multipliers configured")]
    EmptyDecades,

    /// Package size code outside the recognised set.
    #[error("unsupported package size: {size}")]
    UnsupportedSize {
        /// The rejected size code.
        size: String,
    },

    /// Decade multiplier outside the recognised set.
    #[error("unsupported decade multiplier: {multiplier}")]
    UnsupportedDecade {
        /// The rejected multiplier.
        multiplier: u64,
    },

    /// Failed to create the output file.
    #[error("failed to create output file: {path}")]
    FileCreate {
        /// Path to the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the table to the output sink.
    #[error("failed to write library table")]
    TableWrite {
        /// Underlying CSV/I/O error.
        #[source]
        source: csv::Error,
    },
}

impl LibraryError {
    /// Creates an unsupported package size error.
    pub fn unsupported_size(size: impl Into<String>) -> Self {
        Self::UnsupportedSize { size: size.into() }
    }

    /// Creates an unsupported decade multiplier error.
    #[must_use]
    pub const fn unsupported_decade(multiplier: u64) -> Self {
        Self::UnsupportedDecade { multiplier }
    }

    /// Creates a file creation error.
    pub fn file_create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileCreate {
            path: path.into(),
            source,
        }
    }
}

impl From<csv::Error> for LibraryError {
    fn from(source: csv::Error) -> Self {
        Self::TableWrite { source }
    }
}
