use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the readers and the dataset loader.
///
/// This is a single error enum shared across CSV/TSV/Parquet (and optional Excel) reading
/// plus the directory-level loader checks. All variants are fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "excel")]
    /// Excel reading error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV/TSV reading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Parquet reading error.
    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// The file extension is not in the supported mapping.
    #[error("unsupported file type: {}", path.display())]
    UnsupportedType { path: PathBuf },

    /// One or more resolved dataset paths do not exist.
    #[error("missing dataset files: {}", names.join(", "))]
    MissingFiles { names: Vec<String> },

    /// Auto-discovery found a directory file count other than the expected one.
    #[error(
        "expected {expected} dataset files in {}, found {found}; \
         pass an explicit file list to override",
        dir.display()
    )]
    UnexpectedFileCount {
        dir: PathBuf,
        found: usize,
        expected: usize,
    },

    /// The input is structurally broken (e.g. a workbook with no sheets).
    #[error("malformed input: {message}")]
    Malformed { message: String },

    /// A cell could not be converted into the inferred [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
