//! File-type dispatch and format-specific readers.
//!
//! [`read_table`] inspects the lowercased file extension, picks the matching reader,
//! and produces an in-memory [`crate::types::DataSet`]. Extensions outside the
//! supported set are rejected with [`crate::error::LoadError::UnsupportedType`].
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`parquet`]
//! - [`excel`] (feature-gated behind `excel`)

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
mod infer;
pub mod parquet;

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::DataSet;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// Apache Parquet.
    Parquet,
    /// Excel spreadsheet, first sheet only (feature-gated behind `excel`).
    Excel,
}

impl FileFormat {
    /// Parse a file format from a file extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            "parquet" => Some(Self::Parquet),
            "xlsx" | "xls" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    ///
    /// Paths with no extension or an unrecognized one fail with
    /// [`LoadError::UnsupportedType`].
    pub fn detect(path: &Path) -> LoadResult<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| LoadError::UnsupportedType {
                path: path.to_path_buf(),
            })
    }
}

/// Read a single tabular file into a [`DataSet`], dispatching on its extension.
pub fn read_table(path: impl AsRef<Path>) -> LoadResult<DataSet> {
    let path = path.as_ref();
    let format = FileFormat::detect(path)?;
    read_table_with_format(path, format)
}

/// Read a single tabular file with an already-detected [`FileFormat`].
pub fn read_table_with_format(path: impl AsRef<Path>, format: FileFormat) -> LoadResult<DataSet> {
    let path = path.as_ref();
    match format {
        FileFormat::Csv => csv::read_delimited_from_path(path, b','),
        FileFormat::Tsv => csv::read_delimited_from_path(path, b'\t'),
        FileFormat::Parquet => parquet::read_parquet_from_path(path),
        FileFormat::Excel => read_excel_dispatch(path),
    }
}

fn read_excel_dispatch(path: &Path) -> LoadResult<DataSet> {
    // Avoid an unused warning when the feature is off.
    let _ = path;

    #[cfg(feature = "excel")]
    {
        excel::read_excel_from_path(path)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(LoadError::Malformed {
            message: "excel support not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_extension_recognizes_supported_set() {
        assert_eq!(FileFormat::from_extension("csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_extension("tsv"), Some(FileFormat::Tsv));
        assert_eq!(
            FileFormat::from_extension("parquet"),
            Some(FileFormat::Parquet)
        );
        assert_eq!(FileFormat::from_extension("xlsx"), Some(FileFormat::Excel));
        assert_eq!(FileFormat::from_extension("xls"), Some(FileFormat::Excel));
    }

    #[test]
    fn from_extension_is_case_insensitive() {
        assert_eq!(FileFormat::from_extension("CSV"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_extension("Xlsx"), Some(FileFormat::Excel));
    }

    #[test]
    fn from_extension_rejects_unknown() {
        assert_eq!(FileFormat::from_extension("json"), None);
        assert_eq!(FileFormat::from_extension("txt"), None);
        assert_eq!(FileFormat::from_extension(""), None);
    }

    #[test]
    fn detect_fails_without_extension() {
        let err = FileFormat::detect(Path::new("data/no_extension")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedType { .. }));
    }
}
