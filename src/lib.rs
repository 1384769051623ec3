//! `dataset-loader` reads a fixed set of tabular dataset files (CSV, TSV, Parquet,
//! Excel) from a directory into in-memory [`types::DataSet`]s, printing shape and
//! preview information for each.
//!
//! The primary entrypoint is [`loader::load_datasets`], which resolves the file
//! list (an explicit list, or auto-discovery requiring exactly
//! [`loader::EXPECTED_FILE_COUNT`] files), validates that every file exists, and
//! loads each one through the extension dispatcher in [`readers`].
//!
//! ## Supported formats (dispatched by extension)
//!
//! - **CSV**: `.csv` (comma-delimited)
//! - **TSV**: `.tsv` (tab-delimited)
//! - **Parquet**: `.parquet`
//! - **Excel** (requires the Cargo feature `excel`, on by default): `.xlsx`, `.xls`
//!   (first sheet only)
//!
//! Any other extension is rejected with [`error::LoadError::UnsupportedType`].
//!
//! There is no user-declared schema: each reader infers column types from the
//! file itself. Cells are typed [`types::Value`]s; supported logical types are
//! [`types::DataType::Int64`], [`types::DataType::Float64`],
//! [`types::DataType::Bool`], and [`types::DataType::Utf8`]. Empty cells map to
//! [`types::Value::Null`].
//!
//! ## Quick example
//!
//! ```no_run
//! use dataset_loader::loader::load_datasets;
//!
//! # fn main() -> Result<(), dataset_loader::LoadError> {
//! // Auto-discovery: the directory must hold exactly 5 dataset files.
//! let datasets = load_datasets("datasets", None)?;
//! for (stem, ds) in &datasets {
//!     println!("{stem}: {} rows, {} columns", ds.row_count(), ds.column_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! An explicit file list bypasses the count check:
//!
//! ```no_run
//! use dataset_loader::loader::load_datasets;
//!
//! # fn main() -> Result<(), dataset_loader::LoadError> {
//! let names = vec!["a.csv".to_string(), "b.parquet".to_string()];
//! let datasets = load_datasets("datasets", Some(&names))?;
//! println!("loaded {}", datasets.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: file-list resolution, validation, loading, reporting
//! - [`readers`]: extension dispatch and format-specific readers
//! - [`types`]: in-memory dataset types
//! - [`observe`]: optional per-file load observers (stderr/file/composite)
//! - [`error`]: error types used across loading

pub mod error;
pub mod loader;
pub mod observe;
pub mod readers;
pub mod types;

pub use error::{LoadError, LoadResult};
