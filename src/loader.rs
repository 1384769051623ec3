//! Dataset loader: resolves which files to load, validates them, loads each
//! through the extension dispatcher, and reports shape + preview per file.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::error::{LoadError, LoadResult};
use crate::observe::{LoadContext, LoadObserver, LoadSeverity, LoadStats, severity_for_error};
use crate::readers::{self, FileFormat};
use crate::types::DataSet;

/// Number of files auto-discovery expects to find in the data directory.
///
/// The data directory is assumed to hold a fixed five-file dataset layout;
/// callers with a different layout pass an explicit file list instead.
pub const EXPECTED_FILE_COUNT: usize = 5;

/// Options controlling loader behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Number of rows shown in each per-file preview.
    pub preview_rows: usize,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("preview_rows", &self.preview_rows)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the dataset files under `data_dir` with default [`LoadOptions`].
///
/// - With `expected` filenames: each name is resolved against `data_dir`, no
///   count check.
/// - Without: every regular file directly inside `data_dir` is taken
///   (non-recursive) and the count must equal [`EXPECTED_FILE_COUNT`].
///
/// All resolved paths must exist ([`LoadError::MissingFiles`] names every
/// absent one). Files load in lexicographic full-path order; each loaded
/// table is reported to stdout (shape line, first-rows preview, separator)
/// and keyed by its filename stem in the returned map.
pub fn load_datasets(
    data_dir: impl AsRef<Path>,
    expected: Option<&[String]>,
) -> LoadResult<BTreeMap<String, DataSet>> {
    load_datasets_with_options(data_dir, expected, &LoadOptions::default())
}

/// Like [`load_datasets`], with explicit [`LoadOptions`].
pub fn load_datasets_with_options(
    data_dir: impl AsRef<Path>,
    expected: Option<&[String]>,
    options: &LoadOptions,
) -> LoadResult<BTreeMap<String, DataSet>> {
    let data_dir = data_dir.as_ref();

    let mut paths = resolve_paths(data_dir, expected)?;

    let missing: Vec<String> = paths
        .iter()
        .filter(|p| !p.exists())
        .map(|p| display_name(p))
        .collect();
    if !missing.is_empty() {
        let err = LoadError::MissingFiles { names: missing };
        // No file was dispatched yet; the context carries the directory.
        let ctx = LoadContext {
            path: data_dir.to_path_buf(),
            format: None,
        };
        report_failure(options, &ctx, &err);
        return Err(err);
    }

    // Lexicographic order over the full path string, not just the filename.
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let mut datasets: BTreeMap<String, DataSet> = BTreeMap::new();
    for path in paths {
        let ds = load_one(&path, options)?;
        print!(
            "{}",
            render_report(&display_name(&path), &ds, options.preview_rows)
        );

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_name(&path));
        datasets.insert(stem, ds);
    }

    Ok(datasets)
}

/// Render the per-file report: shape line, preview of the first rows, and a
/// separator line.
pub fn render_report(name: &str, ds: &DataSet, preview_rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Loaded {name}: {} rows, {} columns",
        ds.row_count(),
        ds.column_count()
    );
    out.push_str(&ds.preview(preview_rows));
    let _ = writeln!(out, "{}", "-".repeat(80));
    out
}

fn load_one(path: &Path, options: &LoadOptions) -> LoadResult<DataSet> {
    let format = FileFormat::detect(path)?;
    let ctx = LoadContext {
        path: path.to_path_buf(),
        format: Some(format),
    };

    let result = readers::read_table_with_format(path, format);

    match &result {
        Ok(ds) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_loaded(
                    &ctx,
                    LoadStats {
                        rows: ds.row_count(),
                        columns: ds.column_count(),
                    },
                );
            }
        }
        Err(e) => report_failure(options, &ctx, e),
    }

    result
}

fn report_failure(options: &LoadOptions, ctx: &LoadContext, error: &LoadError) {
    if let Some(obs) = options.observer.as_ref() {
        let sev = severity_for_error(error);
        obs.on_failure(ctx, sev, error);
        if sev >= options.alert_at_or_above {
            obs.on_alert(ctx, sev, error);
        }
    }
}

fn resolve_paths(data_dir: &Path, expected: Option<&[String]>) -> LoadResult<Vec<PathBuf>> {
    match expected {
        Some(names) => Ok(names.iter().map(|name| data_dir.join(name)).collect()),
        None => {
            let mut paths: Vec<PathBuf> = Vec::new();
            for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1) {
                let entry = entry.map_err(std::io::Error::from)?;
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            if paths.len() != EXPECTED_FILE_COUNT {
                return Err(LoadError::UnexpectedFileCount {
                    dir: data_dir.to_path_buf(),
                    found: paths.len(),
                    expected: EXPECTED_FILE_COUNT,
                });
            }
            Ok(paths)
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
