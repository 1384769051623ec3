//! Observer hooks for load outcomes.
//!
//! The loader reports one event per file to an optional [`LoadObserver`]:
//! `on_loaded` on success, `on_failure` on failure, and `on_alert` when the
//! failure's computed [`LoadSeverity`] meets the configured threshold. A
//! failed pre-flight existence check reports a single missing-files failure
//! before the error propagates.

use std::error::Error as StdError;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LoadError;
use crate::readers::FileFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about one load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path (the data directory for pre-dispatch failures).
    pub path: PathBuf,
    /// Format dispatched to; `None` when the failure occurred before dispatch
    /// (e.g. missing files).
    pub format: Option<FileFormat>,
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when a file loads successfully.
    fn on_loaded(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a file fails to load.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Classify an error for observer callbacks.
///
/// I/O-shaped failures (including I/O wrapped inside CSV/Parquet errors) are
/// Critical; everything else is Error.
pub fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Io(_) => LoadSeverity::Critical,
        LoadError::MissingFiles { .. } => LoadSeverity::Critical,
        LoadError::Parquet(err) => {
            if error_chain_contains_io(err) {
                LoadSeverity::Critical
            } else {
                LoadSeverity::Error
            }
        }
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        #[cfg(feature = "excel")]
        LoadError::Excel(_) => LoadSeverity::Error,
        LoadError::UnsupportedType { .. } => LoadSeverity::Error,
        LoadError::UnexpectedFileCount { .. } => LoadSeverity::Error,
        LoadError::Malformed { .. } => LoadSeverity::Error,
        LoadError::ParseError { .. } => LoadSeverity::Error,
    }
}

fn format_label(format: Option<FileFormat>) -> String {
    match format {
        Some(f) => format!("{f:?}"),
        None => "unknown".to_string(),
    }
}

fn error_chain_contains_io(e: &(dyn StdError + 'static)) -> bool {
    let mut cur: Option<&(dyn StdError + 'static)> = Some(e);
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_loaded(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_loaded(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_loaded(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] format={} path={} rows={} columns={}",
            format_label(ctx.format),
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        eprintln!(
            "[load][{:?}] format={} path={} err={}",
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        eprintln!(
            "[ALERT][load][{:?}] format={} path={} err={}",
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        );
    }
}

/// Appends load events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_loaded(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} ok format={} path={} rows={} columns={}",
            unix_ts(),
            format_label(ctx.format),
            ctx.path.display(),
            stats.rows,
            stats.columns
        ));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_line(&format!(
            "{} fail severity={:?} format={} path={} err={}",
            unix_ts(),
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} format={} path={} err={}",
            unix_ts(),
            severity,
            format_label(ctx.format),
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
