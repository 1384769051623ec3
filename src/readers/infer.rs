//! Column type inference for text-shaped sources (CSV/TSV, Excel string cells).
//!
//! There is no user-declared schema: each reader derives one from the file itself.
//! Text cells are classified individually and the per-column classifications are
//! folded into a single [`DataType`].

use crate::error::{LoadError, LoadResult};
use crate::types::{DataType, Value};

/// Classification of a single raw text cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellKind {
    /// Empty/whitespace-only cell; carries no type information.
    Empty,
    /// Parses as `i64`.
    Int,
    /// Parses as `f64` (but not `i64`).
    Float,
    /// Literal `true`/`false` (case-insensitive).
    Bool,
    /// Anything else.
    Text,
}

pub(crate) fn classify(raw: &str) -> CellKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellKind::Empty;
    }
    if trimmed.parse::<i64>().is_ok() {
        return CellKind::Int;
    }
    if trimmed.parse::<f64>().is_ok() {
        return CellKind::Float;
    }
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
        return CellKind::Bool;
    }
    CellKind::Text
}

/// Fold the cell classifications of one column into a column type.
///
/// - all integers -> `Int64`
/// - integers and floats mixed -> `Float64`
/// - all booleans -> `Bool`
/// - anything else (including an all-empty column) -> `Utf8`
pub(crate) fn unify(kinds: impl IntoIterator<Item = CellKind>) -> DataType {
    let mut current: Option<CellKind> = None;
    for kind in kinds {
        if kind == CellKind::Empty {
            continue;
        }
        current = Some(match current {
            None => kind,
            Some(prev) if prev == kind => prev,
            Some(CellKind::Int) if kind == CellKind::Float => CellKind::Float,
            Some(CellKind::Float) if kind == CellKind::Int => CellKind::Float,
            Some(_) => CellKind::Text,
        });
    }

    match current {
        Some(CellKind::Int) => DataType::Int64,
        Some(CellKind::Float) => DataType::Float64,
        Some(CellKind::Bool) => DataType::Bool,
        _ => DataType::Utf8,
    }
}

/// Parse one raw text cell into a typed [`Value`].
///
/// Empty cells map to [`Value::Null`] regardless of column type. `row` is the
/// 1-based row number reported to users on failure.
pub(crate) fn parse_cell(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> LoadResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed.parse::<i64>().map(Value::Int64).map_err(|e| {
            LoadError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            }
        }),
        DataType::Float64 => trimmed.parse::<f64>().map(Value::Float64).map_err(|e| {
            LoadError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            }
        }),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool).map_err(|message| {
            LoadError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message,
            }
        }),
    }
}

pub(crate) fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
