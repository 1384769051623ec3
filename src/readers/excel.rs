#![cfg(feature = "excel")]

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{LoadError, LoadResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::infer::{self, CellKind};

/// Read the first sheet of an Excel workbook (`.xlsx`, `.xls`) into an in-memory `DataSet`.
///
/// Behavior:
/// - Uses the first sheet in the workbook (pandas `read_excel` default)
/// - Detects the first non-empty row as the header row
/// - Infers column types from the typed cells below the header
pub fn read_excel_from_path(path: impl AsRef<Path>) -> LoadResult<DataSet> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::Malformed {
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet)?;

    read_sheet_range(&range)
}

fn read_sheet_range(range: &calamine::Range<Data>) -> LoadResult<DataSet> {
    let (header_row_idx, header_cells) = find_header_row(range)?;

    let data_rows: Vec<&[Data]> = range
        .rows()
        .enumerate()
        .filter(|(idx0, _)| *idx0 > header_row_idx)
        .map(|(_, row)| row)
        .collect();

    let fields: Vec<Field> = header_cells
        .iter()
        .enumerate()
        .map(|(col_idx, name)| {
            let column_type = infer::unify(
                data_rows
                    .iter()
                    .map(|row| classify_cell(row.get(col_idx).unwrap_or(&Data::Empty))),
            );
            Field::new(name.clone(), column_type)
        })
        .collect();
    let schema = Schema::new(fields);

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(data_rows.len());
    for (offset, row) in data_rows.iter().enumerate() {
        // Report 1-based row number (Excel-like).
        let user_row = header_row_idx + offset + 2;

        let mut out_row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (col_idx, field) in schema.fields.iter().enumerate() {
            let cell = row.get(col_idx).unwrap_or(&Data::Empty);
            out_row.push(convert_cell(user_row, &field.name, field.data_type, cell)?);
        }
        rows.push(out_row);
    }

    Ok(DataSet::new(schema, rows))
}

fn find_header_row(range: &calamine::Range<Data>) -> LoadResult<(usize, Vec<String>)> {
    for (idx0, row) in range.rows().enumerate() {
        if row.iter().any(|c| !matches!(c, Data::Empty)) {
            let cells = row.iter().map(cell_to_header_string).collect();
            return Ok((idx0, cells));
        }
    }
    Err(LoadError::Malformed {
        message: "sheet has no non-empty rows (no header row found)".to_string(),
    })
}

fn classify_cell(c: &Data) -> CellKind {
    match c {
        Data::Empty => CellKind::Empty,
        Data::Int(_) => CellKind::Int,
        // Excel stores every number as a double; treat integral values as
        // integers so whole-number columns come back as Int64.
        Data::Float(f) if f.fract() == 0.0 => CellKind::Int,
        Data::Float(_) => CellKind::Float,
        Data::Bool(_) => CellKind::Bool,
        Data::String(s) => infer::classify(s),
        _ => CellKind::Text,
    }
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(f) => f.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => "".to_string(),
    }
}

fn convert_cell(row: usize, column: &str, data_type: DataType, c: &Data) -> LoadResult<Value> {
    if matches!(c, Data::Empty) {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(cell_to_string(c))),
        DataType::Bool => parse_bool_cell(row, column, c).map(Value::Bool),
        DataType::Int64 => parse_i64_cell(row, column, c).map(Value::Int64),
        DataType::Float64 => parse_f64_cell(row, column, c).map(Value::Float64),
    }
}

fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        _ => c.to_string(),
    }
}

fn parse_bool_cell(row: usize, column: &str, c: &Data) -> LoadResult<bool> {
    match c {
        Data::Bool(b) => Ok(*b),
        Data::Int(i) => Ok(*i != 0),
        Data::Float(f) => Ok(*f != 0.0),
        Data::String(s) => infer::parse_bool(s.trim()).map_err(|message| LoadError::ParseError {
            row,
            column: column.to_string(),
            raw: s.clone(),
            message,
        }),
        _ => Err(LoadError::ParseError {
            row,
            column: column.to_string(),
            raw: c.to_string(),
            message: "expected bool".to_string(),
        }),
    }
}

fn parse_i64_cell(row: usize, column: &str, c: &Data) -> LoadResult<i64> {
    match c {
        Data::Int(i) => Ok(*i),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                Ok(*f as i64)
            } else {
                Err(LoadError::ParseError {
                    row,
                    column: column.to_string(),
                    raw: c.to_string(),
                    message: "expected integer (got non-integer float)".to_string(),
                })
            }
        }
        Data::String(s) => s.trim().parse::<i64>().map_err(|e| LoadError::ParseError {
            row,
            column: column.to_string(),
            raw: s.clone(),
            message: e.to_string(),
        }),
        _ => Err(LoadError::ParseError {
            row,
            column: column.to_string(),
            raw: c.to_string(),
            message: "expected integer".to_string(),
        }),
    }
}

fn parse_f64_cell(row: usize, column: &str, c: &Data) -> LoadResult<f64> {
    match c {
        Data::Float(f) => Ok(*f),
        Data::Int(i) => Ok(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().map_err(|e| LoadError::ParseError {
            row,
            column: column.to_string(),
            raw: s.clone(),
            message: e.to_string(),
        }),
        _ => Err(LoadError::ParseError {
            row,
            column: column.to_string(),
            raw: c.to_string(),
            message: "expected number".to_string(),
        }),
    }
}
