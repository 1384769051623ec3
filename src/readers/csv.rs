//! CSV/TSV reading implementation.

use std::path::Path;

use crate::error::LoadResult;
use crate::types::{DataSet, Field, Schema, Value};

use super::infer;

/// Read a delimited text file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first record is the header row and provides the column names.
/// - Column types are inferred from the data (two passes over the records).
/// - Empty cells map to [`Value::Null`].
pub fn read_delimited_from_path(
    path: impl AsRef<Path>,
    delimiter: u8,
) -> LoadResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)?;
    read_delimited_from_reader(&mut rdr)
}

/// Read delimited data from an existing CSV reader.
pub fn read_delimited_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> LoadResult<DataSet> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut records: Vec<csv::StringRecord> = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }

    let fields: Vec<Field> = headers
        .iter()
        .enumerate()
        .map(|(col_idx, name)| {
            let column_type = infer::unify(
                records
                    .iter()
                    .map(|rec| infer::classify(rec.get(col_idx).unwrap_or(""))),
            );
            Field::new(name.clone(), column_type)
        })
        .collect();
    let schema = Schema::new(fields);

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());
    for (row_idx0, record) in records.iter().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (col_idx, field) in schema.fields.iter().enumerate() {
            let raw = record.get(col_idx).unwrap_or("");
            row.push(infer::parse_cell(user_row, &field.name, field.data_type, raw)?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema, rows))
}
