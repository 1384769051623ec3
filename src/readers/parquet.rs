//! Parquet reading implementation.

use std::collections::HashMap;
use std::path::Path;

use parquet::basic::Type as PhysicalType;
use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::SerializedFileReader;
use parquet::record::Field as ParquetField;

use crate::error::{LoadError, LoadResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Read a Parquet file into an in-memory `DataSet`.
///
/// Notes:
/// - The schema is derived from the file's own leaf columns (by column path string)
/// - Uses the Parquet record API (`RowIter`); good enough for full in-memory loads
pub fn read_parquet_from_path(path: impl AsRef<Path>) -> LoadResult<DataSet> {
    let reader = SerializedFileReader::try_from(path.as_ref())?;
    let schema = schema_from_parquet_metadata(&reader);

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (idx0, row_res) in reader.into_iter().enumerate() {
        let row_num = idx0 + 1;
        let row = row_res?;

        // Build a name->Field map for lookup.
        let mut map: HashMap<&str, &ParquetField> = HashMap::new();
        for (name, field) in row.get_column_iter() {
            map.insert(name.as_str(), field);
        }

        let mut out_row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for f in &schema.fields {
            let v = map.get(f.name.as_str()).ok_or_else(|| LoadError::Malformed {
                message: format!("row {row_num} missing column '{}'", f.name),
            })?;
            out_row.push(convert_parquet_field(row_num, &f.name, f.data_type, v)?);
        }
        rows.push(out_row);
    }

    Ok(DataSet::new(schema, rows))
}

fn schema_from_parquet_metadata(reader: &SerializedFileReader<std::fs::File>) -> Schema {
    let columns = reader
        .metadata()
        .file_metadata()
        .schema_descr()
        .columns()
        .iter()
        .map(|c| {
            let data_type = match c.physical_type() {
                PhysicalType::BOOLEAN => DataType::Bool,
                PhysicalType::INT32 | PhysicalType::INT64 => DataType::Int64,
                PhysicalType::FLOAT | PhysicalType::DOUBLE => DataType::Float64,
                // BYTE_ARRAY, FIXED_LEN_BYTE_ARRAY, INT96: read as text.
                _ => DataType::Utf8,
            };
            Field::new(c.path().string(), data_type)
        })
        .collect();
    Schema::new(columns)
}

fn convert_parquet_field(
    row: usize,
    column: &str,
    data_type: DataType,
    f: &ParquetField,
) -> LoadResult<Value> {
    if matches!(f, ParquetField::Null) {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::Utf8 => match f {
            ParquetField::Str(s) => Ok(Value::Utf8(s.clone())),
            ParquetField::Bytes(b) => Ok(Value::Utf8(String::from_utf8_lossy(b.data()).into_owned())),
            _ => Err(LoadError::ParseError {
                row,
                column: column.to_string(),
                raw: f.to_string(),
                message: "expected string".to_string(),
            }),
        },
        DataType::Bool => match f {
            ParquetField::Bool(b) => Ok(Value::Bool(*b)),
            _ => Err(LoadError::ParseError {
                row,
                column: column.to_string(),
                raw: f.to_string(),
                message: "expected bool".to_string(),
            }),
        },
        DataType::Int64 => match f {
            ParquetField::Byte(v) => Ok(Value::Int64(i64::from(*v))),
            ParquetField::Short(v) => Ok(Value::Int64(i64::from(*v))),
            ParquetField::Int(v) => Ok(Value::Int64(i64::from(*v))),
            ParquetField::Long(v) => Ok(Value::Int64(*v)),
            ParquetField::UByte(v) => Ok(Value::Int64(i64::from(*v))),
            ParquetField::UShort(v) => Ok(Value::Int64(i64::from(*v))),
            ParquetField::UInt(v) => Ok(Value::Int64(i64::from(*v))),
            ParquetField::ULong(v) => i64::try_from(*v)
                .map(Value::Int64)
                .map_err(|_| LoadError::ParseError {
                    row,
                    column: column.to_string(),
                    raw: f.to_string(),
                    message: "u64 out of range for i64".to_string(),
                }),
            _ => Err(LoadError::ParseError {
                row,
                column: column.to_string(),
                raw: f.to_string(),
                message: "expected integer".to_string(),
            }),
        },
        DataType::Float64 => match f {
            ParquetField::Float(v) => Ok(Value::Float64(f64::from(*v))),
            ParquetField::Double(v) => Ok(Value::Float64(*v)),
            _ => Err(LoadError::ParseError {
                row,
                column: column.to_string(),
                raw: f.to_string(),
                message: "expected number".to_string(),
            }),
        },
    }
}
