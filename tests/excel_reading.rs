#![cfg(feature = "excel_test_writer")]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::Workbook;

use dataset_loader::readers::excel::read_excel_from_path;
use dataset_loader::types::{DataType, Value};

fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("dataset-loader-{name}-{nanos}.xlsx"))
}

fn write_people_xlsx(path: &PathBuf) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();

    // header
    ws.write_string(0, 0, "id").unwrap();
    ws.write_string(0, 1, "name").unwrap();
    ws.write_string(0, 2, "score").unwrap();
    ws.write_string(0, 3, "active").unwrap();

    ws.write_number(1, 0, 1).unwrap();
    ws.write_string(1, 1, "Ada").unwrap();
    ws.write_number(1, 2, 98.5).unwrap();
    ws.write_boolean(1, 3, true).unwrap();

    ws.write_number(2, 0, 2).unwrap();
    ws.write_string(2, 1, "Grace").unwrap();
    ws.write_number(2, 2, 87.25).unwrap();
    ws.write_boolean(2, 3, false).unwrap();

    wb.save(path).unwrap();
}

#[test]
fn read_excel_happy_path() {
    let path = tmp_file("people");
    write_people_xlsx(&path);

    let ds = read_excel_from_path(&path).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.column_count(), 4);
    assert_eq!(ds.rows[0][0], Value::Int64(1));
    assert_eq!(ds.rows[0][1], Value::Utf8("Ada".to_string()));
    assert_eq!(ds.rows[1][3], Value::Bool(false));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn read_excel_infers_column_types() {
    let path = tmp_file("types");
    write_people_xlsx(&path);

    let ds = read_excel_from_path(&path).unwrap();
    let types: Vec<DataType> = ds.schema.fields.iter().map(|f| f.data_type).collect();
    assert_eq!(
        types,
        vec![
            DataType::Int64,
            DataType::Utf8,
            DataType::Float64,
            DataType::Bool,
        ]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn read_excel_uses_first_sheet_only() {
    let path = tmp_file("multi");

    let mut wb = Workbook::new();
    let ws1 = wb.add_worksheet();
    ws1.set_name("Sheet1").unwrap();
    ws1.write_string(0, 0, "id").unwrap();
    ws1.write_number(1, 0, 1).unwrap();
    ws1.write_number(2, 0, 2).unwrap();

    let ws2 = wb.add_worksheet();
    ws2.set_name("Second").unwrap();
    ws2.write_string(0, 0, "other").unwrap();
    ws2.write_number(1, 0, 99).unwrap();

    wb.save(&path).unwrap();

    let ds = read_excel_from_path(&path).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(
        ds.schema.field_names().collect::<Vec<_>>(),
        vec!["id"]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn read_excel_skips_leading_blank_rows() {
    let path = tmp_file("blank-rows");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();
    // Header on row 3 (0-based row 2); rows 0-1 left empty.
    ws.write_string(2, 0, "id").unwrap();
    ws.write_number(3, 0, 1).unwrap();

    wb.save(&path).unwrap();

    let ds = read_excel_from_path(&path).unwrap();
    assert_eq!(ds.row_count(), 1);
    assert_eq!(ds.rows[0][0], Value::Int64(1));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn read_excel_string_numbers_coerce_to_inferred_type() {
    let path = tmp_file("string-nums");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1").unwrap();
    ws.write_string(0, 0, "id").unwrap();
    ws.write_string(1, 0, "1").unwrap();
    ws.write_string(2, 0, "2").unwrap();

    wb.save(&path).unwrap();

    let ds = read_excel_from_path(&path).unwrap();
    assert_eq!(ds.schema.fields[0].data_type, DataType::Int64);
    assert_eq!(ds.rows[0][0], Value::Int64(1));

    let _ = std::fs::remove_file(&path);
}
