use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use dataset_loader::loader::{load_datasets, EXPECTED_FILE_COUNT};
use dataset_loader::types::Value;
use dataset_loader::LoadError;

fn tmp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("dataset-loader-{name}-{nanos}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_csv(dir: &PathBuf, name: &str, rows: usize) {
    let mut content = String::from("v\n");
    for i in 0..rows {
        content.push_str(&format!("{i}\n"));
    }
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn auto_discovery_loads_exactly_five_files() {
    let dir = tmp_dir("auto-five");
    for i in 0..EXPECTED_FILE_COUNT {
        write_csv(&dir, &format!("set{i}.csv"), i + 1);
    }

    let datasets = load_datasets(&dir, None).unwrap();
    assert_eq!(datasets.len(), 5);
    assert_eq!(datasets["set0"].row_count(), 1);
    assert_eq!(datasets["set4"].row_count(), 5);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn auto_discovery_rejects_four_files() {
    let dir = tmp_dir("auto-four");
    for i in 0..4 {
        write_csv(&dir, &format!("set{i}.csv"), 1);
    }

    let err = load_datasets(&dir, None).unwrap_err();
    match err {
        LoadError::UnexpectedFileCount {
            found, expected, ..
        } => {
            assert_eq!(found, 4);
            assert_eq!(expected, 5);
        }
        other => panic!("expected UnexpectedFileCount, got {other}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn auto_discovery_rejects_six_files() {
    let dir = tmp_dir("auto-six");
    for i in 0..6 {
        write_csv(&dir, &format!("set{i}.csv"), 1);
    }

    let err = load_datasets(&dir, None).unwrap_err();
    assert!(matches!(
        err,
        LoadError::UnexpectedFileCount { found: 6, .. }
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn auto_discovery_ignores_subdirectories() {
    let dir = tmp_dir("auto-subdir");
    for i in 0..EXPECTED_FILE_COUNT {
        write_csv(&dir, &format!("set{i}.csv"), 1);
    }
    // A nested directory (with a file inside) must not count or recurse.
    let nested = dir.join("nested");
    fs::create_dir_all(&nested).unwrap();
    write_csv(&nested, "hidden.csv", 1);

    let datasets = load_datasets(&dir, None).unwrap();
    assert_eq!(datasets.len(), 5);
    assert!(!datasets.contains_key("hidden"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_list_bypasses_count_check() {
    let dir = tmp_dir("explicit");
    write_csv(&dir, "a.csv", 2);
    write_csv(&dir, "b.csv", 3);

    let names = vec!["a.csv".to_string(), "b.csv".to_string()];
    let datasets = load_datasets(&dir, Some(&names)).unwrap();

    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets["a"].row_count(), 2);
    assert_eq!(datasets["a"].column_count(), 1);
    assert_eq!(datasets["b"].row_count(), 3);
    assert_eq!(datasets["b"].column_count(), 1);
    assert_eq!(datasets["b"].rows[2][0], Value::Int64(2));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_list_with_missing_file_names_it() {
    let dir = tmp_dir("missing");
    write_csv(&dir, "a.csv", 1);

    let names = vec!["a.csv".to_string(), "nope.csv".to_string()];
    let err = load_datasets(&dir, Some(&names)).unwrap_err();
    match err {
        LoadError::MissingFiles { names } => assert_eq!(names, vec!["nope.csv"]),
        other => panic!("expected MissingFiles, got {other}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_files_error_names_every_absent_file() {
    let dir = tmp_dir("missing-many");

    let names = vec!["x.csv".to_string(), "y.tsv".to_string()];
    let err = load_datasets(&dir, Some(&names)).unwrap_err();
    match err {
        LoadError::MissingFiles { names } => {
            assert_eq!(names, vec!["x.csv", "y.tsv"]);
        }
        other => panic!("expected MissingFiles, got {other}"),
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tmp_dir("unsupported");
    fs::write(dir.join("notes.txt"), "not a dataset").unwrap();

    let names = vec!["notes.txt".to_string()];
    let err = load_datasets(&dir, Some(&names)).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedType { .. }));
    assert!(err.to_string().contains("notes.txt"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = tmp_dir("case");
    write_csv(&dir, "UPPER.CSV", 2);

    let names = vec!["UPPER.CSV".to_string()];
    let datasets = load_datasets(&dir, Some(&names)).unwrap();
    assert_eq!(datasets["UPPER"].row_count(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn mixed_formats_load_through_dispatch() {
    let dir = tmp_dir("mixed");
    write_csv(&dir, "a.csv", 2);
    fs::write(dir.join("b.tsv"), "id\tname\n1\tAda\n").unwrap();

    let names = vec!["a.csv".to_string(), "b.tsv".to_string()];
    let datasets = load_datasets(&dir, Some(&names)).unwrap();
    assert_eq!(datasets["a"].column_count(), 1);
    assert_eq!(datasets["b"].column_count(), 2);
    assert_eq!(datasets["b"].rows[0][1], Value::Utf8("Ada".to_string()));

    let _ = fs::remove_dir_all(&dir);
}
