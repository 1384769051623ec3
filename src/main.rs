//! Command-line front end: load a directory of dataset files and preview them.

use std::path::PathBuf;

use clap::Parser;

use dataset_loader::loader::load_datasets;

#[derive(Parser)]
#[command(name = "dataset-loader")]
#[command(
    about = "Load a directory of tabular dataset files (CSV, TSV, Parquet, Excel) and preview them",
    long_about = None
)]
struct Cli {
    /// Path to the datasets directory
    #[arg(long, default_value = "datasets")]
    data_dir: PathBuf,

    /// Comma-separated dataset filenames to load (bypasses the file-count check)
    #[arg(long, default_value = "")]
    expected: String,
}

fn main() {
    let cli = Cli::parse();

    let expected: Vec<String> = cli
        .expected
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    let expected = if expected.is_empty() {
        None
    } else {
        Some(expected)
    };

    if let Err(e) = load_datasets(&cli.data_dir, expected.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn expected_list_splits_and_trims() {
        let cli = Cli::parse_from([
            "dataset-loader",
            "--expected",
            " a.csv, b.tsv ,,c.parquet ",
        ]);
        let names: Vec<String> = cli
            .expected
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        assert_eq!(names, vec!["a.csv", "b.tsv", "c.parquet"]);
    }

    #[test]
    fn data_dir_defaults_to_datasets() {
        let cli = Cli::parse_from(["dataset-loader"]);
        assert_eq!(cli.data_dir, std::path::PathBuf::from("datasets"));
        assert!(cli.expected.is_empty());
    }
}
