use csv::Reader;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
pub mod constants;
use constants::{EXPECTED_TABLE_SUFFIX, EXPORT_FILE_EXTENSION, TEST_FILES_DIRECTORY};

pub type ExpectedRankedTable = Vec<(String, usize)>;

/// Lists the export fixtures in the test files directory, sorted by name.
pub fn list_test_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(EXPORT_FILE_EXTENSION)
        })
        .collect();

    files.sort();
    files
}

/// Path of the CSV holding the expected ranking for `test_file_path`
/// (`name.txt` -> `name.expected.csv`).
pub fn get_expected_table_path(test_file_path: &Path) -> PathBuf {
    test_file_path.with_extension(EXPECTED_TABLE_SUFFIX)
}

/// Loads an expected ranked table from a CSV file with `Label,Count` headers.
pub fn load_expected_ranked_table(file_path: &Path) -> Result<ExpectedRankedTable, Box<dyn Error>> {
    let mut ranked_table = ExpectedRankedTable::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let label = record.get(0).unwrap_or_default().to_string();
            let count = record.get(1).unwrap_or_default().trim().parse::<usize>()?;
            ranked_table.push((label, count));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(ranked_table)
}

// Helper function to run the test for each export fixture
pub fn run_test_for_file<F>(test_file_path: &Path, build_ranked_table: F) -> ExpectedRankedTable
where
    F: Fn(&str) -> ExpectedRankedTable,
{
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let actual = build_ranked_table(&raw_text);

    let expected_table_path = get_expected_table_path(test_file_path);
    let expected = load_expected_ranked_table(&expected_table_path).unwrap_or_else(|e| {
        panic!(
            "{} - Failed to load expected table {:?}: {}",
            test_file_path.display(),
            expected_table_path,
            e
        )
    });

    let missing_labels: Vec<&String> = expected
        .iter()
        .map(|(label, _)| label)
        .filter(|label| !actual.iter().any(|(actual_label, _)| actual_label == *label))
        .collect();

    let unexpected_labels: Vec<&String> = actual
        .iter()
        .map(|(label, _)| label)
        .filter(|label| !expected.iter().any(|(expected_label, _)| expected_label == *label))
        .collect();

    assert_eq!(
        actual,
        expected,
        "{} - Ranked table mismatch. Missing: {:?}, Unexpected: {:?}",
        test_file_path.display(),
        missing_labels,
        unexpected_labels
    );

    actual
}
