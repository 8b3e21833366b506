#![allow(unused)] // Not every constant is used by every test binary

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!(env!("CARGO_MANIFEST_DIR"), "..", "tests", "test_files"));

pub static EXPORT_FILE_EXTENSION: &str = "txt";

pub static EXPECTED_TABLE_SUFFIX: &str = "expected.csv";
