use crate::constants::{PUBLICATION_YEAR_TAG, PUBLISHER_TAG, SOURCE_TAG};
use crate::types::{FieldTag, FieldValue};

/// Returns the value of the first line in `record` that begins with `tag`.
///
/// Only single lines are considered; continuation lines of a multi-line field are not
/// followed. When the tag occurs on several lines, the first one wins. The value is
/// the remainder of the line with surrounding whitespace trimmed.
///
/// Returns `None` when no line carries the tag.
pub fn extract_field(record: &str, tag: &FieldTag) -> FieldValue {
    if tag.is_empty() {
        return None;
    }

    record
        .lines()
        .find_map(|line| line.strip_prefix(tag))
        .map(|value| value.trim().to_string())
}

/// Source (journal) name of a record.
pub fn extract_source(record: &str) -> FieldValue {
    extract_field(record, SOURCE_TAG)
}

pub fn extract_publisher(record: &str) -> FieldValue {
    extract_field(record, PUBLISHER_TAG)
}

/// Publication year of a record; `None` when absent or not a number.
pub fn extract_publication_year(record: &str) -> Option<u16> {
    extract_field(record, PUBLICATION_YEAR_TAG).and_then(|year| year.parse::<u16>().ok())
}
