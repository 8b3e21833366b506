use crate::constants::BYTE_ORDER_MARK;
use crate::types::Record;
use log::debug;

/// Partitions an export into its records.
///
/// A record starts at every line beginning with `marker` and runs up to, but not
/// including, the next such line (or the end of `corpus`). Each record therefore
/// stops at the first marker that follows it, never a later one. Text before the
/// first marker line (export header lines) belongs to no record.
///
/// Absence of any marker is not an error: the result is simply empty.
///
/// # Example
/// ```
/// use journal_cloud::split_records;
///
/// let records = split_records("PT A\nSO X\nPT B\nSO Y", "PT ");
/// assert_eq!(records, vec!["PT A\nSO X\n", "PT B\nSO Y"]);
/// ```
pub fn split_records(corpus: &str, marker: &str) -> Vec<Record> {
    if marker.is_empty() {
        return Vec::new();
    }

    let corpus = corpus.strip_prefix(BYTE_ORDER_MARK).unwrap_or(corpus);

    let mut records: Vec<Record> = Vec::new();
    let mut record_start: Option<usize> = None;
    let mut offset = 0;

    for line in corpus.split_inclusive('\n') {
        if line.starts_with(marker) {
            if let Some(start) = record_start {
                records.push(corpus[start..offset].to_string());
            }
            record_start = Some(offset);
        }
        offset += line.len();
    }

    if let Some(start) = record_start {
        records.push(corpus[start..].to_string());
    }

    debug!("Split {} records using marker {:?}", records.len(), marker);

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_yields_no_records() {
        assert!(split_records("", "PT ").is_empty());
    }

    #[test]
    fn test_corpus_without_marker_yields_no_records() {
        assert!(split_records("FN Export\nVR 1.0\nSO Journal X\n", "PT ").is_empty());
    }

    #[test]
    fn test_record_stops_at_next_marker() {
        let records = split_records("PT A\nSO X\nPT B\nSO Y\nPT C\nSO Z\n", "PT ");

        assert_eq!(records, vec!["PT A\nSO X\n", "PT B\nSO Y\n", "PT C\nSO Z\n"]);
    }

    #[test]
    fn test_last_record_runs_to_end_of_input() {
        let records = split_records("PT A\nSO X\nER\n\nEF", "PT ");

        assert_eq!(records, vec!["PT A\nSO X\nER\n\nEF"]);
    }

    #[test]
    fn test_marker_must_start_the_line() {
        // "PT " inside a title is not a record boundary
        let records = split_records("PT J\nTI A PT study\n  PT indented\nPT J\n", "PT ");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], "PT J\nTI A PT study\n  PT indented\n");
    }

    #[test]
    fn test_header_lines_are_skipped() {
        let records = split_records("FN Clarivate\nVR 1.0\nPT J\nSO X\n", "PT ");

        assert_eq!(records, vec!["PT J\nSO X\n"]);
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let records = split_records("\u{FEFF}PT J\nSO X\n", "PT ");

        assert_eq!(records, vec!["PT J\nSO X\n"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = split_records("PT J\r\nSO X\r\nPT J\r\nSO Y\r\n", "PT ");

        assert_eq!(records, vec!["PT J\r\nSO X\r\n", "PT J\r\nSO Y\r\n"]);
    }

    #[test]
    fn test_record_count_matches_marker_lines() {
        let corpus = "PT J\n\nPT J\nPT B\nAU Someone\nPT S\n";
        let marker_lines = corpus.lines().filter(|line| line.starts_with("PT ")).count();

        assert_eq!(split_records(corpus, "PT ").len(), marker_lines);
    }

    #[test]
    fn test_empty_marker_yields_no_records() {
        assert!(split_records("PT J\nSO X\n", "").is_empty());
    }
}
