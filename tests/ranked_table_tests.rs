use journal_cloud::{
    build_ranked_table, count_by, count_frequencies, extract_source, split_records,
    DEFAULT_PIPELINE_CONFIG,
};
use test_utils::{list_test_files, run_test_for_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_tables_from_multiple_files() {
        println!("Testing ranked tables...");

        let files = list_test_files();
        let total_files = files.len();
        assert!(total_files > 0, "No test files found");

        for (file_idx, file_path) in files.iter().enumerate() {
            println!(
                "   -- {:?} ({} of {})",
                file_path,
                file_idx + 1,
                total_files
            );

            run_test_for_file(file_path, |text| {
                build_ranked_table(text, DEFAULT_PIPELINE_CONFIG).1
            });
        }
    }

    #[test]
    fn test_three_record_scenario() {
        let corpus = "PT A\nSO Journal X\nPT B\nSO Journal Y\nPT C\nSO Journal X";

        let (record_count, ranked_table) = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);

        assert_eq!(record_count, 3);
        assert_eq!(
            ranked_table,
            vec![("Journal X".to_string(), 2), ("Journal Y".to_string(), 1)]
        );
    }

    #[test]
    fn test_no_cross_record_leakage() {
        // If the first record ran past the second marker it would pick up "LEAKED"
        let corpus = "PT J\nAU Doe, J\nPT J\nSO LEAKED\n";

        let records = split_records(corpus, "PT ");

        assert_eq!(records.len(), 2);
        assert_eq!(extract_source(&records[0]), None);
        assert_eq!(extract_source(&records[1]), Some("LEAKED".to_string()));
    }

    #[test]
    fn test_record_without_source_contributes_nothing() {
        let corpus = "PT J\nSO NATURE\nPT J\nTI No source here\nPT J\nSO NATURE\n";

        let (record_count, ranked_table) = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);

        assert_eq!(record_count, 3);
        assert_eq!(ranked_table, vec![("NATURE".to_string(), 2)]);
    }

    #[test]
    fn test_empty_source_value_is_dropped() {
        let corpus = "PT J\nSO    \nPT J\nSO CELL\n";

        let (_, ranked_table) = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);

        assert_eq!(ranked_table, vec![("CELL".to_string(), 1)]);
    }

    #[test]
    fn test_sum_of_counts_equals_extracted_values() {
        let corpus = "PT J\nSO A\nPT J\nSO B\nPT J\nPT J\nSO A\nPT J\nSO C\nPT J\n";

        let records = split_records(corpus, "PT ");
        let extracted = records
            .iter()
            .filter_map(|record| extract_source(record))
            .count();
        let (_, ranked_table) = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);

        let total: usize = ranked_table.iter().map(|(_, count)| count).sum();
        assert_eq!(total, extracted);
        assert_eq!(total, 4);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let corpus = "PT J\nSO B\nPT J\nSO A\nPT J\nSO B\nPT J\nSO C\nPT J\nSO A\n";

        let first = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);
        let second = build_ranked_table(corpus, DEFAULT_PIPELINE_CONFIG);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_corpus_yields_empty_table() {
        let (record_count, ranked_table) = build_ranked_table("", DEFAULT_PIPELINE_CONFIG);

        assert_eq!(record_count, 0);
        assert!(ranked_table.is_empty());
    }

    #[test]
    fn test_permuted_input_counts_match() {
        let records = split_records("PT J\nSO A\nPT J\nSO B\nPT J\nSO A\n", "PT ");
        let mut reversed = records.clone();
        reversed.reverse();

        let forward = count_by(&records, |record| extract_source(record));
        let backward = count_by(&reversed, |record| extract_source(record));

        let mut forward_pairs: Vec<(String, usize)> = forward
            .iter()
            .map(|(label, count)| (label.clone(), count))
            .collect();
        let mut backward_pairs: Vec<(String, usize)> = backward
            .iter()
            .map(|(label, count)| (label.clone(), count))
            .collect();
        forward_pairs.sort();
        backward_pairs.sort();

        assert_eq!(forward_pairs, backward_pairs);
    }

    #[test]
    fn test_ties_follow_first_seen_order() {
        let frequencies = count_frequencies(vec!["Z", "M", "A"]);

        let ranked = journal_cloud::sort_results(frequencies);

        assert_eq!(ranked, vec![("Z", 1), ("M", 1), ("A", 1)]);
    }
}
