use crate::models::FrequencyTable;
use crate::types::RankedTable;
use std::hash::Hash;

/// Ranks a frequency table.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Entries with the same frequency keep the order in which their
///   labels were first encountered (the sort is stable).
///
/// ### Parameters:
/// - `results`: A `FrequencyTable` mapping each label to its occurrence count.
///
/// ### Returns:
/// - A `Vec` of `(label, frequency)` tuples, sorted as described above.
///
/// ### Example:
/// ```rust
/// use journal_cloud::{count_frequencies, sort_results};
///
/// let frequencies = count_frequencies(vec!["CELL", "NATURE", "SCIENCE", "NATURE", "SCIENCE"]);
///
/// let sorted = sort_results(frequencies);
/// assert_eq!(sorted, vec![("NATURE", 2), ("SCIENCE", 2), ("CELL", 1)]);
/// ```
pub fn sort_results<K>(results: FrequencyTable<K>) -> RankedTable<K>
where
    K: Eq + Hash + Clone,
{
    let mut sorted_results = results.into_entries();

    // `sort_by` is stable, so ties stay in first-seen order
    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));

    sorted_results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::count_frequencies;

    #[test]
    fn test_descending_by_count() {
        let sorted = sort_results(count_frequencies(vec!["Y", "X", "X", "Z", "X", "Z"]));

        assert_eq!(sorted, vec![("X", 3), ("Z", 2), ("Y", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let sorted = sort_results(count_frequencies(vec!["B", "C", "A", "C", "A", "B"]));

        assert_eq!(sorted, vec![("B", 2), ("C", 2), ("A", 2)]);
    }

    #[test]
    fn test_empty_table_yields_empty_ranking() {
        let sorted = sort_results(count_frequencies(Vec::<String>::new()));

        assert!(sorted.is_empty());
    }
}
