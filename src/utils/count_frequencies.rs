use crate::models::FrequencyTable;
use std::hash::Hash;

/// Counts how often each label occurs.
///
/// # Arguments
/// * `labels` - The labels to count; absent values are expected to have been filtered out.
///
/// # Returns
/// * A `FrequencyTable` where each key is a distinct label and its value is the number of
///   occurrences. Keys keep the order in which they were first encountered.
///
/// # Example
/// ```
/// use journal_cloud::count_frequencies;
///
/// let frequencies = count_frequencies(vec!["NATURE", "SCIENCE", "NATURE"]);
/// assert_eq!(frequencies.get(&"NATURE"), Some(2));
/// assert_eq!(frequencies.get(&"SCIENCE"), Some(1));
/// ```
pub fn count_frequencies<K, I>(labels: I) -> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut frequencies: FrequencyTable<K> = FrequencyTable::new();

    for label in labels {
        frequencies.increment(label);
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_table() {
        let frequencies = count_frequencies(Vec::<String>::new());

        assert!(frequencies.is_empty());
    }

    #[test]
    fn test_counts_are_order_independent() {
        let forward = count_frequencies(vec!["X", "Y", "X", "Z", "X", "Y"]);
        let permuted = count_frequencies(vec!["Y", "Z", "X", "Y", "X", "X"]);

        for (label, frequency) in forward.iter() {
            assert_eq!(permuted.get(label), Some(frequency));
        }
        assert_eq!(forward.len(), permuted.len());
    }

    #[test]
    fn test_total_equals_label_count() {
        let labels = vec!["A", "B", "A", "C", "A"];
        let frequencies = count_frequencies(labels.clone());

        assert_eq!(frequencies.total(), labels.len());
    }
}
