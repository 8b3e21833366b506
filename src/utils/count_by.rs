use crate::models::FrequencyTable;
use std::hash::Hash;

/// Counts a single categorical attribute across `items`.
///
/// `extract` pulls the attribute out of one item; items for which it returns `None`
/// contribute nothing. This is the one counting routine shared by every field (source,
/// publication year, publisher), so only the extraction function varies.
///
/// # Example
/// ```
/// use journal_cloud::{count_by, extract_publication_year};
///
/// let records = vec![
///     "PT J\nPY 2020\n".to_string(),
///     "PT J\nPY 2021\n".to_string(),
///     "PT J\nPY 2020\n".to_string(),
///     "PT J\n".to_string(),
/// ];
///
/// let years = count_by(&records, |record| extract_publication_year(record));
/// assert_eq!(years.get(&2020), Some(2));
/// assert_eq!(years.total(), 3);
/// ```
pub fn count_by<R, K, F>(items: &[R], extract: F) -> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
    F: Fn(&R) -> Option<K>,
{
    items.iter().filter_map(extract).collect()
}
