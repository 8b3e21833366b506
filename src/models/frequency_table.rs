use crate::types::{Frequency, RankedTable};
use indexmap::IndexMap;
use std::hash::Hash;

/// Maps each distinct key to the number of times it was counted.
///
/// Keys are unique. The order in which keys were first seen is retained so that
/// ranking can break ties deterministically without comparing the keys themselves.
#[derive(Clone, Debug)]
pub struct FrequencyTable<K> {
    entries: IndexMap<K, Frequency>,
}

impl<K> FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds one occurrence of `key`, starting from zero if it has not been seen.
    pub fn increment(&mut self, key: K) {
        *self.entries.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &K) -> Option<Frequency> {
        self.entries.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> Frequency {
        self.entries.values().sum()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Frequency)> {
        self.entries.iter().map(|(key, frequency)| (key, *frequency))
    }

    /// Consumes the table, returning its entries in first-seen order.
    pub fn into_entries(self) -> RankedTable<K> {
        self.entries.into_iter().collect()
    }
}

impl<K> Default for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_starts_at_one() {
        let mut table = FrequencyTable::new();
        table.increment("Nature".to_string());

        assert_eq!(table.get(&"Nature".to_string()), Some(1));
        assert_eq!(table.get(&"Science".to_string()), None);
    }

    #[test]
    fn test_keys_stay_unique() {
        let table: FrequencyTable<&str> = ["A", "B", "A", "A"].into_iter().collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&"A"), Some(3));
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_entries_keep_first_seen_order() {
        let table: FrequencyTable<&str> = ["C", "A", "C", "B"].into_iter().collect();

        assert_eq!(table.into_entries(), vec![("C", 2), ("A", 1), ("B", 1)]);
    }

    #[test]
    fn test_empty_table() {
        let table: FrequencyTable<String> = FrequencyTable::default();

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
