//! Occurrence counts per feature, in first-seen order.

use std::collections::{BTreeMap, HashMap};

/// Number of dependency paths that resolved to each feature identifier.
///
/// Iteration follows the order in which identifiers were first counted, which
/// makes tie-breaking during selection deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceTally {
    entries: Vec<(String, u32)>,
    /// Lookup from identifier to its position in `entries`.
    index: HashMap<String, usize>,
}

impl OccurrenceTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `id`.
    pub fn increment(&mut self, id: &str) {
        self.add(id, 1);
    }

    /// Add `count` occurrences of `id`.
    pub fn add(&mut self, id: &str, count: u32) {
        match self.index.get(id) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(id.to_string(), self.entries.len());
                self.entries.push((id.to_string(), count));
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<u32> {
        self.index.get(id).map(|&pos| self.entries[pos].1)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, count)| (id.as_str(), *count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted copy of the counts, as reported in lookup-table entries.
    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.entries.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for OccurrenceTally {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (id, count) in iter {
            tally.add(id.as_ref(), count);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_accumulate() {
        let mut tally = OccurrenceTally::new();
        tally.increment("servlet-4.0");
        tally.increment("jsp-2.3");
        tally.increment("servlet-4.0");
        assert_eq!(tally.get("servlet-4.0"), Some(2));
        assert_eq!(tally.get("jsp-2.3"), Some(1));
        assert_eq!(tally.get("el-3.0"), None);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn iteration_keeps_first_seen_order() {
        let tally: OccurrenceTally = [("b", 1), ("a", 2), ("b", 3)].into_iter().collect();
        let order: Vec<(&str, u32)> = tally.iter().collect();
        assert_eq!(order, vec![("b", 4), ("a", 2)]);
    }

    #[test]
    fn map_is_sorted() {
        let tally: OccurrenceTally = [("b", 1), ("a", 2)].into_iter().collect();
        let keys: Vec<String> = tally.to_map().into_keys().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
