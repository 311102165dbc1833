use std::collections::{BTreeMap, HashMap};

/// Which words populated which index.
#[derive(Debug, Clone, Default)]
pub struct ProvenanceLog {
    entries: HashMap<usize, Vec<String>>,
}

impl ProvenanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `word` once under each distinct index in `indexes`.
    ///
    /// Repeated calls with the same word append again.
    pub fn record(&mut self, word: &str, indexes: &[usize]) {
        for (i, &index) in indexes.iter().enumerate() {
            if indexes[..i].contains(&index) {
                continue;
            }
            self.entries.entry(index).or_default().push(word.to_string());
        }
    }

    /// Words logged under `index`, sorted lexicographically.
    pub fn entries_for_index(&self, index: usize) -> Vec<String> {
        let mut words = self.entries.get(&index).cloned().unwrap_or_default();
        words.sort();
        words
    }

    pub fn entries_for_indexes(&self, indexes: &[usize]) -> BTreeMap<usize, Vec<String>> {
        indexes
            .iter()
            .map(|&index| (index, self.entries_for_index(index)))
            .collect()
    }

    pub fn is_logged(&self, index: usize) -> bool {
        self.entries.get(&index).is_some_and(|words| !words.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_sorted() {
        let mut log = ProvenanceLog::new();

        log.record("zeta", &[1]);
        log.record("alpha", &[1]);
        log.record("Mu", &[1]);

        assert_eq!(log.entries_for_index(1), vec!["Mu", "alpha", "zeta"]);
    }

    #[test]
    fn test_record_once_per_distinct_index() {
        let mut log = ProvenanceLog::new();

        log.record("word3", &[12, 15, 15]);

        assert_eq!(log.entries_for_index(12), vec!["word3"]);
        assert_eq!(log.entries_for_index(15), vec!["word3"]);
    }

    #[test]
    fn test_repeated_record_keeps_duplicates() {
        let mut log = ProvenanceLog::new();

        log.record("word1", &[6, 10, 11]);
        log.record("word1", &[6, 10, 11]);

        assert_eq!(log.entries_for_index(6), vec!["word1", "word1"]);
    }

    #[test]
    fn test_unknown_index_is_empty() {
        let log = ProvenanceLog::new();

        assert!(log.entries_for_index(3).is_empty());
        assert!(!log.is_logged(3));
    }

    #[test]
    fn test_entries_for_indexes_keys_distinct() {
        let mut log = ProvenanceLog::new();
        log.record("word3", &[12, 15, 15]);

        let present = log.entries_for_indexes(&[12, 15, 15]);

        assert_eq!(present.len(), 2);
        assert_eq!(present[&15], vec!["word3"]);
    }
}
