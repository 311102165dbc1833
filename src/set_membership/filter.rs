use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::hash::derive_indexes;
use crate::set_membership::index_set::IndexSet;
use crate::set_membership::provenance::ProvenanceLog;
use crate::set_membership::SetMembership;
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;
use std::fmt::{Debug, Formatter};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// Word membership filter with three hash lanes.
///
/// No false negatives: once a word is added, [`Filter::test`] returns true for
/// it forever. False positives happen when other words have populated all
/// three of a word's indexes.
///
/// ```
/// use word_filter::Filter;
///
/// let mut filter = Filter::new(16)?;
/// filter.add("word1");
///
/// assert!(filter.test("word1"));
/// assert_eq!(filter.entries_for_index(6), vec!["word1"]);
/// # Ok::<(), word_filter::FilterError>(())
/// ```
#[derive(Clone)]
pub struct Filter {
    max_index: NonZeroUsize,
    indexes: IndexSet,
    log: Option<ProvenanceLog>,
}

impl Filter {
    /// Filter over `[0, max_index)` with provenance logging enabled.
    pub fn new(max_index: usize) -> Result<Self, FilterError> {
        Self::with_config(FilterConfig::new(max_index))
    }

    pub fn with_config(config: FilterConfig) -> Result<Self, FilterError> {
        let max_index = config.validate()?;
        debug!(
            max_index = max_index.get(),
            provenance = config.provenance,
            "Created filter"
        );
        Ok(Self {
            max_index,
            indexes: IndexSet::with_max_index(max_index.get()),
            log: config.provenance.then(ProvenanceLog::new),
        })
    }

    pub fn max_index(&self) -> usize {
        self.max_index.get()
    }

    pub fn provenance_enabled(&self) -> bool {
        self.log.is_some()
    }

    pub fn add(&mut self, word: &str) {
        let indexes = derive_indexes(word, self.max_index);
        trace!(word, ?indexes, "Adding word");
        for &index in &indexes {
            self.indexes.insert(index);
        }
        if let Some(log) = self.log.as_mut() {
            log.record(word, &indexes);
            debug_assert!(indexes.iter().all(|&index| log.is_logged(index)));
        }
    }

    pub fn test(&self, word: &str) -> bool {
        let indexes = derive_indexes(word, self.max_index);
        let present = indexes.iter().all(|&index| self.indexes.contains(index));
        trace!(word, ?indexes, present, "Tested word");
        present
    }

    /// Copy of every index populated so far.
    pub fn indexes(&self) -> BTreeSet<usize> {
        self.indexes.to_set()
    }

    pub fn bits_set(&self) -> usize {
        self.indexes.count()
    }

    /// Probability that a word never added tests true, given the current fill.
    pub fn false_positive_rate(&self) -> f64 {
        let fill = self.bits_set() as f64 / self.max_index.get() as f64;
        fill.powi(3)
    }

    /// Words that populated `index`, sorted. Empty when provenance is disabled.
    pub fn entries_for_index(&self, index: usize) -> Vec<String> {
        self.log
            .as_ref()
            .map(|log| log.entries_for_index(index))
            .unwrap_or_default()
    }

    /// For each distinct index of `word`, the words blamed for populating it.
    ///
    /// Says nothing about whether `word` itself was added.
    pub fn log_present(&self, word: &str) -> BTreeMap<usize, Vec<String>> {
        let indexes = derive_indexes(word, self.max_index);
        match &self.log {
            Some(log) => log.entries_for_indexes(&indexes),
            None => indexes.iter().map(|&index| (index, Vec::new())).collect(),
        }
    }
}

impl SetMembership<str> for Filter {
    type InsertError = Infallible;

    fn contains(&self, item: &str) -> bool {
        self.test(item)
    }

    fn insert(&mut self, item: &str) -> Result<(), Self::InsertError> {
        self.add(item);
        Ok(())
    }
}

impl Debug for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Filter<{:?}>", self.indexes())
    }
}
