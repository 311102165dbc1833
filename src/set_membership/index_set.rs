use fixedbitset::FixedBitSet;
use std::collections::BTreeSet;

/// Largest `max_index` backed by a bit set (2 MiB). Larger ranges are sparse.
pub const DENSE_LIMIT: usize = 1 << 24;

/// Populated indexes in `[0, max_index)`.
#[derive(Debug, Clone)]
pub enum IndexSet {
    Dense(FixedBitSet),
    Sparse(BTreeSet<usize>),
}

impl IndexSet {
    pub fn with_max_index(max_index: usize) -> Self {
        if max_index <= DENSE_LIMIT {
            IndexSet::Dense(FixedBitSet::with_capacity(max_index))
        } else {
            IndexSet::Sparse(BTreeSet::new())
        }
    }

    pub fn insert(&mut self, index: usize) {
        match self {
            IndexSet::Dense(bits) => bits.insert(index),
            IndexSet::Sparse(set) => {
                set.insert(index);
            }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        match self {
            IndexSet::Dense(bits) => bits.contains(index),
            IndexSet::Sparse(set) => set.contains(&index),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            IndexSet::Dense(bits) => bits.count_ones(..),
            IndexSet::Sparse(set) => set.len(),
        }
    }

    pub fn to_set(&self) -> BTreeSet<usize> {
        match self {
            IndexSet::Dense(bits) => bits.ones().collect(),
            IndexSet::Sparse(set) => set.clone(),
        }
    }
}
