use crate::error::FilterError;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Number of addressable indexes; every derived index is `< max_index`.
    pub max_index: usize,
    /// Keep a provenance log of which words set which index.
    pub provenance: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_index: 16,
            provenance: true,
        }
    }
}

impl FilterConfig {
    pub fn new(max_index: usize) -> Self {
        Self {
            max_index,
            ..Self::default()
        }
    }

    pub fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    pub fn with_provenance(mut self, provenance: bool) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn validate(&self) -> Result<NonZeroUsize, FilterError> {
        NonZeroUsize::new(self.max_index).ok_or(FilterError::InvalidConfiguration {
            max_index: self.max_index,
        })
    }
}
