use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid configuration: max_index must be > 0, got {max_index}")]
    InvalidConfiguration { max_index: usize },

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
