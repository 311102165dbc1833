pub mod config;
pub mod error;
pub mod hash;
pub mod set_membership;

pub use config::FilterConfig;
pub use error::FilterError;
pub use hash::{derive_index, derive_indexes, Algorithm};
pub use set_membership::filter::Filter;
pub use set_membership::provenance::ProvenanceLog;
pub use set_membership::SetMembership;
