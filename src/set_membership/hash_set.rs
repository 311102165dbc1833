use crate::set_membership::SetMembership;
use std::collections::HashSet;
use std::convert::Infallible;

/// Exact membership, no false positives.
impl SetMembership<str> for HashSet<String> {
    type InsertError = Infallible;

    fn contains(&self, item: &str) -> bool {
        HashSet::<String>::contains(self, item)
    }

    fn insert(&mut self, item: &str) -> Result<(), Self::InsertError> {
        HashSet::<String>::insert(self, item.to_string());
        Ok(())
    }
}
