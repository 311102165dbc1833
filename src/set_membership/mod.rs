pub mod filter;
pub mod hash_set;
pub mod index_set;
pub mod provenance;

pub trait SetMembership<T: ?Sized> {
    type InsertError;

    fn contains(&self, item: &T) -> bool;
    fn insert(&mut self, item: &T) -> Result<(), Self::InsertError>;
}
