//! Domain Layer - Core Entity Trait
//!
//! All entities expose a unique identifier within their collection.

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: ?Sized + Eq;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}
