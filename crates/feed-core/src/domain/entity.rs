//! Domain Layer - Core Entity Trait
//!
//! Every record served by the remote content service carries a stable numeric ID.

use std::collections::HashMap;

/// Core trait for all remote entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Lookup table by ID; a later duplicate replaces an earlier one
pub fn index_by_id<E: Entity>(entities: impl IntoIterator<Item = E>) -> HashMap<E::Id, E> {
    entities.into_iter().map(|e| (e.id(), e)).collect()
}
