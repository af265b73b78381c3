//! Domain Layer - Core Entity Trait
//!
//! Every entity the API hands out is keyed by a string identifier.

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's identifier exactly as the API reported it
    fn id(&self) -> &str;
}

/// Find an entity by identifier, ignoring surrounding whitespace on both sides.
///
/// Upstream records are not consistently trimmed (`" V001 "` and `"V001"`
/// name the same volunteer).
pub fn find_by_id<'a, T: Entity>(entities: &'a [T], id: &str) -> Option<&'a T> {
    let wanted = id.trim();
    entities.iter().find(|entity| entity.id().trim() == wanted)
}
