//! Owning-entity identity tokens.
//!
//! An [`Entity`] is an opaque handle. Two handles are equal only if they were
//! cloned from the same [`Entity::new`] call; the label is for display and never
//! takes part in comparisons, so two owners that happen to share a name stay
//! distinct.
//!
//! ```
//! use autodp_phi::Entity;
//!
//! let ishan = Entity::new("Ishan");
//! let alias = ishan.clone();
//! let namesake = Entity::new("Ishan");
//!
//! assert_eq!(ishan, alias);
//! assert_ne!(ishan, namesake);
//! assert_eq!(ishan.name(), namesake.name());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique numeric identity of an [`Entity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    fn next() -> Self {
        EntityId(NEXT_ENTITY_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Raw id value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The owner a tensor's values are attributed to.
///
/// Cloning is cheap and preserves identity. Immutable once created.
#[derive(Clone)]
pub struct Entity {
    id: EntityId,
    name: Arc<str>,
}

impl Entity {
    /// Create a fresh entity with its own identity.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            id: EntityId::next(),
            name: Arc::from(name.as_ref()),
        }
    }

    /// Identity of this entity
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Human-readable label
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Entity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}{})", self.name, self.id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_not_label() {
        let a = Entity::new("test");
        let b = Entity::new("test");
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.to_string(), "test");
    }

    #[test]
    fn test_clone_shares_identity() {
        let a = Entity::new("Trask");
        let b = a.clone();
        assert_eq!(a, b);

        let set: HashSet<Entity> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering_follows_creation() {
        let first = Entity::new("z");
        let second = Entity::new("a");
        assert!(first < second);
    }

    #[test]
    fn test_debug_includes_id() {
        let e = Entity::new("Ishan");
        let dbg = format!("{:?}", e);
        assert!(dbg.starts_with("Entity(Ishan#"));
    }
}
