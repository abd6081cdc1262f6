//! Opaque scalar-management handle.
//!
//! Single-entity tensors may carry a [`ScalarManager`]. The algebra never looks
//! inside it: it is stored on construction and inherited by operation results
//! (the left operand's manager, falling back to the right operand's).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_MANAGER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct ManagerInner {
    id: u64,
}

/// Shared handle to a scalar manager. Equality is by handle.
#[derive(Clone)]
pub struct ScalarManager {
    inner: Arc<ManagerInner>,
}

impl ScalarManager {
    /// Create a new, distinct manager
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                id: NEXT_MANAGER_ID.fetch_add(1, Ordering::Relaxed),
            }),
        }
    }

    /// Numeric id, for diagnostics
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// True if both handles refer to the same manager
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for ScalarManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ScalarManager {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ScalarManager {}

impl fmt::Debug for ScalarManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarManager(#{})", self.inner.id)
    }
}

/// Pick the manager a binary result inherits.
pub(crate) fn inherit(
    lhs: Option<&ScalarManager>,
    rhs: Option<&ScalarManager>,
) -> Option<ScalarManager> {
    lhs.or(rhs).cloned()
}
