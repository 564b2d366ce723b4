//! Strongly-typed entity handles.

use std::fmt;

/// Stable handle for an entity registered in a container.
///
/// Handles are assigned sequentially at registration: `EntityId(n)` is
/// the n-th registered entity. Two geometrically identical entities
/// always receive distinct handles, so coupling cache entries are keyed
/// by identity rather than by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Position of this entity in registration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
