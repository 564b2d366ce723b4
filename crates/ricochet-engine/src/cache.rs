//! Coupling cache keyed by `(emitter, receiver)`.

use indexmap::IndexMap;
use ricochet_core::EntityId;
use ricochet_kernel::Coupling;

/// Precomputed couplings in insertion order.
///
/// Entries are only ever added; a pair absent from the cache has no
/// physical coupling (probe as emitter, plane wave as receiver, or an
/// entity paired with itself).
#[derive(Clone, Debug, Default)]
pub struct CouplingCache {
    entries: IndexMap<(EntityId, EntityId), Coupling>,
}

impl CouplingCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the coupling for `emitter → receiver`.
    pub fn insert(&mut self, emitter: EntityId, receiver: EntityId, coupling: Coupling) {
        self.entries.insert((emitter, receiver), coupling);
    }

    /// The coupling for `emitter → receiver`, if one exists.
    pub fn get(&self, emitter: EntityId, receiver: EntityId) -> Option<&Coupling> {
        self.entries.get(&(emitter, receiver))
    }

    /// Whether `emitter → receiver` is cached.
    pub fn contains(&self, emitter: EntityId, receiver: EntityId) -> bool {
        self.entries.contains_key(&(emitter, receiver))
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ((EntityId, EntityId), &Coupling)> {
        self.entries.iter().map(|(&k, v)| (k, v))
    }

    /// Total entries normalised from non-finite values.
    pub fn degenerate_entries(&self) -> usize {
        self.entries.values().map(Coupling::degenerate_entries).sum()
    }
}
