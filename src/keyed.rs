//! Indexing provider that maintains an item-to-slot map
//!
//! [`KeyedProvider`] drives a heap of `(item, priority)` entries and
//! listens to the engine's positional notifications to keep a hash map
//! from item to current slot. The map is what turns element-keyed
//! operations (remove this item, change this item's priority) into the
//! engine's O(log n) slot-keyed ones, and it answers membership
//! queries in O(1).
//!
//! Item identity is the item's [`Eq`]/[`Hash`] pair together with the
//! map's [`BuildHasher`]; hashing defaults to `rustc_hash`'s Fx hasher.
//! Items are cloned into the map, so keys are typically cheap handles:
//! integers, interned symbols, small strings.
//!
//! # Index Invariant
//!
//! For every `(item, slot)` in the map, the heap's entry at `slot`
//! holds that item, and the map has exactly one entry per heap
//! element. The engine's notification contract guarantees this holds
//! after every operation, including interior removals and bulk builds.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::traits::Provider;

/// A provider that keeps an item-to-slot index for `(item, priority)`
/// entries
///
/// Priorities are ordered by their [`Ord`] impl; the index is updated
/// from the engine's `moved`/`removed`/`cleared` notifications.
/// [`KeyedMinQueue`](crate::keyed_queue::KeyedMinQueue) composes this
/// with the engine into the unique, updateable queue façade.
#[derive(Debug, Clone)]
pub struct KeyedProvider<T, S = FxBuildHasher> {
    slots: HashMap<T, usize, S>,
}

impl<T> KeyedProvider<T> {
    /// Creates an empty provider with the default hasher
    pub fn new() -> Self {
        Self {
            slots: HashMap::default(),
        }
    }

    /// Creates an empty provider with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }
}

impl<T, S: BuildHasher> KeyedProvider<T, S> {
    /// Creates an empty provider with a caller-supplied hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            slots: HashMap::with_hasher(hash_builder),
        }
    }
}

impl<T: Eq + Hash, S: BuildHasher> KeyedProvider<T, S> {
    /// Returns the slot currently holding `item`, if present
    pub fn slot_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(item).copied()
    }

    /// Returns true if `item` is currently in the heap
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(item)
    }

    /// Returns the number of indexed items
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no items are indexed
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T> Default for KeyedProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, S> Provider<(T, P)> for KeyedProvider<T, S>
where
    T: Eq + Hash + Clone,
    P: Ord,
    S: BuildHasher,
{
    type Priority = P;

    #[inline]
    fn priority<'a>(&self, entry: &'a (T, P)) -> &'a P {
        &entry.1
    }

    #[inline]
    fn compare(&self, a: &P, b: &P) -> Ordering {
        a.cmp(b)
    }

    fn moved(&mut self, entry: &(T, P), slot: usize) {
        self.slots.insert(entry.0.clone(), slot);
    }

    fn removed(&mut self, entry: &(T, P), _slot: usize) {
        self.slots.remove(&entry.0);
    }

    fn cleared(&mut self) {
        self.slots.clear();
    }
}
