//! Unique, updateable minimum-priority queue façade
//!
//! [`KeyedMinQueue`] pairs the d-ary engine with
//! [`KeyedProvider`](crate::keyed::KeyedProvider): each item appears at
//! most once, membership checks are O(1), and an item's priority can be
//! changed or the item removed in O(log n) while it sits anywhere in
//! the heap. This is the shape scheduler work queues and Dijkstra-style
//! open sets want.
//!
//! Item-keyed calls look the item up in the provider's index and hand
//! the engine a slot; the engine's notification stream keeps the index
//! exact across the resulting sifts.
//!
//! # Example
//!
//! ```rust
//! use dary_queue::KeyedMinQueue;
//!
//! let mut queue = KeyedMinQueue::new();
//! queue.enqueue("reindex", 20)?;
//! queue.enqueue("compact", 10)?;
//!
//! // A better priority is discovered later.
//! queue.update("reindex", 5)?;
//!
//! assert_eq!(queue.dequeue(), Some(("reindex", 5)));
//! assert_eq!(queue.dequeue(), Some(("compact", 10)));
//! # Ok::<(), dary_queue::HeapError>(())
//! ```

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::dary::{Cursor, QuaternaryHeap};
use crate::keyed::KeyedProvider;
use crate::traits::HeapError;

/// A unique-items min-priority queue with O(log n) update and removal
/// by item
///
/// Item identity is the item's [`Eq`]/[`Hash`] pair; items are cloned
/// into the index, so keys should be cheap handles. Every fallible
/// operation has a trying twin that returns its outcome without an
/// error and leaves the queue untouched when the precondition fails.
#[derive(Debug)]
pub struct KeyedMinQueue<T, P, S = FxBuildHasher>
where
    T: Eq + Hash + Clone,
    P: Ord,
{
    heap: QuaternaryHeap<(T, P), KeyedProvider<T, S>>,
}

impl<T: Eq + Hash + Clone, P: Ord> KeyedMinQueue<T, P> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            heap: QuaternaryHeap::new(KeyedProvider::new()),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: QuaternaryHeap::with_capacity(
                KeyedProvider::with_capacity(capacity),
                capacity,
            ),
        }
    }
}

impl<T, P, S> KeyedMinQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: Ord,
    S: BuildHasher,
{
    /// Creates an empty queue with a caller-supplied hasher
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            heap: QuaternaryHeap::new(KeyedProvider::with_hasher(hash_builder)),
        }
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `item` is in the queue
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap.provider().contains(item)
    }

    /// Returns the current priority of `item`, if present
    pub fn priority_of<Q>(&self, item: &Q) -> Option<&P>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.heap.provider().slot_of(item)?;
        self.heap.get(slot).map(|(_, priority)| priority)
    }

    /// Adds an item with a priority
    ///
    /// Fails with [`HeapError::Duplicate`] when the item is already
    /// present; the queue is untouched in that case.
    pub fn enqueue(&mut self, item: T, priority: P) -> Result<(), HeapError> {
        if self.contains(&item) {
            return Err(HeapError::Duplicate);
        }
        self.heap.push((item, priority));
        Ok(())
    }

    /// Adds an item with a priority; returns false (and leaves the
    /// queue untouched) when the item is already present
    pub fn try_enqueue(&mut self, item: T, priority: P) -> bool {
        self.enqueue(item, priority).is_ok()
    }

    /// Changes the priority of an item already in the queue
    ///
    /// The entry is re-seated through the engine's slot-keyed update,
    /// so the item moves up or down as the new priority demands.
    /// Returns the superseded priority, or fails with
    /// [`HeapError::NotFound`] when the item is absent.
    pub fn update(&mut self, item: T, priority: P) -> Result<P, HeapError> {
        let slot = self
            .heap
            .provider()
            .slot_of(&item)
            .ok_or(HeapError::NotFound)?;
        let (_, superseded) = self.heap.update(slot, (item, priority))?;
        Ok(superseded)
    }

    /// Changes the priority of an item; returns false (and leaves the
    /// queue untouched) when the item is absent
    pub fn try_update(&mut self, item: T, priority: P) -> bool {
        self.update(item, priority).is_ok()
    }

    /// Upserts: updates the item's priority when present, enqueues it
    /// otherwise
    ///
    /// Returns the superseded priority when this was an update.
    pub fn enqueue_or_update(&mut self, item: T, priority: P) -> Option<P> {
        match self.heap.provider().slot_of(&item) {
            Some(slot) => self
                .heap
                .update(slot, (item, priority))
                .ok()
                .map(|(_, superseded)| superseded),
            None => {
                self.heap.push((item, priority));
                None
            }
        }
    }

    /// Removes an item from anywhere in the queue
    ///
    /// Returns the removed entry, or fails with
    /// [`HeapError::NotFound`] when the item is absent.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<(T, P), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self
            .heap
            .provider()
            .slot_of(item)
            .ok_or(HeapError::NotFound)?;
        self.heap.remove(slot)
    }

    /// Removes an item; returns `None` (and leaves the queue
    /// untouched) when the item is absent
    pub fn try_remove<Q>(&mut self, item: &Q) -> Option<(T, P)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(item).ok()
    }

    /// Returns the minimum-priority entry without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|(item, priority)| (item, priority))
    }

    /// Returns the minimum-priority entry, failing when empty
    pub fn peek_min(&self) -> Result<(&T, &P), HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum-priority entry
    pub fn dequeue(&mut self) -> Option<(T, P)> {
        self.heap.pop()
    }

    /// Removes and returns the minimum-priority entry, failing when
    /// empty
    pub fn dequeue_min(&mut self) -> Result<(T, P), HeapError> {
        self.heap.pop_min()
    }

    /// Empties the queue and its index
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates entries in slot order (not priority order)
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> {
        self.heap.iter().map(|(item, priority)| (item, priority))
    }

    /// Creates a version-guarded cursor; see
    /// [`advance`](KeyedMinQueue::advance)
    pub fn cursor(&self) -> Cursor {
        self.heap.cursor()
    }

    /// Advances a cursor created by [`cursor`](KeyedMinQueue::cursor)
    ///
    /// Fails with [`HeapError::Invalidated`] once the queue has
    /// mutated since the cursor was created.
    pub fn advance<'a>(&'a self, cursor: &mut Cursor) -> Result<Option<(&'a T, &'a P)>, HeapError> {
        cursor
            .next(&self.heap)
            .map(|entry| entry.map(|(item, priority)| (item, priority)))
    }
}

impl<T: Eq + Hash + Clone, P: Ord> Default for KeyedMinQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, S> FromIterator<(T, P)> for KeyedMinQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: Ord,
    S: BuildHasher + Default,
{
    /// Builds the queue with a single O(n) heapify pass
    ///
    /// Duplicate items collapse before the heap is built; the last
    /// occurrence's priority wins, matching
    /// [`enqueue_or_update`](KeyedMinQueue::enqueue_or_update) applied
    /// in order.
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut staged: std::collections::HashMap<T, P, S> = Default::default();
        for (item, priority) in iter {
            staged.insert(item, priority);
        }
        let entries: Vec<(T, P)> = staged.into_iter().collect();
        Self {
            heap: QuaternaryHeap::heapify(KeyedProvider::with_hasher(S::default()), entries),
        }
    }
}

impl<T, P, S> Extend<(T, P)> for KeyedMinQueue<T, P, S>
where
    T: Eq + Hash + Clone,
    P: Ord,
    S: BuildHasher,
{
    /// Upserts each entry in order, last occurrence winning
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue_or_update(item, priority);
        }
    }
}
