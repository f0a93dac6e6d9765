//! Plain minimum-priority queue façade
//!
//! [`MinQueue`] pairs the d-ary engine with the stateless
//! [`PairProvider`]: entries are `(item, priority)` pairs, duplicates
//! are permitted, and no index is maintained. Use
//! [`KeyedMinQueue`](crate::keyed_queue::KeyedMinQueue) when items are
//! unique and need in-place priority updates or removal by item.
//!
//! # Example
//!
//! ```rust
//! use dary_queue::MinQueue;
//!
//! let mut queue = MinQueue::new();
//! queue.enqueue("low", 10);
//! queue.enqueue("urgent", 1);
//! queue.enqueue("urgent again", 1);
//!
//! let (item, priority) = queue.dequeue().unwrap();
//! assert_eq!(priority, 1);
//! assert!(item.starts_with("urgent"));
//! ```

use crate::dary::{Cursor, QuaternaryHeap};
use crate::traits::{HeapError, PairProvider};

/// A duplicate-tolerant min-priority queue of `(item, priority)` pairs
#[derive(Debug)]
pub struct MinQueue<T, P: Ord> {
    heap: QuaternaryHeap<(T, P), PairProvider>,
}

impl<T, P: Ord> Default for MinQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> MinQueue<T, P> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            heap: QuaternaryHeap::new(PairProvider),
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: QuaternaryHeap::with_capacity(PairProvider, capacity),
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

    /// Adds an entry; duplicates of both item and priority are fine
    pub fn enqueue(&mut self, item: T, priority: P) {
        self.heap.push((item, priority));
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

    /// Empties the queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates entries in slot order (not priority order)
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> {
        self.heap.iter().map(|(item, priority)| (item, priority))
    }

    /// Creates a version-guarded cursor; see [`advance`](MinQueue::advance)
    pub fn cursor(&self) -> Cursor {
        self.heap.cursor()
    }

    /// Advances a cursor created by [`cursor`](MinQueue::cursor)
    ///
    /// Fails with [`HeapError::Invalidated`] once the queue has
    /// mutated since the cursor was created.
    pub fn advance<'a>(&'a self, cursor: &mut Cursor) -> Result<Option<(&'a T, &'a P)>, HeapError> {
        cursor
            .next(&self.heap)
            .map(|entry| entry.map(|(item, priority)| (item, priority)))
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for MinQueue<T, P> {
    /// Builds the queue with a single O(n) heapify pass
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            heap: QuaternaryHeap::heapify(PairProvider, iter.into_iter().collect()),
        }
    }
}

impl<T, P: Ord> Extend<(T, P)> for MinQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue() {
        let mut queue: MinQueue<&str, i32> = MinQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_min(), Err(HeapError::Empty));
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue_min(), Err(HeapError::Empty));
    }

    #[test]
    fn test_dequeue_order() {
        let mut queue = MinQueue::new();
        queue.enqueue("three", 3);
        queue.enqueue("one", 1);
        queue.enqueue("two", 2);

        assert_eq!(queue.peek(), Some((&"one", &1)));
        assert_eq!(queue.dequeue(), Some(("one", 1)));
        assert_eq!(queue.dequeue(), Some(("two", 2)));
        assert_eq!(queue.dequeue(), Some(("three", 3)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut queue = MinQueue::new();
        queue.enqueue("a", 1);
        queue.enqueue("a", 1);
        queue.enqueue("b", 1);
        assert_eq!(queue.len(), 3);

        let mut priorities = Vec::new();
        while let Some((_, priority)) = queue.dequeue() {
            priorities.push(priority);
        }
        assert_eq!(priorities, vec![1, 1, 1]);
    }

    #[test]
    fn test_from_iterator_heapifies() {
        let mut queue: MinQueue<i32, i32> =
            [(5, 5), (1, 1), (4, 4), (1, 1), (3, 3)].into_iter().collect();
        let mut drained = Vec::new();
        while let Some((_, priority)) = queue.dequeue() {
            drained.push(priority);
        }
        assert_eq!(drained, vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn test_extend_then_drain() {
        let mut queue = MinQueue::new();
        queue.enqueue("seed", 7);
        queue.extend([("x", 2), ("y", 9)]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(("x", 2)));
    }

    #[test]
    fn test_cursor_guard() {
        let mut queue = MinQueue::new();
        queue.enqueue("a", 1);

        let mut cursor = queue.cursor();
        assert_eq!(queue.advance(&mut cursor), Ok(Some((&"a", &1))));
        assert_eq!(queue.advance(&mut cursor), Ok(None));

        let mut cursor = queue.cursor();
        queue.enqueue("b", 2);
        assert_eq!(queue.advance(&mut cursor), Err(HeapError::Invalidated));
    }

    #[test]
    fn test_clear_resets() {
        let mut queue = MinQueue::new();
        queue.enqueue("a", 1);
        queue.clear();
        assert!(queue.is_empty());
        queue.enqueue("b", 2);
        assert_eq!(queue.dequeue(), Some(("b", 2)));
    }
}
