//! Indexed, updateable d-ary min-heap priority queues
//!
//! This crate provides an array-backed d-ary min-heap engine (default
//! arity 4) that reports every positional change to a pluggable
//! *provider*, plus queue façades built on top of it.
//!
//! # Features
//!
//! - **O(log n) arbitrary removal**: take any element out of the middle
//!   of the heap, not just the minimum
//! - **O(log n) priority updates**: move an element up *or* down after
//!   its priority changes, Dijkstra-style
//! - **Provider protocol**: comparison, priority selection, and
//!   positional notifications are a compile-time type parameter, so an
//!   element-to-slot index stays exact with zero virtual dispatch
//! - **O(n) bulk build** with exactly one notification per element
//! - **Version-guarded cursors** that detect mutation mid-walk
//!
//! # Choosing a queue
//!
//! - [`MinQueue`]: plain `(item, priority)` queue, duplicates welcome.
//! - [`KeyedMinQueue`]: unique items with O(1) membership and O(log n)
//!   update/remove by item.
//! - [`DaryHeap`]/[`QuaternaryHeap`]: the engine itself, for custom
//!   providers and element shapes.
//!
//! # Example
//!
//! ```rust
//! use dary_queue::KeyedMinQueue;
//!
//! let mut queue = KeyedMinQueue::new();
//! queue.enqueue("restart worker", 40)?;
//! queue.enqueue("rotate logs", 20)?;
//! queue.enqueue("page operator", 30)?;
//!
//! // The operator page becomes urgent.
//! queue.update("page operator", 1)?;
//! assert_eq!(queue.peek(), Some((&"page operator", &1)));
//!
//! // The restart is handled out of band.
//! queue.remove("restart worker")?;
//!
//! assert_eq!(queue.dequeue(), Some(("page operator", 1)));
//! assert_eq!(queue.dequeue(), Some(("rotate logs", 20)));
//! assert_eq!(queue.dequeue(), None);
//! # Ok::<(), dary_queue::HeapError>(())
//! ```

pub mod dary;
pub mod keyed;
pub mod keyed_queue;
pub mod min_queue;
pub mod traits;

pub use dary::{Cursor, DaryHeap, QuaternaryHeap, DEFAULT_ARITY};
pub use keyed::KeyedProvider;
pub use keyed_queue::KeyedMinQueue;
pub use min_queue::MinQueue;
pub use traits::{CompareWith, HeapError, OrdProvider, PairProvider, Provider};
