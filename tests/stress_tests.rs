//! Stress tests that push the queues through large operation counts
//!
//! These tests perform thousands of operations in various patterns to
//! catch edge cases the scenario tests miss: deep sifts, index churn
//! under heavy update/remove traffic, and repeated drain/refill cycles.

use dary_queue::{KeyedMinQueue, MinQueue, OrdProvider, QuaternaryHeap};

#[test]
fn test_massive_push_pop() {
    let mut heap = QuaternaryHeap::new(OrdProvider);

    for value in (0..2000).rev() {
        heap.push(value);
    }
    assert_eq!(heap.len(), 2000);

    for expected in 0..2000 {
        assert_eq!(heap.pop(), Some(expected));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_many_updates_then_drain() {
    let mut queue = KeyedMinQueue::new();

    // Everything starts far out; every item is then reprioritized to
    // the opposite order.
    for item in 0..500 {
        queue.enqueue(item, 10_000 + item).unwrap();
    }
    for item in 0..500i32 {
        queue.update(item, 500 - item).unwrap();
    }

    for expected in (0..500).rev() {
        let (item, priority) = queue.dequeue().unwrap();
        assert_eq!(item, expected);
        assert_eq!(priority, 500 - expected);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_alternating_enqueue_dequeue() {
    let mut queue = MinQueue::new();

    for round in 0..400 {
        queue.enqueue(round, round * 2);
        queue.enqueue(round + 1000, round * 2 + 1);
        assert!(queue.dequeue().is_some());
    }
    assert_eq!(queue.len(), 400);

    let mut last = i32::MIN;
    while let Some((_, priority)) = queue.dequeue() {
        assert!(priority >= last);
        last = priority;
    }
}

#[test]
fn test_removal_churn_keeps_index_exact() {
    let mut queue = KeyedMinQueue::new();

    for item in 0..1000 {
        queue.enqueue(item, (item * 7919) % 1000).unwrap();
    }

    // Remove every third item from the middle of the heap.
    for item in (0..1000).step_by(3) {
        assert!(queue.try_remove(&item).is_some());
        assert!(!queue.contains(&item));
    }

    let survivors = 1000 - (0..1000).step_by(3).count();
    assert_eq!(queue.len(), survivors);

    let mut last = i32::MIN;
    let mut drained = 0;
    while let Some((item, priority)) = queue.dequeue() {
        assert_ne!(item % 3, 0);
        assert!(priority >= last);
        last = priority;
        drained += 1;
    }
    assert_eq!(drained, survivors);
}

#[test]
fn test_drain_refill_cycles() {
    let mut queue = KeyedMinQueue::new();

    for cycle in 0..20 {
        for item in 0..100 {
            queue.enqueue(item, (item + cycle) % 100).unwrap();
        }
        let mut last = i32::MIN;
        while let Some((_, priority)) = queue.dequeue() {
            assert!(priority >= last);
            last = priority;
        }
        assert!(queue.is_empty());
    }
}

#[test]
fn test_upsert_storm() {
    let mut queue = KeyedMinQueue::new();

    // Hammer a small key space with upserts; the queue must end with
    // one entry per key carrying the last priority written.
    for round in 0..50i32 {
        for item in 0..32i32 {
            queue.enqueue_or_update(item, (item * 31 + round * 17) % 1000);
        }
        assert_eq!(queue.len(), 32);
    }

    for item in 0..32i32 {
        let expected = (item * 31 + 49 * 17) % 1000;
        assert_eq!(queue.priority_of(&item), Some(&expected));
    }
}

#[test]
fn test_clear_under_load() {
    let mut queue = KeyedMinQueue::new();

    for item in 0..500 {
        queue.enqueue(item, item).unwrap();
    }
    queue.clear();
    assert!(queue.is_empty());

    // A full rebuild after the wipe must behave like a fresh queue.
    for item in 0..500 {
        queue.enqueue(item, 500 - item).unwrap();
    }
    assert_eq!(queue.peek(), Some((&499, &1)));
}
