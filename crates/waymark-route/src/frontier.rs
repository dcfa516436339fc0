//! Priority frontier for the route-order search.
//!
//! Entries are stored in a min-heap keyed by `(rank, insertion_order)`.
//! Lower ranks are popped first; ties are broken by insertion order
//! (FIFO).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<E> {
    item: E,
    rank: u64,
    /// Monotonically increasing; lower = pushed earlier.
    seq: u64,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in Reverse.
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO ties.
pub(crate) struct Frontier<E> {
    heap: BinaryHeap<Reverse<Entry<E>>>,
    seq: u64,
}

impl<E> Frontier<E> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, item: E, rank: u64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, rank, seq }));
    }

    /// Pop the lowest-ranked item together with its rank.
    pub(crate) fn pop(&mut self) -> Option<(E, u64)> {
        self.heap.pop().map(|Reverse(entry)| (entry.item, entry.rank))
    }

    /// Total number of pushes since creation.
    pub(crate) fn pushed(&self) -> u64 {
        self.seq
    }
}

impl<E> Default for Frontier<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_rank() {
        let mut q = Frontier::new();
        q.push("a", 30);
        q.push("b", 10);
        q.push("c", 20);

        assert_eq!(q.pop(), Some(("b", 10)));
        assert_eq!(q.pop(), Some(("c", 20)));
        assert_eq!(q.pop(), Some(("a", 30)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn fifo_on_equal_rank() {
        let mut q = Frontier::new();
        q.push("first", 1);
        q.push("second", 1);
        q.push("early", 0);
        q.push("third", 1);

        assert_eq!(q.pop().map(|e| e.0), Some("early"));
        assert_eq!(q.pop().map(|e| e.0), Some("first"));
        assert_eq!(q.pop().map(|e| e.0), Some("second"));
        assert_eq!(q.pop().map(|e| e.0), Some("third"));
    }

    #[test]
    fn pushed_counts_every_push() {
        let mut q = Frontier::<u8>::default();
        q.push(1, 1);
        q.push(2, 1);
        q.pop();
        assert_eq!(q.pushed(), 2);
        assert_eq!(q.pop(), Some((2, 1)));
    }
}
