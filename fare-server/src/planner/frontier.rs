//! Frontier for the cheapest-fare search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::Price;

/// A candidate waiting in the frontier.
struct Entry<N> {
    cost: Price,
    /// Insertion order, used to break ties between equal costs.
    seq: u64,
    node: N,
}

// `BinaryHeap` is a max-heap, so the ordering is reversed: the cheapest
// entry (and among equal costs, the earliest pushed) compares greatest.
impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

/// Min-priority queue of `(node, cumulative cost)` candidates.
///
/// There is no decrease-key: a cheaper path to a node is pushed as a new
/// entry and the old one stays behind. Callers detect those stale entries
/// when they pop them. Nodes only need equality for the search, so the
/// queue never orders by node.
pub(super) struct Frontier<N> {
    heap: BinaryHeap<Entry<N>>,
    next_seq: u64,
}

impl<N> Frontier<N> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert a node with its cumulative cost.
    pub fn push(&mut self, node: N, cost: Price) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cost, seq, node });
    }

    /// Extract the entry with the lowest cost.
    ///
    /// Entries with equal cost come out in the order they were pushed.
    pub fn pop(&mut self) -> Option<(N, Price)> {
        self.heap.pop().map(|entry| (entry.node, entry.cost))
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(amount: u64) -> Price {
        Price::new(amount)
    }

    #[test]
    fn push_pop() {
        let mut f = Frontier::new();
        assert_eq!(f.pop(), None);

        f.push("N", p(1));
        assert_eq!(f.pop(), Some(("N", p(1))));
        assert_eq!(f.pop(), None);

        f.push("A", p(1));
        f.push("B", p(2));
        assert_eq!(f.pop(), Some(("A", p(1))));
        assert_eq!(f.pop(), Some(("B", p(2))));
        assert_eq!(f.pop(), None);

        f.push("X", p(2));
        f.push("Y", p(1));
        assert_eq!(f.pop(), Some(("Y", p(1))));
        assert_eq!(f.pop(), Some(("X", p(2))));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn equal_costs_pop_in_push_order() {
        let mut f = Frontier::new();
        f.push("C", p(5));
        f.push("A", p(5));
        f.push("B", p(5));
        assert_eq!(f.pop(), Some(("C", p(5))));
        assert_eq!(f.pop(), Some(("A", p(5))));
        assert_eq!(f.pop(), Some(("B", p(5))));
    }

    #[test]
    fn superseded_entries_stay_queued() {
        let mut f = Frontier::new();
        f.push("A", p(10));
        f.push("A", p(3));
        assert_eq!(f.len(), 2);

        assert_eq!(f.pop(), Some(("A", p(3))));
        assert_eq!(f.pop(), Some(("A", p(10))));
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn nodes_need_no_ordering() {
        #[derive(Debug, PartialEq)]
        struct Opaque(u8);

        let mut f = Frontier::new();
        f.push(Opaque(1), p(9));
        f.push(Opaque(2), p(4));
        assert_eq!(f.pop(), Some((Opaque(2), p(4))));
    }
}
