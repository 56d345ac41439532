//! `OrderQueue`: orders by delivery price, highest first.
//!
//! Keyed by `(Reverse(price), arrival sequence)` in a `BTreeMap`, so equal
//! prices pop in the order they were pushed and every run over the same
//! input visits orders in the same sequence.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::Order;

#[derive(Default)]
pub struct OrderQueue {
    inner: BTreeMap<(Reverse<u32>, u64), Order>,
    seq:   u64,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: Order) {
        self.inner.insert((Reverse(order.price_pence), self.seq), order);
        self.seq += 1;
    }

    /// Remove and return the most valuable order.
    pub fn pop(&mut self) -> Option<Order> {
        self.inner.pop_first().map(|(_, order)| order)
    }

    pub fn peek(&self) -> Option<&Order> {
        self.inner.values().next()
    }

    /// Orders in the sequence `pop` would return them.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Sum of all queued delivery prices, in pence.
    pub fn total_value(&self) -> u64 {
        self.inner.values().map(|o| u64::from(o.price_pence)).sum()
    }
}

impl FromIterator<Order> for OrderQueue {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl Extend<Order> for OrderQueue {
    fn extend<I: IntoIterator<Item = Order>>(&mut self, iter: I) {
        for order in iter {
            self.push(order);
        }
    }
}

impl IntoIterator for OrderQueue {
    type Item = Order;
    type IntoIter = std::collections::btree_map::IntoValues<(Reverse<u32>, u64), Order>;

    /// Consume the queue in priority order.
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_values()
    }
}
