// src/model/queues.rs

use std::collections::VecDeque;

/// A replenishment order that has been placed but not yet received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOrder {
    pub arrival_time: f64,
    pub quantity: i64,
}

/// Outstanding orders, kept sorted ascending by arrival time.
///
/// Orders with identical arrival times leave in the order they were inserted.
#[derive(Debug, Clone, Default)]
pub struct PendingOrderQueue {
    buffer: VecDeque<PendingOrder>,
}

impl PendingOrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts after every order that arrives at or before `order.arrival_time`.
    pub fn insert(&mut self, order: PendingOrder) {
        let position = self
            .buffer
            .partition_point(|queued| queued.arrival_time <= order.arrival_time);
        self.buffer.insert(position, order);
    }

    pub fn peek_earliest(&self) -> Option<&PendingOrder> {
        self.buffer.front()
    }

    /// Removes the earliest order if it has arrived by `time`.
    ///
    /// Call in a loop: several orders can come due before the next demand.
    pub fn drain_earliest_if_due(&mut self, time: f64) -> Option<PendingOrder> {
        match self.buffer.front() {
            Some(order) if order.arrival_time <= time => self.buffer.pop_front(),
            _ => None,
        }
    }

    /// Total quantity still in transit.
    pub fn on_order(&self) -> i64 {
        self.buffer.iter().map(|order| order.quantity).sum()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingOrder> {
        self.buffer.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(arrival_time: f64, quantity: i64) -> PendingOrder {
        PendingOrder {
            arrival_time,
            quantity,
        }
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut queue = PendingOrderQueue::new();
        queue.insert(order(3.0, 1));
        queue.insert(order(1.0, 2));
        queue.insert(order(2.0, 3));

        let times: Vec<f64> = queue.iter().map(|o| o.arrival_time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert_eq!(queue.on_order(), 6);
    }

    #[test]
    fn test_equal_arrival_times_keep_insertion_order() {
        let mut queue = PendingOrderQueue::new();
        queue.insert(order(1.5, 10));
        queue.insert(order(1.5, 20));
        queue.insert(order(0.5, 5));
        queue.insert(order(1.5, 30));

        let quantities: Vec<i64> = queue.iter().map(|o| o.quantity).collect();
        assert_eq!(quantities, vec![5, 10, 20, 30]);
    }

    #[test]
    fn test_drain_only_due_orders() {
        let mut queue = PendingOrderQueue::new();
        queue.insert(order(1.0, 4));
        queue.insert(order(2.0, 6));

        assert_eq!(queue.drain_earliest_if_due(0.5), None);
        assert_eq!(queue.len(), 2);

        // Arrival exactly at the query time counts as due
        assert_eq!(queue.drain_earliest_if_due(1.0), Some(order(1.0, 4)));
        assert_eq!(queue.drain_earliest_if_due(1.0), None);
        assert_eq!(queue.peek_earliest(), Some(&order(2.0, 6)));
    }

    #[test]
    fn test_repeated_drain_empties_everything_due() {
        let mut queue = PendingOrderQueue::new();
        queue.insert(order(0.2, 1));
        queue.insert(order(0.4, 2));
        queue.insert(order(0.9, 3));

        let mut drained = Vec::new();
        while let Some(arrived) = queue.drain_earliest_if_due(0.5) {
            drained.push(arrived.quantity);
        }

        assert_eq!(drained, vec![1, 2]);
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }
}
