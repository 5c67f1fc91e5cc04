// src/stochastic/traits.rs

use std::fmt::Debug;

/// Source of every random quantity a policy run consumes.
///
/// Each run owns its own stream, so no two runs can influence each other's draws.
/// We require `Send` so independent runs can be moved onto worker threads.
pub trait RandomStream: Debug + Send {
    /// Time until the next customer demand.
    fn interarrival_time(&mut self) -> f64;

    /// Delay between placing and receiving a replenishment order.
    fn lead_time(&mut self) -> f64;

    /// Units requested by one customer demand.
    fn demand_size(&mut self) -> i64;
}
