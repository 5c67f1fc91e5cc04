//! Discrete-event evaluation of (s, S) inventory policies.
//!
//! Each candidate policy is simulated month by month against exponential
//! demand arrivals and uniform supplier lead times, and summarised as
//! average ordering, holding and shortage cost per month.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod stochastic;
pub mod strategy;

pub use error::{InventoryError, Result};
pub use simulation::comparator::{compare_policies, PolicyComparison, RejectedCandidate};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{simulate_policy, HistoryRecord, PolicyResult, PolicySimulation};
pub use stochastic::streams::{ConstantStream, SeededStream};
pub use stochastic::traits::RandomStream;
pub use strategy::reorder::ReorderPolicy;
