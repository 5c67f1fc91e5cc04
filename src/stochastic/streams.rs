// src/stochastic/streams.rs

use crate::error::{InventoryError, Result};
use crate::simulation::config::SimulationConfig;
use crate::stochastic::demand::DemandDistribution;
use crate::stochastic::traits::RandomStream;
use rand::distributions::Uniform;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp};

// =========================================================================
// 1. Seeded Stream
// =========================================================================

/// Reproducible random stream backed by ChaCha8.
///
/// Runs sharing a seed but using different `stream_id`s draw from
/// independent ChaCha streams.
#[derive(Debug, Clone)]
pub struct SeededStream {
    rng: ChaCha8Rng,
    interarrival: Exp<f64>,
    lead: Uniform<f64>,
    demand: DemandDistribution,
}

impl SeededStream {
    pub fn new(config: &SimulationConfig, seed: u64, stream_id: u64) -> Result<Self> {
        Self::with_demand(config, seed, stream_id, DemandDistribution::standard()?)
    }

    pub fn with_demand(
        config: &SimulationConfig,
        seed: u64,
        stream_id: u64,
        demand: DemandDistribution,
    ) -> Result<Self> {
        config.validate()?;

        let interarrival = Exp::new(1.0 / config.mean_demand_time)
            .map_err(|e| InventoryError::Distribution(format!("interarrival: {e}")))?;
        let lead = Uniform::new_inclusive(config.min_lead, config.max_lead);

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream_id);

        Ok(Self {
            rng,
            interarrival,
            lead,
            demand,
        })
    }
}

impl RandomStream for SeededStream {
    fn interarrival_time(&mut self) -> f64 {
        self.interarrival.sample(&mut self.rng)
    }

    fn lead_time(&mut self) -> f64 {
        self.lead.sample(&mut self.rng)
    }

    fn demand_size(&mut self) -> i64 {
        self.demand.sample(&mut self.rng)
    }
}

// =========================================================================
// 2. Constant Stream
// =========================================================================

/// Deterministic stream: every draw returns the same value.
///
/// Defaults to interarrival = mean demand time, lead time = minimum lead,
/// demand = 1 unit. Useful for hand-checkable runs.
#[derive(Debug, Clone)]
pub struct ConstantStream {
    interarrival: f64,
    lead: f64,
    demand: i64,
}

impl ConstantStream {
    pub fn new(interarrival: f64, lead: f64, demand: i64) -> Self {
        Self {
            interarrival,
            lead,
            demand,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.mean_demand_time, config.min_lead, 1)
    }
}

impl RandomStream for ConstantStream {
    fn interarrival_time(&mut self) -> f64 {
        self.interarrival
    }

    fn lead_time(&mut self) -> f64 {
        self.lead
    }

    fn demand_size(&mut self) -> i64 {
        self.demand
    }
}
