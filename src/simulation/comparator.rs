// src/simulation/comparator.rs

use crate::error::{InventoryError, Result};
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{HistoryRecord, PolicyResult, PolicySimulation};
use crate::stochastic::streams::SeededStream;
use crate::strategy::reorder::ReorderPolicy;
use tracing::{info, warn};

/// A candidate that was skipped, with the reason it could not be evaluated.
#[derive(Debug)]
pub struct RejectedCandidate {
    pub policy: ReorderPolicy,
    pub reason: InventoryError,
}

#[derive(Debug, Default)]
pub struct PolicyComparison {
    /// Sorted ascending by average total cost.
    pub results: Vec<PolicyResult>,
    pub rejected: Vec<RejectedCandidate>,
    /// Monthly history of every completed run, in candidate order.
    pub history: Vec<HistoryRecord>,
}

impl PolicyComparison {
    pub fn best(&self) -> Option<&PolicyResult> {
        self.results.first()
    }
}

/// Simulates every candidate independently and ranks the ones that complete.
///
/// Candidate `n` draws from ChaCha stream `n` under `seed`, so results are
/// reproducible and unaffected by the other candidates. An invalid shared
/// config fails the whole comparison; an invalid candidate is only skipped.
pub fn compare_policies(
    config: &SimulationConfig,
    candidates: &[ReorderPolicy],
    seed: u64,
) -> Result<PolicyComparison> {
    config.validate()?;
    info!(
        candidates = candidates.len(),
        months = config.months,
        seed,
        "Comparing policies"
    );

    let mut comparison = PolicyComparison::default();
    for (index, policy) in candidates.iter().enumerate() {
        match run_candidate(config, *policy, seed, index as u64) {
            Ok((result, history)) => {
                comparison.results.push(result);
                comparison.history.extend(history);
            }
            Err(reason) => {
                warn!(%policy, %reason, "Skipping candidate");
                comparison.rejected.push(RejectedCandidate {
                    policy: *policy,
                    reason,
                });
            }
        }
    }

    comparison
        .results
        .sort_by(|a, b| a.avg_total_cost.total_cmp(&b.avg_total_cost));

    Ok(comparison)
}

fn run_candidate(
    config: &SimulationConfig,
    policy: ReorderPolicy,
    seed: u64,
    stream_id: u64,
) -> Result<(PolicyResult, Vec<HistoryRecord>)> {
    let stream = SeededStream::new(config, seed, stream_id)?;
    let mut simulation = PolicySimulation::new(config.clone(), policy, Box::new(stream))?;
    let result = simulation.run()?;
    Ok((result, simulation.history))
}
