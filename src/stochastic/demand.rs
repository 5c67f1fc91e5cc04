// src/stochastic/demand.rs

use crate::error::{InventoryError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// A discrete distribution over demand sizes.
///
/// Probabilities are checked, never renormalised: they must already sum to 1.
#[derive(Debug, Clone)]
pub struct DemandDistribution {
    sizes: Vec<i64>,
    probabilities: Vec<f64>,
    index: WeightedIndex<f64>,
}

impl DemandDistribution {
    pub fn new(sizes: Vec<i64>, probabilities: Vec<f64>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(InventoryError::Distribution(
                "demand distribution has no outcomes".to_string(),
            ));
        }
        if sizes.len() != probabilities.len() {
            return Err(InventoryError::Distribution(format!(
                "{} demand sizes but {} probabilities",
                sizes.len(),
                probabilities.len()
            )));
        }
        if let Some(size) = sizes.iter().find(|&&size| size <= 0) {
            return Err(InventoryError::Distribution(format!(
                "demand size must be positive, got {size}"
            )));
        }
        if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(InventoryError::Distribution(format!(
                "probabilities must be finite and non-negative: {probabilities:?}"
            )));
        }

        let total: f64 = probabilities.iter().sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(InventoryError::Distribution(format!(
                "probabilities sum to {total}, expected 1"
            )));
        }

        let index = WeightedIndex::new(&probabilities)
            .map_err(|e| InventoryError::Distribution(e.to_string()))?;

        Ok(Self {
            sizes,
            probabilities,
            index,
        })
    }

    /// Demand of 1, 2, 3 or 4 units with probabilities 1/6, 1/3, 1/3, 1/6.
    pub fn standard() -> Result<Self> {
        Self::new(
            vec![1, 2, 3, 4],
            vec![1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
        )
    }

    /// Draws one demand size. Consumes exactly one value from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.sizes[self.index.sample(rng)]
    }

    pub fn mean(&self) -> f64 {
        self.sizes
            .iter()
            .zip(&self.probabilities)
            .map(|(&size, &p)| size as f64 * p)
            .sum()
    }
}
