// src/simulation/config.rs

use crate::error::{InventoryError, Result};

/// Parameters shared, read-only, by every policy run in a comparison.
///
/// Time is measured in months; one review epoch is one month.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Fixed cost per order placed (K).
    pub setup_cost: f64,
    /// Cost per unit ordered (i).
    pub unit_cost: f64,
    /// Holding cost per unit per month (h).
    pub holding_cost: f64,
    /// Shortage cost per backlogged unit per month (pi).
    pub shortage_cost: f64,
    /// Mean time between customer demands.
    pub mean_demand_time: f64,
    pub min_lead: f64,
    pub max_lead: f64,
    pub initial_inventory: i64,
    /// Number of review epochs to simulate.
    pub months: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            setup_cost: 32.0,
            unit_cost: 3.0,
            holding_cost: 1.0,
            shortage_cost: 5.0,
            mean_demand_time: 0.1,
            min_lead: 0.5,
            max_lead: 1.0,
            initial_inventory: 60,
            months: 120,
        }
    }
}

impl SimulationConfig {
    pub fn with_ordering_costs(mut self, setup_cost: f64, unit_cost: f64) -> Self {
        self.setup_cost = setup_cost;
        self.unit_cost = unit_cost;
        self
    }

    pub fn with_carrying_costs(mut self, holding_cost: f64, shortage_cost: f64) -> Self {
        self.holding_cost = holding_cost;
        self.shortage_cost = shortage_cost;
        self
    }

    pub fn with_mean_demand_time(mut self, mean_demand_time: f64) -> Self {
        self.mean_demand_time = mean_demand_time;
        self
    }

    pub fn with_lead_time(mut self, min_lead: f64, max_lead: f64) -> Self {
        self.min_lead = min_lead;
        self.max_lead = max_lead;
        self
    }

    pub fn with_initial_inventory(mut self, initial_inventory: i64) -> Self {
        self.initial_inventory = initial_inventory;
        self
    }

    pub fn with_months(mut self, months: usize) -> Self {
        self.months = months;
        self
    }

    /// Rejects any configuration that could not produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("setup cost", self.setup_cost),
            ("unit cost", self.unit_cost),
            ("holding cost", self.holding_cost),
            ("shortage cost", self.shortage_cost),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(InventoryError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        // A zero mean never advances the clock
        if !self.mean_demand_time.is_finite() || self.mean_demand_time <= 0.0 {
            return Err(InventoryError::Config(format!(
                "mean demand time must be positive, got {}",
                self.mean_demand_time
            )));
        }
        // The demand rate must be finite and the mean must still move the clock at the horizon
        let horizon = self.months as f64;
        if !(1.0 / self.mean_demand_time).is_finite() || horizon + self.mean_demand_time <= horizon
        {
            return Err(InventoryError::Config(format!(
                "mean demand time {} is too small to advance the clock",
                self.mean_demand_time
            )));
        }

        if !self.min_lead.is_finite() || !self.max_lead.is_finite() || self.min_lead < 0.0 {
            return Err(InventoryError::Config(format!(
                "lead time bounds must be finite and non-negative, got [{}, {}]",
                self.min_lead, self.max_lead
            )));
        }
        if self.min_lead > self.max_lead {
            return Err(InventoryError::Config(format!(
                "min lead {} exceeds max lead {}",
                self.min_lead, self.max_lead
            )));
        }

        if self.initial_inventory < 0 {
            return Err(InventoryError::Config(format!(
                "initial inventory must be non-negative, got {}",
                self.initial_inventory
            )));
        }

        if self.months == 0 {
            return Err(InventoryError::Config(
                "simulation must cover at least one month".to_string(),
            ));
        }

        Ok(())
    }
}
