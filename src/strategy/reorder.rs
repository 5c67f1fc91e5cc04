// src/strategy/reorder.rs

use crate::error::{InventoryError, Result};
use crate::model::queues::{PendingOrder, PendingOrderQueue};
use crate::simulation::config::SimulationConfig;
use crate::stochastic::traits::RandomStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The (s, S) policy: at each review, if inventory is at or below `s`,
/// order enough to bring it back up to `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    #[serde(rename = "s")]
    pub reorder_point: i64,
    #[serde(rename = "S")]
    pub order_up_to: i64,
}

/// An order placed at a review epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedOrder {
    pub quantity: i64,
    pub cost: f64,
    pub arrival_time: f64,
}

impl ReorderPolicy {
    pub fn new(reorder_point: i64, order_up_to: i64) -> Self {
        Self {
            reorder_point,
            order_up_to,
        }
    }

    /// S must lie strictly above s, otherwise a reorder cannot lift inventory above s.
    pub fn validate(&self) -> Result<()> {
        if self.order_up_to <= self.reorder_point {
            return Err(InventoryError::InvalidPolicy {
                reorder_point: self.reorder_point,
                order_up_to: self.order_up_to,
                reason: "order-up-to level must exceed the reorder point".to_string(),
            });
        }
        Ok(())
    }

    /// Review decision at the start of an epoch.
    ///
    /// Returns `None` when `level > s`. Otherwise orders `S - level` units,
    /// draws a lead time and queues the order for arrival at `clock + lead`.
    pub fn review(
        &self,
        level: i64,
        clock: f64,
        config: &SimulationConfig,
        stream: &mut dyn RandomStream,
        pending: &mut PendingOrderQueue,
    ) -> Result<Option<PlacedOrder>> {
        if level > self.reorder_point {
            return Ok(None);
        }

        let quantity = self
            .order_up_to
            .checked_sub(level)
            .ok_or_else(|| InventoryError::InvalidPolicy {
                reorder_point: self.reorder_point,
                order_up_to: self.order_up_to,
                reason: format!("order quantity overflows at inventory level {level}"),
            })?;
        if quantity <= 0 {
            return Err(InventoryError::DegenerateOrder { level, quantity });
        }

        let cost = config.setup_cost + config.unit_cost * quantity as f64;
        let arrival_time = clock + stream.lead_time();
        pending.insert(PendingOrder {
            arrival_time,
            quantity,
        });

        Ok(Some(PlacedOrder {
            quantity,
            cost,
            arrival_time,
        }))
    }
}

impl fmt::Display for ReorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s={} & S={}", self.reorder_point, self.order_up_to)
    }
}

/// Parses `"s,S"`, e.g. `"20,60"`.
impl FromStr for ReorderPolicy {
    type Err = InventoryError;

    fn from_str(text: &str) -> Result<Self> {
        let parse = |part: Option<&str>| -> Result<i64> {
            let part = part.map(str::trim).unwrap_or_default();
            part.parse::<i64>().map_err(|_| {
                InventoryError::Config(format!("expected policy as \"s,S\", got {text:?}"))
            })
        };

        let mut parts = text.split(',');
        let reorder_point = parse(parts.next())?;
        let order_up_to = parse(parts.next())?;
        if parts.next().is_some() {
            return Err(InventoryError::Config(format!(
                "expected policy as \"s,S\", got {text:?}"
            )));
        }

        Ok(Self::new(reorder_point, order_up_to))
    }
}
