// src/simulation/engine.rs

use crate::error::{InventoryError, Result};
use crate::model::inventory::InventoryState;
use crate::model::queues::PendingOrderQueue;
use crate::simulation::config::SimulationConfig;
use crate::stochastic::traits::RandomStream;
use crate::strategy::reorder::ReorderPolicy;
use serde::Serialize;
use tracing::{debug, info, trace};

/// Consecutive demand draws that leave the clock unchanged before a run is abandoned.
const STALL_LIMIT: usize = 1_000;

/// One row per simulated month, written to CSV on request.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    #[serde(rename = "s")]
    pub reorder_point: i64,
    #[serde(rename = "S")]
    pub order_up_to: i64,
    pub month: usize,
    pub review_clock: f64,
    pub review_level: i64,
    pub order_quantity: i64,
    pub ordering_cost: f64,
    pub demand_events: usize,
    pub closing_level: i64,
    pub closing_clock: f64,
    pub outstanding_orders: usize,
}

/// Long-run averages for one (s, S) policy. Costs are per month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyResult {
    #[serde(rename = "s")]
    pub reorder_point: i64,
    #[serde(rename = "S")]
    pub order_up_to: i64,
    pub avg_ordering_cost: f64,
    pub avg_holding_cost: f64,
    pub avg_shortage_cost: f64,
    pub avg_total_cost: f64,
    pub orders_placed: usize,
}

impl PolicyResult {
    pub fn policy(&self) -> ReorderPolicy {
        ReorderPolicy::new(self.reorder_point, self.order_up_to)
    }
}

/// Drives a single (s, S) policy through the configured number of review epochs.
///
/// Each month starts with a review, followed by demand events drawn with
/// exponential gaps. Replenishments that arrive at or before a demand event
/// are received first. The draw that would cross the month boundary is
/// discarded and the clock stays at the last demand event.
pub struct PolicySimulation {
    config: SimulationConfig,
    policy: ReorderPolicy,
    stream: Box<dyn RandomStream>,

    pub state: InventoryState,
    pub pending: PendingOrderQueue,
    pub current_month: usize,
    pub orders_placed: usize,
    pub history: Vec<HistoryRecord>,
}

impl PolicySimulation {
    /// Both the config and the policy are checked here, before any event runs.
    pub fn new(
        config: SimulationConfig,
        policy: ReorderPolicy,
        stream: Box<dyn RandomStream>,
    ) -> Result<Self> {
        config.validate()?;
        policy.validate()?;

        let state = InventoryState::new(config.initial_inventory);
        let history = Vec::with_capacity(config.months);
        Ok(Self {
            config,
            policy,
            stream,
            state,
            pending: PendingOrderQueue::new(),
            current_month: 0,
            orders_placed: 0,
            history,
        })
    }

    pub fn run(&mut self) -> Result<PolicyResult> {
        info!(
            s = self.policy.reorder_point,
            S = self.policy.order_up_to,
            months = self.config.months,
            "Simulating policy"
        );

        while self.current_month < self.config.months {
            self.step()?;
        }

        let result = self.summary();
        info!(
            s = result.reorder_point,
            S = result.order_up_to,
            total = result.avg_total_cost,
            orders = result.orders_placed,
            "Policy complete"
        );
        Ok(result)
    }

    fn step(&mut self) -> Result<()> {
        let month = self.current_month;
        let month_end = (month + 1) as f64;
        let review_clock = self.state.clock;
        let review_level = self.state.level;

        // Review happens before any demand this month
        let placed = self.policy.review(
            review_level,
            review_clock,
            &self.config,
            self.stream.as_mut(),
            &mut self.pending,
        )?;
        if let Some(order) = placed {
            self.state.ledger.record_order(order.cost);
            self.orders_placed += 1;
            debug!(
                month,
                quantity = order.quantity,
                arrival = order.arrival_time,
                cost = order.cost,
                "Order placed"
            );
        }

        let mut demand_events = 0;
        let mut stalled = 0;
        loop {
            let gap = self.stream.interarrival_time();
            if !gap.is_finite() || gap < 0.0 {
                return Err(InventoryError::Distribution(format!(
                    "interarrival draw {gap} is not a finite non-negative time"
                )));
            }

            let next_demand = self.state.clock + gap;
            if next_demand >= month_end {
                break;
            }

            if next_demand > self.state.clock {
                stalled = 0;
            } else {
                stalled += 1;
                if stalled >= STALL_LIMIT {
                    return Err(InventoryError::Distribution(format!(
                        "clock stuck at {} after {STALL_LIMIT} demand draws",
                        self.state.clock
                    )));
                }
            }

            while let Some(arrival) = self.pending.drain_earliest_if_due(next_demand) {
                self.state.advance_to(arrival.arrival_time);
                self.state.receive(arrival.quantity);
                debug!(
                    month,
                    at = arrival.arrival_time,
                    quantity = arrival.quantity,
                    level = self.state.level,
                    "Order received"
                );
            }

            self.state.advance_to(next_demand);
            let demand = self.stream.demand_size();
            self.state.fulfil(demand);
            demand_events += 1;
            trace!(at = next_demand, demand, level = self.state.level, "Demand");
        }

        self.record_history(
            month,
            review_clock,
            review_level,
            placed.map(|order| (order.quantity, order.cost)),
            demand_events,
        );
        self.current_month += 1;
        Ok(())
    }

    fn record_history(
        &mut self,
        month: usize,
        review_clock: f64,
        review_level: i64,
        order: Option<(i64, f64)>,
        demand_events: usize,
    ) {
        let (order_quantity, ordering_cost) = order.unwrap_or((0, 0.0));
        self.history.push(HistoryRecord {
            reorder_point: self.policy.reorder_point,
            order_up_to: self.policy.order_up_to,
            month,
            review_clock,
            review_level,
            order_quantity,
            ordering_cost,
            demand_events,
            closing_level: self.state.level,
            closing_clock: self.state.clock,
            outstanding_orders: self.pending.len(),
        });
    }

    /// Averages the running totals over the full horizon.
    pub fn summary(&self) -> PolicyResult {
        let months = self.config.months as f64;
        let ledger = &self.state.ledger;

        let avg_ordering_cost = ledger.ordering / months;
        let avg_holding_cost = self.config.holding_cost * ledger.holding_area / months;
        let avg_shortage_cost = self.config.shortage_cost * ledger.shortage_area / months;

        PolicyResult {
            reorder_point: self.policy.reorder_point,
            order_up_to: self.policy.order_up_to,
            avg_ordering_cost,
            avg_holding_cost,
            avg_shortage_cost,
            avg_total_cost: avg_ordering_cost + avg_holding_cost + avg_shortage_cost,
            orders_placed: self.orders_placed,
        }
    }
}

/// Runs one policy to completion on its own stream.
pub fn simulate_policy(
    config: &SimulationConfig,
    policy: ReorderPolicy,
    stream: Box<dyn RandomStream>,
) -> Result<PolicyResult> {
    PolicySimulation::new(config.clone(), policy, stream)?.run()
}
