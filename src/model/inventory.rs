// src/model/inventory.rs

/// Which running total a call to [`CostLedger::accrue`] touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accrual {
    Holding,
    Shortage,
    /// Level was zero: nothing is owed either way.
    Idle,
}

/// Running cost totals for a single policy run.
///
/// `holding_area` and `shortage_area` are the areas under the positive and
/// negative parts of the inventory-vs-time step function. They are scaled by
/// the cost rates only when the run is summarised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostLedger {
    pub ordering: f64,
    pub holding_area: f64,
    pub shortage_area: f64,
}

impl CostLedger {
    /// Adds `level * elapsed` to exactly one of the two areas.
    pub fn accrue(&mut self, level: i64, elapsed: f64) -> Accrual {
        debug_assert!(elapsed >= 0.0, "negative interval {elapsed}");

        if level > 0 {
            self.holding_area += level as f64 * elapsed;
            Accrual::Holding
        } else if level < 0 {
            self.shortage_area += -level as f64 * elapsed;
            Accrual::Shortage
        } else {
            Accrual::Idle
        }
    }

    pub fn record_order(&mut self, cost: f64) {
        self.ordering += cost;
    }
}

/// Mutable state owned by exactly one policy run.
#[derive(Debug, Clone)]
pub struct InventoryState {
    /// Net inventory. Negative values are backlogged demand.
    pub level: i64,
    /// Simulated time of the last processed event.
    pub clock: f64,
    pub ledger: CostLedger,
}

impl InventoryState {
    pub fn new(initial_inventory: i64) -> Self {
        Self {
            level: initial_inventory,
            clock: 0.0,
            ledger: CostLedger::default(),
        }
    }

    /// Moves the clock forward to `time`, charging the interval at the current level.
    pub fn advance_to(&mut self, time: f64) {
        debug_assert!(time >= self.clock, "clock moved backwards");
        let elapsed = time - self.clock;
        self.ledger.accrue(self.level, elapsed);
        self.clock = time;
    }

    pub fn receive(&mut self, quantity: i64) {
        self.level += quantity;
    }

    /// Demand is always met from stock or backlogged, never lost.
    pub fn fulfil(&mut self, demand: i64) {
        self.level -= demand;
    }
}
