use inventory_sim::model::inventory::{Accrual, CostLedger};
use inventory_sim::model::queues::{PendingOrder, PendingOrderQueue};
use inventory_sim::{
    compare_policies, simulate_policy, ConstantStream, PolicySimulation, ReorderPolicy,
    SeededStream, SimulationConfig,
};
use proptest::prelude::*;

fn quarter_config() -> SimulationConfig {
    SimulationConfig::default()
        .with_mean_demand_time(0.25)
        .with_lead_time(0.5, 1.0)
}

proptest! {
    #[test]
    fn ledger_touches_at_most_one_total(level in -1_000i64..1_000, elapsed in 0.0f64..10.0) {
        let mut ledger = CostLedger::default();
        let accrual = ledger.accrue(level, elapsed);

        match accrual {
            Accrual::Holding => prop_assert_eq!(ledger.shortage_area, 0.0),
            Accrual::Shortage => prop_assert_eq!(ledger.holding_area, 0.0),
            Accrual::Idle => prop_assert_eq!(ledger, CostLedger::default()),
        }
        prop_assert_eq!(level == 0, accrual == Accrual::Idle);
    }

    #[test]
    fn queue_stays_sorted(ops in prop::collection::vec((0.0f64..50.0, 1i64..100, any::<bool>()), 1..60)) {
        let mut queue = PendingOrderQueue::new();
        let mut clock = 0.0;

        for (time, quantity, drain) in ops {
            if drain {
                clock = time;
                while queue.drain_earliest_if_due(clock).is_some() {}
                prop_assert!(queue.peek_earliest().map_or(true, |o| o.arrival_time > clock));
            } else {
                queue.insert(PendingOrder { arrival_time: time, quantity });
            }

            let times: Vec<f64> = queue.iter().map(|o| o.arrival_time).collect();
            prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn test_reorder_scenario_from_low_stock() {
    let config = SimulationConfig::default()
        .with_ordering_costs(32.0, 3.0)
        .with_carrying_costs(1.0, 5.0)
        .with_initial_inventory(5)
        .with_months(1);
    let stream = ConstantStream::from_config(&config);
    let mut sim =
        PolicySimulation::new(config, ReorderPolicy::new(5, 20), Box::new(stream)).unwrap();
    let result = sim.run().unwrap();

    assert_eq!(result.orders_placed, 1);
    assert_eq!(sim.history[0].order_quantity, 15);
    assert_eq!(result.avg_ordering_cost, 77.0);
}

#[test]
fn test_no_reorder_above_reorder_point() {
    let config = SimulationConfig::default()
        .with_initial_inventory(10)
        .with_months(1);
    let stream = ConstantStream::from_config(&config);
    let result = simulate_policy(&config, ReorderPolicy::new(5, 20), Box::new(stream)).unwrap();

    assert_eq!(result.orders_placed, 0);
    assert_eq!(result.avg_ordering_cost, 0.0);
}

#[test]
fn test_order_frequency_grows_with_reorder_point() {
    let config = quarter_config().with_initial_inventory(20).with_months(12);

    let orders: Vec<usize> = [5, 10, 15]
        .into_iter()
        .map(|s| {
            let stream = ConstantStream::from_config(&config);
            simulate_policy(&config, ReorderPolicy::new(s, 20), Box::new(stream))
                .unwrap()
                .orders_placed
        })
        .collect();

    assert_eq!(orders, vec![2, 3, 5]);
}

#[test]
fn test_seeded_comparison_is_deterministic() {
    let config = SimulationConfig::default();
    let candidates = [ReorderPolicy::new(20, 40), ReorderPolicy::new(40, 60)];

    let first = compare_policies(&config, &candidates, 2024).unwrap();
    let second = compare_policies(&config, &candidates, 2024).unwrap();
    assert_eq!(first.results, second.results);

    let stream_a = SeededStream::new(&config, 2024, 0).unwrap();
    let stream_b = SeededStream::new(&config, 2024, 0).unwrap();
    assert_eq!(
        simulate_policy(&config, candidates[0], Box::new(stream_a)).unwrap(),
        simulate_policy(&config, candidates[0], Box::new(stream_b)).unwrap()
    );
}

#[test]
fn test_clock_never_crosses_horizon() {
    let config = SimulationConfig::default().with_months(36);
    let stream = SeededStream::new(&config, 11, 0).unwrap();
    let mut sim =
        PolicySimulation::new(config, ReorderPolicy::new(30, 80), Box::new(stream)).unwrap();
    sim.run().unwrap();

    assert_eq!(sim.current_month, 36);
    assert!(sim.state.clock <= 36.0);
    assert!(sim
        .history
        .windows(2)
        .all(|w| w[0].closing_clock <= w[1].review_clock));
}

#[test]
fn test_demonstration_costs_are_plausible() {
    let config = SimulationConfig::default();
    let comparison = compare_policies(&config, &[ReorderPolicy::new(20, 60)], 42).unwrap();
    let result = &comparison.results[0];

    // Roughly 25 units a month at 3 per unit, plus setup costs
    assert!(result.avg_ordering_cost > 60.0);
    assert!(result.avg_holding_cost > 0.0);
    assert!(result.avg_shortage_cost >= 0.0);
    let sum = result.avg_ordering_cost + result.avg_holding_cost + result.avg_shortage_cost;
    assert!((result.avg_total_cost - sum).abs() < 1e-9);
}
