//! Inventory policy comparison CLI
//!
//! Simulates each candidate (s, S) policy and prints them ranked by average monthly cost.

use clap::Parser;
use inventory_sim::io::{candidates, reporting};
use inventory_sim::{compare_policies, ReorderPolicy, SimulationConfig};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "inventory-sim")]
#[command(about = "Compare (s, S) inventory policies by simulated long-run cost", long_about = None)]
struct Args {
    /// Candidate policy as "s,S" (repeatable)
    #[arg(short, long = "policy", value_name = "s,S")]
    policies: Vec<ReorderPolicy>,

    /// CSV file of candidates with an "s,S" header
    #[arg(short, long)]
    candidates: Option<PathBuf>,

    /// Number of months to simulate
    #[arg(short, long, default_value_t = 120)]
    months: usize,

    /// Random seed; each candidate gets its own stream under it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fixed cost per order (K)
    #[arg(long, default_value_t = 32.0)]
    setup_cost: f64,

    /// Cost per unit ordered (i)
    #[arg(long, default_value_t = 3.0)]
    unit_cost: f64,

    /// Holding cost per unit per month (h)
    #[arg(long, default_value_t = 1.0)]
    holding_cost: f64,

    /// Shortage cost per unit per month (pi)
    #[arg(long, default_value_t = 5.0)]
    shortage_cost: f64,

    /// Mean time between demands, in months
    #[arg(long, default_value_t = 0.1)]
    mean_demand_time: f64,

    /// Minimum supplier lead time, in months
    #[arg(long, default_value_t = 0.5)]
    min_lead: f64,

    /// Maximum supplier lead time, in months
    #[arg(long, default_value_t = 1.0)]
    max_lead: f64,

    /// Starting inventory level
    #[arg(long, default_value_t = 60)]
    initial_inventory: i64,

    /// Write ranked results to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write monthly history of every run to this CSV file
    #[arg(long)]
    history: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::default()
            .with_ordering_costs(self.setup_cost, self.unit_cost)
            .with_carrying_costs(self.holding_cost, self.shortage_cost)
            .with_mean_demand_time(self.mean_demand_time)
            .with_lead_time(self.min_lead, self.max_lead)
            .with_initial_inventory(self.initial_inventory)
            .with_months(self.months)
    }

    fn candidates(&self) -> inventory_sim::Result<Vec<ReorderPolicy>> {
        let mut list = self.policies.clone();
        if let Some(path) = &self.candidates {
            list.extend(candidates::read_candidates_file(path)?);
        }
        if list.is_empty() {
            list = candidates::demonstration_candidates();
        }
        Ok(list)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> inventory_sim::Result<()> {
    let config = args.config();
    let candidates = args.candidates()?;

    let comparison = compare_policies(&config, &candidates, args.seed)?;

    println!();
    print!("{}", reporting::render_table(&comparison.results));

    if !comparison.rejected.is_empty() {
        println!("\nSkipped candidates:");
        for rejected in &comparison.rejected {
            println!("  {}: {}", rejected.policy, rejected.reason);
        }
    }

    if let Some(path) = &args.output {
        reporting::write_results_file(path, &comparison.results)?;
        info!(path = %path.display(), rows = comparison.results.len(), "Wrote results");
    }
    if let Some(path) = &args.history {
        reporting::write_history_file(path, &comparison.history)?;
        info!(path = %path.display(), rows = comparison.history.len(), "Wrote history");
    }

    Ok(())
}
