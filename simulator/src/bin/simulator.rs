use std::env;
use std::process;

use jam_throughput::utils::logging;
use simulator::{run_scenarios, Config, ConfigError};

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Smallest core pool that resembles a realistic deployment; below it the
/// throughput figures say little about the modelled network.
const MIN_CORES: usize = 64;

fn main() -> Result<(), ConfigError> {
    logging::init_logging();

    let config = Config::load()?;

    // Guard against accidentally simulating a tiny pool. Override with
    // JAM_ALLOW_SMALL=1 for dev-box experiments.
    if config.model.core_count < MIN_CORES && env::var("JAM_ALLOW_SMALL").as_deref() != Ok("1") {
        eprintln!(
            "core_count={} is far below a typical deployment (>= {} cores).\n\
             If you really intend to simulate a small pool, export JAM_ALLOW_SMALL=1 and re-run.",
            config.model.core_count, MIN_CORES
        );
        process::exit(1);
    }

    let runs = run_scenarios(&config)?;

    for scenario_run in &runs {
        let summary = &scenario_run.summary;
        println!("\n--- Scenario: {} ---", scenario_run.scenario);
        println!("Theoretical throughput: {:.2} TPS", summary.theoretical_tps);
        println!("Average effective throughput: {:.2} TPS", summary.avg_effective_tps);
        println!("Average finalized throughput: {:.2} TPS", summary.avg_finalized_tps);
        println!("Average contention rate: {:.1}% of slots", summary.contention_rate_pct);
        println!("Average cost per slot: ${:.4}", summary.avg_cost_usd);
    }

    Ok(())
}
