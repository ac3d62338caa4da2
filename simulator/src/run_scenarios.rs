//! The scenario loop: runs every configured scenario through the core model
//! and logs the per-scenario summaries.

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

use jam_throughput::utils::logging;
use jam_throughput::{run, ScenarioRun, SimRng};

use crate::config::{Config, ConfigError};
use crate::save_results::save_results;

// ------------------------------------------------------------------------------------------------
// Scenario Loop
// ------------------------------------------------------------------------------------------------

/// Runs all configured scenarios in order and saves their results.
///
/// Each scenario owns its own random stream (base seed offset by the
/// scenario's position in the list), so runs stay independent and
/// reproducible regardless of the scenario order.
pub fn run_scenarios(config: &Config) -> Result<Vec<ScenarioRun>, ConfigError> {
    let scenarios = config.run.parse_scenarios()?;
    log_configuration(config);

    let progress_bar = ProgressBar::new(scenarios.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} scenarios ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut runs = Vec::with_capacity(scenarios.len());
    for (index, scenario) in scenarios.into_iter().enumerate() {
        logging::log("SIMULATOR", &format!("=== Running scenario: {} ===", scenario));

        let mut rng = match config.run.seed {
            Some(seed) => SimRng::seeded(seed.wrapping_add(index as u64)),
            None => SimRng::from_entropy(),
        }
        .with_reseed_interval(config.run.reseed_interval_slots);

        let scenario_run = run(&config.model, scenario, config.run.num_slots, &mut rng)?;
        log_summary(&scenario_run);
        runs.push(scenario_run);
        progress_bar.inc(1);
    }
    progress_bar.finish_with_message("All scenarios complete");

    save_results(config, &runs).map_err(ConfigError::ValidationError)?;
    Ok(runs)
}

// ------------------------------------------------------------------------------------------------
// Logging
// ------------------------------------------------------------------------------------------------

/// Logs the configuration banner before the first scenario starts
fn log_configuration(config: &Config) {
    let start_time = Local::now();
    logging::log("SIMULATOR", "=== Simulation Configuration ===");
    logging::log("SIMULATOR", &format!("Start Time: {}", start_time.format("%Y-%m-%d %H:%M:%S")));
    logging::log("SIMULATOR", &format!("Cores: {}", config.model.core_count));
    logging::log(
        "SIMULATOR",
        &format!(
            "Per-core bandwidth: {:.2} MiB/s",
            config.model.per_core_bandwidth as f64 / (1024.0 * 1024.0)
        ),
    );
    logging::log("SIMULATOR", &format!("Slot length: {} s", config.model.slot_seconds));
    logging::log(
        "SIMULATOR",
        &format!(
            "Work-package size: {:.2} MiB",
            config.model.work_package_bytes as f64 / (1024.0 * 1024.0)
        ),
    );
    if let Some(chunk) = config.model.chunk_size_bytes {
        logging::log("SIMULATOR", &format!("Chunk size: {} B", chunk));
    }
    logging::log("SIMULATOR", &format!("Finality delay: {} slots", config.model.finality_delay_slots));
    logging::log("SIMULATOR", &format!("Scenarios: {}", config.run.scenarios.join(", ")));
    logging::log("SIMULATOR", &format!("Slots per scenario: {}", config.run.num_slots));
    logging::log("SIMULATOR", "=============================");
}

/// Logs the aggregate figures of one finished scenario
fn log_summary(scenario_run: &ScenarioRun) {
    let summary = &scenario_run.summary;
    logging::log("SIMULATOR", &format!("--- Scenario: {} ---", scenario_run.scenario));
    logging::log("SIMULATOR", &format!("Theoretical TPS: {:.2}", summary.theoretical_tps));
    logging::log("SIMULATOR", &format!("Avg effective TPS: {:.2}", summary.avg_effective_tps));
    logging::log("SIMULATOR", &format!("Avg finalized TPS: {:.2}", summary.avg_finalized_tps));
    logging::log(
        "SIMULATOR",
        &format!("Contention rate: {:.1}% of slots", summary.contention_rate_pct),
    );
    logging::log("SIMULATOR", &format!("Avg cost per slot: ${:.4}", summary.avg_cost_usd));
}
