//! Export of finished scenario runs: one per-slot CSV per scenario plus a
//! single summary JSON covering the whole invocation.

use std::fmt::Write as _;
use std::fs;

use jam_throughput::utils::logging;
use jam_throughput::ScenarioRun;

use crate::config::Config;

/// Saves every scenario run under the configured results directory.
///
/// Produces `jam_results_<scenario>.csv` with columns
/// `slot_index, effective_tps, finalized_tps, contended, cost_usd`
/// (finalized TPS renders the not-yet-finalized sentinel as 0.0), and
/// `simulation_stats.json` with the parameters and per-scenario aggregates.
pub fn save_results(config: &Config, runs: &[ScenarioRun]) -> Result<(), String> {
    let results_dir = &config.run.results_dir;
    fs::create_dir_all(results_dir).map_err(|e| e.to_string())?;

    for run in runs {
        let csv_file = format!("{}/jam_results_{}.csv", results_dir, run.scenario.tag());
        fs::write(&csv_file, slot_csv(run)).map_err(|e| e.to_string())?;
        logging::log("SIMULATOR", &format!("Saved per-slot data to {}", csv_file));
    }

    let stats = serde_json::json!({
        "parameters": {
            "core_count": config.model.core_count,
            "slot_seconds": config.model.slot_seconds,
            "work_package_bytes": config.model.work_package_bytes,
            "witness_bytes": config.model.witness_bytes,
            "per_core_bandwidth": config.model.per_core_bandwidth,
            "finality_delay_slots": config.model.finality_delay_slots,
            "extrinsics_per_package": config.model.extrinsics_per_package,
            "cost_per_workload": config.model.cost_per_workload,
            "cost_per_ticket": config.model.cost_per_ticket,
            "chunk_size_bytes": config.model.chunk_size_bytes,
            "witness_strategy": config.model.witness_strategy,
            "num_slots": config.run.num_slots,
            "seed": config.run.seed,
            "reseed_interval_slots": config.run.reseed_interval_slots,
        },
        "results": runs.iter().map(|run| {
            serde_json::json!({
                "scenario": run.scenario.tag(),
                "theoretical_tps": run.summary.theoretical_tps,
                "avg_effective_tps": run.summary.avg_effective_tps,
                "avg_finalized_tps": run.summary.avg_finalized_tps,
                "contention_rate_pct": run.summary.contention_rate_pct,
                "avg_cost_usd": run.summary.avg_cost_usd,
            })
        }).collect::<Vec<_>>(),
    });

    let stats_file = format!("{}/simulation_stats.json", results_dir);
    fs::write(&stats_file, serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())?)
        .map_err(|e| e.to_string())?;
    logging::log("SIMULATOR", &format!("Saved simulation statistics to {}", stats_file));

    Ok(())
}

/// Renders one scenario run as CSV text.
fn slot_csv(run: &ScenarioRun) -> String {
    let mut csv = String::from("slot_index,effective_tps,finalized_tps,contended,cost_usd\n");
    for slot in &run.slots {
        let _ = writeln!(
            csv,
            "{},{},{},{},{}",
            slot.slot_index,
            slot.effective_tps,
            slot.finalized_tps.unwrap_or(0.0),
            slot.contended,
            slot.cost_usd
        );
    }
    csv
}
