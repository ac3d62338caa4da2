//! The per-slot simulation loop.
//!
//! One call to [`run`] takes a scenario through Init -> Looping -> Finalized
//! in a single synchronous pass over strictly increasing slot indices. Each
//! slot generates demand, scatters it across the core pool, checks per-core
//! capacity, converts transmitted bytes into TPS and accrues cost; the
//! resulting `SlotResult` records are appended in slot order and never
//! mutated afterwards.

use serde::Serialize;

use crate::config::{SimulationConfig, SimulationError, WitnessStrategy};
use crate::rng::SimRng;
use crate::scenario::ScenarioKind;
use crate::{contention, cost, distribution, throughput, workload};

// ------------------------------------------------------------------------------------------------
// Result Records
// ------------------------------------------------------------------------------------------------

/// Everything recorded about one simulated slot
#[derive(Debug, Clone, Serialize)]
pub struct SlotResult {
    pub slot_index: u64,
    /// Work-packages generated for this slot
    pub workload_count: u64,
    /// Witnesses generated for this slot
    pub witness_count: u64,
    /// True if any core was over capacity
    pub contended: bool,
    /// Bytes actually transmitted after per-core capping
    pub processed_bytes: f64,
    pub effective_tps: f64,
    /// None until `finality_delay_slots` slots have elapsed
    pub finalized_tps: Option<f64>,
    pub cost_usd: f64,
}

/// Aggregates computed once the slot loop completes
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioSummary {
    pub theoretical_tps: f64,
    pub avg_effective_tps: f64,
    /// Mean over the whole run; slots that never finalized count as 0
    pub avg_finalized_tps: f64,
    pub contention_rate_pct: f64,
    pub avg_cost_usd: f64,
}

/// One finished scenario run: the ordered slot records plus their summary
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRun {
    pub scenario: ScenarioKind,
    pub slots: Vec<SlotResult>,
    pub summary: ScenarioSummary,
}

// ------------------------------------------------------------------------------------------------
// Simulation Loop
// ------------------------------------------------------------------------------------------------

/// Runs one scenario for `num_slots` slots.
///
/// Validates the configuration before the first slot executes; any error
/// aborts the whole run and no partial `ScenarioRun` escapes.
pub fn run(
    config: &SimulationConfig,
    scenario: ScenarioKind,
    num_slots: u64,
    rng: &mut SimRng,
) -> Result<ScenarioRun, SimulationError> {
    config.validate()?;

    let mut slots: Vec<SlotResult> = Vec::with_capacity(num_slots as usize);
    let mut effective_series: Vec<f64> = Vec::with_capacity(num_slots as usize);

    for slot_index in 0..num_slots {
        rng.advance_slot(slot_index);

        let demand = workload::generate_workload(scenario, rng);

        // Distribute whole packages, or fixed-size chunks when configured.
        let (unit_bytes, total_units) = match config.chunk_size_bytes {
            Some(chunk) => (
                chunk,
                demand.workload_count
                    * distribution::chunks_per_package(config.work_package_bytes, chunk),
            ),
            None => (config.work_package_bytes, demand.workload_count),
        };
        let allocation = distribution::distribute(rng, total_units, config.core_count);

        let witness_bytes_per_core: Vec<u64> = match config.witness_strategy {
            WitnessStrategy::Multinomial => {
                distribution::distribute(rng, demand.witness_count, config.core_count)
                    .into_iter()
                    .map(|count| count * config.witness_bytes)
                    .collect()
            }
            WitnessStrategy::EvenShare => {
                let share = (demand.witness_count / config.core_count as u64) * config.witness_bytes;
                vec![share; config.core_count]
            }
        };

        let transmission = contention::evaluate_slot(
            config.capacity_bytes_per_core(),
            unit_bytes,
            &allocation,
            &witness_bytes_per_core,
        );

        let effective_tps = throughput::effective_tps(transmission.transmitted_bytes, config);
        effective_series.push(effective_tps);
        let finalized_tps =
            throughput::finalized_tps(&effective_series, slot_index, config.finality_delay_slots);

        slots.push(SlotResult {
            slot_index,
            workload_count: demand.workload_count,
            witness_count: demand.witness_count,
            contended: transmission.contended,
            processed_bytes: transmission.transmitted_bytes,
            effective_tps,
            finalized_tps,
            cost_usd: cost::slot_cost(demand.workload_count, config),
        });
    }

    let summary = summarize(config, &slots);
    Ok(ScenarioRun { scenario, slots, summary })
}

fn summarize(config: &SimulationConfig, slots: &[SlotResult]) -> ScenarioSummary {
    let n = slots.len() as f64;
    let mean = |total: f64| if slots.is_empty() { 0.0 } else { total / n };

    ScenarioSummary {
        theoretical_tps: throughput::theoretical_tps(config),
        avg_effective_tps: mean(slots.iter().map(|s| s.effective_tps).sum()),
        avg_finalized_tps: mean(slots.iter().map(|s| s.finalized_tps.unwrap_or(0.0)).sum()),
        contention_rate_pct: mean(slots.iter().filter(|s| s.contended).count() as f64 * 100.0),
        avg_cost_usd: mean(slots.iter().map(|s| s.cost_usd).sum()),
    }
}
