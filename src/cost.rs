//! Per-slot cost accrual.
//!
//! Cost is charged on generated demand, not on delivery: a contended slot
//! costs the same as an uncontended one with equal workload.

use crate::config::SimulationConfig;

/// Tickets derived from a slot's workload, one per extrinsic
pub fn tickets(workload_count: u64, config: &SimulationConfig) -> u64 {
    workload_count * config.extrinsics_per_package
}

/// USD cost of one slot's generated demand
pub fn slot_cost(workload_count: u64, config: &SimulationConfig) -> f64 {
    config.cost_per_workload * workload_count as f64
        + config.cost_per_ticket * tickets(workload_count, config) as f64
}
