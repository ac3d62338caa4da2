//! Conversion of transmitted bytes into TPS figures.

use crate::config::SimulationConfig;

/// Extrinsics per second actually transmittable this slot. Transmitted bytes
/// count as a fractional number of work-packages; partial packages
/// contribute proportionally.
pub fn effective_tps(transmitted_bytes: f64, config: &SimulationConfig) -> f64 {
    (transmitted_bytes / config.work_package_bytes as f64) * config.extrinsics_per_package as f64
        / config.slot_seconds
}

/// TPS attributed to a slot once the finality delay has elapsed: the
/// effective TPS of the slot `finality_delay_slots` earlier, undefined for
/// the first `finality_delay_slots` slots.
pub fn finalized_tps(effective_series: &[f64], slot_index: u64, finality_delay_slots: u64) -> Option<f64> {
    if slot_index >= finality_delay_slots {
        Some(effective_series[(slot_index - finality_delay_slots) as usize])
    } else {
        None
    }
}

/// Unreachable upper bound: every core at capacity, every byte a full
/// work-package. Depends only on the configuration, never on a random draw.
pub fn theoretical_tps(config: &SimulationConfig) -> f64 {
    config.core_count as f64 * config.extrinsics_per_package as f64 / config.slot_seconds
}
