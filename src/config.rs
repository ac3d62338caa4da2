//! Static simulation parameters and their validation.
//! A `SimulationConfig` is pure data: it is validated once before a run
//! starts and never mutated afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Errors the core model can raise. Both are fatal: no partial run is ever
/// attempted and callers never observe a partially populated `ScenarioRun`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

// ------------------------------------------------------------------------------------------------
// Witness Distribution Strategy
// ------------------------------------------------------------------------------------------------

/// How witness bytes are attributed to individual cores when checking
/// per-core capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WitnessStrategy {
    /// Witnesses get their own independent multinomial draw across the core
    /// pool, just like work-packages.
    Multinomial,
    /// Every core is charged the same approximated share,
    /// `witness_count / core_count` witnesses (integer division).
    EvenShare,
}

// ------------------------------------------------------------------------------------------------
// Simulation Configuration
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for the throughput model.
///
/// All sizes and rates must be strictly positive; `finality_delay_slots` may
/// be zero. The defaults are the JAM reference parameters (341 cores, 6 s
/// slots, 128 extrinsics per work-package, 2 MiB/s per core).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of parallel processing cores in the pool
    pub core_count: usize,
    /// Slot length in seconds
    pub slot_seconds: f64,
    /// Size of a full work-package in bytes
    pub work_package_bytes: u64,
    /// Size of a single witness in bytes
    pub witness_bytes: u64,
    /// Outbound bandwidth of one core in bytes per second
    pub per_core_bandwidth: u64,
    /// Slots that must elapse before a slot's throughput counts as finalized
    pub finality_delay_slots: u64,
    /// Number of extrinsics (transactions) carried by one work-package
    pub extrinsics_per_package: u64,
    /// USD charged per generated work-package
    pub cost_per_workload: f64,
    /// USD charged per ticket (one ticket per extrinsic)
    pub cost_per_ticket: f64,
    /// When set, work-packages are split into chunks of this many bytes
    /// before being scattered across cores; the sub-chunk remainder of a
    /// package is not modelled
    #[serde(default)]
    pub chunk_size_bytes: Option<u64>,
    /// How witness bytes are attributed to cores
    #[serde(default = "default_witness_strategy")]
    pub witness_strategy: WitnessStrategy,
}

fn default_witness_strategy() -> WitnessStrategy {
    WitnessStrategy::Multinomial
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            core_count: 341,
            slot_seconds: 6.0,
            work_package_bytes: 13_794_305,
            witness_bytes: 640,
            per_core_bandwidth: 2 * 1024 * 1024,
            finality_delay_slots: 2,
            extrinsics_per_package: 128,
            cost_per_workload: 0.001,
            cost_per_ticket: 0.0005,
            chunk_size_bytes: None,
            witness_strategy: WitnessStrategy::Multinomial,
        }
    }
}

impl SimulationConfig {
    /// Checks every invariant the rest of the model relies on. Called by the
    /// driver before the first slot executes.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.core_count == 0 {
            return Err(SimulationError::InvalidConfig("core count must be positive".into()));
        }
        if self.slot_seconds <= 0.0 {
            return Err(SimulationError::InvalidConfig("slot length must be positive".into()));
        }
        if self.work_package_bytes == 0 {
            return Err(SimulationError::InvalidConfig("work-package size must be positive".into()));
        }
        if self.witness_bytes == 0 {
            return Err(SimulationError::InvalidConfig("witness size must be positive".into()));
        }
        if self.per_core_bandwidth == 0 {
            return Err(SimulationError::InvalidConfig("per-core bandwidth must be positive".into()));
        }
        if self.extrinsics_per_package == 0 {
            return Err(SimulationError::InvalidConfig("extrinsics per package must be positive".into()));
        }
        if self.cost_per_workload < 0.0 || self.cost_per_ticket < 0.0 {
            return Err(SimulationError::InvalidConfig("cost coefficients must be non-negative".into()));
        }
        if let Some(chunk) = self.chunk_size_bytes {
            if chunk == 0 {
                return Err(SimulationError::InvalidConfig("chunk size must be positive".into()));
            }
            if chunk > self.work_package_bytes {
                return Err(SimulationError::InvalidConfig(
                    "chunk size must not exceed the work-package size".into(),
                ));
            }
        }
        Ok(())
    }

    /// Byte capacity of a single core over one slot.
    pub fn capacity_bytes_per_core(&self) -> f64 {
        self.per_core_bandwidth as f64 * self.slot_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SimulationConfig::default().validate().expect("reference parameters should validate");
    }

    #[test]
    fn rejects_non_positive_sizes_and_rates() {
        let cases: Vec<(&str, Box<dyn Fn(&mut SimulationConfig)>)> = vec![
            ("core_count", Box::new(|c| c.core_count = 0)),
            ("slot_seconds", Box::new(|c| c.slot_seconds = 0.0)),
            ("work_package_bytes", Box::new(|c| c.work_package_bytes = 0)),
            ("witness_bytes", Box::new(|c| c.witness_bytes = 0)),
            ("per_core_bandwidth", Box::new(|c| c.per_core_bandwidth = 0)),
            ("extrinsics_per_package", Box::new(|c| c.extrinsics_per_package = 0)),
            ("cost_per_workload", Box::new(|c| c.cost_per_workload = -0.1)),
            ("chunk_size_bytes", Box::new(|c| c.chunk_size_bytes = Some(0))),
        ];
        for (field, mutate) in cases {
            let mut config = SimulationConfig::default();
            mutate(&mut config);
            assert!(
                matches!(config.validate(), Err(SimulationError::InvalidConfig(_))),
                "expected InvalidConfig when {} is out of range",
                field
            );
        }
    }

    #[test]
    fn zero_finality_delay_is_allowed() {
        let mut config = SimulationConfig::default();
        config.finality_delay_slots = 0;
        config.validate().expect("zero finality delay is valid");
    }

    #[test]
    fn chunk_larger_than_package_is_rejected() {
        let mut config = SimulationConfig::default();
        config.chunk_size_bytes = Some(config.work_package_bytes + 1);
        assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn capacity_is_bandwidth_times_slot_length() {
        let mut config = SimulationConfig::default();
        config.per_core_bandwidth = 1000;
        config.slot_seconds = 6.0;
        assert_eq!(config.capacity_bytes_per_core(), 6000.0);
    }
}
