//! Configuration loader and validator for the throughput simulator harness.
//! Handles parsing, validation, and access to the simulation configuration file.

use std::fs;

use serde::Deserialize;
use thiserror::Error;

use jam_throughput::{ScenarioKind, SimulationConfig, SimulationError};

// ------------------------------------------------------------------------------------------------
// Main Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for the harness.
///
/// Combines the core model parameters with the run-level settings
/// (scenario list, slot count, seeding, output location).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Core model parameters (core pool, bandwidth, sizes, costs)
    pub model: SimulationConfig,
    /// Run-level parameters for the scenario loop
    pub run: RunConfig,
}

/// Configuration for one invocation of the scenario loop.
#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    /// Number of slots to simulate per scenario
    pub num_slots: u64,
    /// Scenario tags to run, in order ("stateless", "state-heavy", "mixed")
    pub scenarios: Vec<String>,
    /// Seed for the random stream; omitted means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Reseed the stream every this many slots (epoch mode); omitted or 0
    /// disables reseeding
    #[serde(default)]
    pub reseed_interval_slots: Option<u64>,
    /// Directory the per-slot CSVs and the summary JSON are written into
    pub results_dir: String,
}

impl RunConfig {
    /// Parses the configured scenario tags, failing on the first unknown one.
    pub fn parse_scenarios(&self) -> Result<Vec<ScenarioKind>, SimulationError> {
        self.scenarios.iter().map(|tag| tag.parse()).collect()
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("simulator/config.toml")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        if self.run.num_slots == 0 {
            return Err(ConfigError::ValidationError("Number of slots must be positive".into()));
        }
        if self.run.scenarios.is_empty() {
            return Err(ConfigError::ValidationError("At least one scenario must be configured".into()));
        }
        self.run.parse_scenarios()?;
        if self.run.results_dir.is_empty() {
            return Err(ConfigError::ValidationError("Results directory must be set".into()));
        }
        Ok(())
    }
}
