pub mod config;
pub mod run_scenarios;
pub mod save_results;

pub use config::{Config, ConfigError};
pub use run_scenarios::run_scenarios;
