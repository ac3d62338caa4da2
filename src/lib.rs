pub mod config;
pub mod scenario;
pub mod rng;
pub mod workload;
pub mod distribution;
pub mod contention;
pub mod throughput;
pub mod cost;
pub mod driver;
pub mod utils;

pub use config::{SimulationConfig, SimulationError, WitnessStrategy};
pub use scenario::ScenarioKind;
pub use rng::SimRng;
pub use driver::{run, ScenarioRun, ScenarioSummary, SlotResult};
