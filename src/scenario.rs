//! Named workload scenarios.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SimulationError;

/// The workload mix a scenario run draws its per-slot demand from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    /// Light slots: few work-packages, few witnesses
    Stateless,
    /// Heavy slots: many state-changing work-packages with large witness sets
    StateHeavy,
    /// 80% of slots draw from the stateless ranges, the rest from state-heavy
    Mixed,
}

impl ScenarioKind {
    /// All scenarios, in the order the original study ran them
    pub const ALL: [ScenarioKind; 3] =
        [ScenarioKind::Stateless, ScenarioKind::StateHeavy, ScenarioKind::Mixed];

    /// Tag used in config files and export file names
    pub fn tag(&self) -> &'static str {
        match self {
            ScenarioKind::Stateless => "stateless",
            ScenarioKind::StateHeavy => "state-heavy",
            ScenarioKind::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ScenarioKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stateless" => Ok(ScenarioKind::Stateless),
            "state-heavy" => Ok(ScenarioKind::StateHeavy),
            "mixed" => Ok(ScenarioKind::Mixed),
            other => Err(SimulationError::UnknownScenario(other.to_string())),
        }
    }
}
