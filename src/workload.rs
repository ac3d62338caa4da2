//! Per-slot workload generation.
//!
//! Each slot draws a number of full work-packages and a number of witnesses
//! from uniform integer ranges picked by the scenario.

use rand::Rng;

use crate::scenario::ScenarioKind;

/// Work generated for one slot, before any distribution across cores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadDemand {
    /// Number of full work-packages demanded this slot
    pub workload_count: u64,
    /// Number of witnesses accompanying them
    pub witness_count: u64,
}

/// Draws the demand for one slot.
///
/// Stateless slots carry 1..=3 work-packages and 100..=500 witnesses,
/// state-heavy slots 3..=6 and 1000..=3000. A mixed slot draws from the
/// stateless ranges with probability 0.8, otherwise from the state-heavy
/// ranges.
pub fn generate_workload<R: Rng>(scenario: ScenarioKind, rng: &mut R) -> WorkloadDemand {
    match scenario {
        ScenarioKind::Stateless => stateless(rng),
        ScenarioKind::StateHeavy => state_heavy(rng),
        ScenarioKind::Mixed => {
            if rng.gen_bool(0.8) {
                stateless(rng)
            } else {
                state_heavy(rng)
            }
        }
    }
}

fn stateless<R: Rng>(rng: &mut R) -> WorkloadDemand {
    WorkloadDemand {
        workload_count: rng.gen_range(1..=3),
        witness_count: rng.gen_range(100..=500),
    }
}

fn state_heavy<R: Rng>(rng: &mut R) -> WorkloadDemand {
    WorkloadDemand {
        workload_count: rng.gen_range(3..=6),
        witness_count: rng.gen_range(1000..=3000),
    }
}

// The generator implements the two-range policy with the 80/20 mixed split
// (variant A of the source models). The alternative single flat range for
// mixed slots was deliberately not adopted.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;

    #[test]
    fn stateless_draws_stay_in_range() {
        let mut rng = SimRng::seeded(1);
        for _ in 0..1000 {
            let demand = generate_workload(ScenarioKind::Stateless, &mut rng);
            assert!((1..=3).contains(&demand.workload_count));
            assert!((100..=500).contains(&demand.witness_count));
        }
    }

    #[test]
    fn state_heavy_draws_stay_in_range() {
        let mut rng = SimRng::seeded(2);
        for _ in 0..1000 {
            let demand = generate_workload(ScenarioKind::StateHeavy, &mut rng);
            assert!((3..=6).contains(&demand.workload_count));
            assert!((1000..=3000).contains(&demand.witness_count));
        }
    }

    #[test]
    fn mixed_draws_come_from_one_of_the_two_ranges() {
        let mut rng = SimRng::seeded(3);
        let mut light_slots = 0usize;
        let draws = 10_000usize;
        for _ in 0..draws {
            let demand = generate_workload(ScenarioKind::Mixed, &mut rng);
            let light = (1..=3).contains(&demand.workload_count)
                && (100..=500).contains(&demand.witness_count);
            let heavy = (3..=6).contains(&demand.workload_count)
                && (1000..=3000).contains(&demand.witness_count);
            assert!(light || heavy, "mixed demand {:?} outside both ranges", demand);
            if (100..=500).contains(&demand.witness_count) {
                light_slots += 1;
            }
        }
        // 80/20 split; allow generous slack for a 10k-sample binomial.
        let light_fraction = light_slots as f64 / draws as f64;
        assert!(
            (0.77..=0.83).contains(&light_fraction),
            "mixed scenario should favour light slots ~80% of the time, got {:.3}",
            light_fraction
        );
    }
}
