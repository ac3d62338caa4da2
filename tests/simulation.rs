//! End-to-end properties of the slot loop, run through the public API only.

use rand::RngCore;

use jam_throughput::{
    contention, distribution, run, throughput, ScenarioKind, SimRng, SimulationConfig,
    SimulationError, WitnessStrategy,
};

/// The 2-core reference setup: 1000 B/s per core, 1 s slots, 1000 B
/// work-packages of 10 extrinsics, finality delayed by one slot.
fn two_core_config() -> SimulationConfig {
    SimulationConfig {
        core_count: 2,
        slot_seconds: 1.0,
        work_package_bytes: 1000,
        witness_bytes: 10,
        per_core_bandwidth: 1000,
        finality_delay_slots: 1,
        extrinsics_per_package: 10,
        ..SimulationConfig::default()
    }
}

#[test]
fn two_packages_over_two_cores_transmit_at_most_capacity() {
    // Deterministic core of the end-to-end scenario: 2 work-packages of
    // 1000 B split over 2 cores with 1000 B capacity each. An even split
    // sits exactly at capacity; any other split drops the excess.
    let even = contention::evaluate_slot(1000.0, 1000, &[1, 1], &[0, 0]);
    assert!(!even.contended);
    assert_eq!(even.transmitted_bytes, 2000.0);

    let skewed = contention::evaluate_slot(1000.0, 1000, &[2, 0], &[0, 0]);
    assert!(skewed.contended);
    assert_eq!(skewed.transmitted_bytes, 1000.0);

    // effective_tps(0) = (transmitted / 1000) * 10 / 1
    let config = two_core_config();
    assert_eq!(throughput::effective_tps(even.transmitted_bytes, &config), 20.0);
    assert_eq!(throughput::effective_tps(skewed.transmitted_bytes, &config), 10.0);
}

#[test]
fn full_run_respects_capacity_demand_and_finality() {
    let config = two_core_config();
    let mut rng = SimRng::seeded(1234);
    let run = run(&config, ScenarioKind::Stateless, 100, &mut rng).expect("run should succeed");

    let pool_capacity = config.capacity_bytes_per_core() * config.core_count as f64;
    for slot in &run.slots {
        let demanded_bytes = (slot.workload_count * config.work_package_bytes
            + slot.witness_count * config.witness_bytes) as f64;
        assert!(
            slot.processed_bytes <= pool_capacity + 1e-9,
            "slot {} transmitted beyond the pool capacity",
            slot.slot_index
        );
        assert!(
            slot.processed_bytes <= demanded_bytes + 1e-9,
            "slot {} transmitted more than was demanded",
            slot.slot_index
        );
    }

    // finalized_tps(0) is the sentinel, finalized_tps(i) == effective_tps(i-1).
    assert_eq!(run.slots[0].finalized_tps, None);
    for slot in &run.slots[1..] {
        let previous = &run.slots[(slot.slot_index - 1) as usize];
        assert_eq!(slot.finalized_tps, Some(previous.effective_tps));
    }

    assert!(run.summary.avg_effective_tps <= run.summary.theoretical_tps);
    assert_eq!(run.summary.theoretical_tps, 20.0);
}

#[test]
fn core_allocation_conserves_units_at_every_scale() {
    let mut rng = SimRng::seeded(99);
    for _ in 0..200 {
        let total = u64::from(rng.next_u32() % 4000);
        let allocation = distribution::distribute(&mut rng, total, 341);
        assert_eq!(allocation.iter().sum::<u64>(), total);
    }
}

#[test]
fn theoretical_tps_ignores_the_random_stream() {
    let config = two_core_config();
    let a = run(&config, ScenarioKind::Mixed, 10, &mut SimRng::seeded(1)).unwrap();
    let b = run(&config, ScenarioKind::Mixed, 10, &mut SimRng::seeded(2)).unwrap();
    assert_eq!(a.summary.theoretical_tps, b.summary.theoretical_tps);
}

#[test]
fn single_core_contention_follows_its_demand_deterministically() {
    let mut config = two_core_config();
    config.core_count = 1;
    let mut rng = SimRng::seeded(77);
    let run = run(&config, ScenarioKind::StateHeavy, 50, &mut rng).unwrap();
    for slot in &run.slots {
        let demand_bytes = slot.workload_count * config.work_package_bytes
            + slot.witness_count * config.witness_bytes;
        let expected = demand_bytes as f64 > config.capacity_bytes_per_core();
        assert_eq!(
            slot.contended, expected,
            "slot {}: single-core contention must follow the core's demand",
            slot.slot_index
        );
    }
}

#[test]
fn unknown_scenario_tag_produces_no_results() {
    let parsed = "bogus".parse::<ScenarioKind>();
    match parsed {
        Err(SimulationError::UnknownScenario(tag)) => assert_eq!(tag, "bogus"),
        other => panic!("expected UnknownScenario, got {:?}", other),
    }
}

#[test]
fn witness_strategies_are_both_available_and_reproducible() {
    for strategy in [WitnessStrategy::Multinomial, WitnessStrategy::EvenShare] {
        let mut config = two_core_config();
        config.witness_strategy = strategy;
        let a = run(&config, ScenarioKind::Mixed, 25, &mut SimRng::seeded(5)).unwrap();
        let b = run(&config, ScenarioKind::Mixed, 25, &mut SimRng::seeded(5)).unwrap();
        for (sa, sb) in a.slots.iter().zip(&b.slots) {
            assert_eq!(sa.processed_bytes, sb.processed_bytes);
        }
    }
}
