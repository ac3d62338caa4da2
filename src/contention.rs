//! Per-core capacity check and transmitted-byte accounting.

/// Outcome of the bandwidth check for one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransmission {
    /// True if at least one core demanded more bytes than its slot capacity
    pub contended: bool,
    /// Bytes actually transmittable this slot, per-core demand capped at
    /// per-core capacity. Excess demand is dropped, not queued.
    pub transmitted_bytes: f64,
}

/// Compares each core's demanded bytes against its slot capacity.
///
/// `unit_allocation[i]` is the number of work-units (packages or chunks)
/// landing on core i, each `unit_bytes` large; `witness_bytes_per_core[i]`
/// is that core's witness byte share. A single overloaded core marks the
/// whole slot as contended.
pub fn evaluate_slot(
    capacity_bytes: f64,
    unit_bytes: u64,
    unit_allocation: &[u64],
    witness_bytes_per_core: &[u64],
) -> SlotTransmission {
    debug_assert_eq!(unit_allocation.len(), witness_bytes_per_core.len());

    let mut contended = false;
    let mut transmitted_bytes = 0.0;
    for (units, witness_bytes) in unit_allocation.iter().zip(witness_bytes_per_core) {
        let demand_bytes = (units * unit_bytes + witness_bytes) as f64;
        if demand_bytes > capacity_bytes {
            contended = true;
        }
        transmitted_bytes += demand_bytes.min(capacity_bytes);
    }
    SlotTransmission { contended, transmitted_bytes }
}
