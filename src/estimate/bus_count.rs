//! Bus count estimator - equipment-based electrical bus counting
//!
//! Converts facility power capacities into a switchgear bus count in three
//! phases: load derivation from PUE, component-by-component equipment
//! counting, and tier-based redundancy scaling.
//!
//! Load composition here is derived purely from PUE and IT capacity; the
//! facility's own mechanical/house load inputs are not consulted. Those
//! fields are proportional-split inputs for the category allocator only.

use crate::estimate::equipment::EquipmentBlocks;
use crate::estimate::facility::{FacilityProfile, Tier};

/// Fraction of non-IT load attributed to mechanical (cooling) systems
pub const MECH_FRACTION: f64 = 0.70;

/// Facility loads derived from PUE and IT capacity (phase 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedLoads {
    /// Total facility load (pue x it)
    pub total_mw: f64,

    /// IT load, equal to the facility's IT capacity
    pub it_mw: f64,

    /// Mechanical share of the non-IT load
    pub mech_mw: f64,

    /// Remaining house/auxiliary load
    pub house_mw: f64,
}

/// Derive the load composition from PUE and IT capacity
pub fn derive_loads(profile: &FacilityProfile) -> DerivedLoads {
    let total_mw = profile.pue * profile.it_capacity_mw;
    let it_mw = profile.it_capacity_mw;
    let non_it_mw = total_mw - it_mw;

    let mech_mw = MECH_FRACTION * non_it_mw;
    let house_mw = non_it_mw - mech_mw;

    DerivedLoads {
        total_mw,
        it_mw,
        mech_mw,
        house_mw,
    }
}

/// Per-equipment bus counts at N redundancy (phase 2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentCounts {
    /// MV buses: base count plus one per additional utility incomer
    pub mv_buses: u32,

    /// Transformers sized for total load at the system power factor
    pub transformers: u32,

    /// LV bus sections, ceiling-divided per load category
    pub lv_buses: u32,

    /// UPS output buses, one per lineup
    pub ups_buses: u32,

    /// Power distribution units
    pub pdus: u32,

    /// Extra buses for voltage levels beyond two
    pub voltage_additions: u32,

    /// Extra buses for backup generators (two each)
    pub generator_additions: u32,
}

fn ceil_div(load: f64, block: f64) -> u32 {
    (load / block).ceil() as u32
}

impl ComponentCounts {
    /// Count equipment for the given facility and block sizes
    pub fn count(profile: &FacilityProfile, blocks: &EquipmentBlocks) -> Self {
        let loads = derive_loads(profile);

        // Three independent ceilings, not one ceiling of the sum: rounding
        // compounds per category, matching how sections are actually built out.
        let lv_it = ceil_div(loads.it_mw, blocks.lv_bus_mw);
        let lv_mech = ceil_div(loads.mech_mw, blocks.lv_bus_mw);
        let lv_house = ceil_div(loads.house_mw, blocks.lv_bus_mw);
        let lv_buses = lv_it + lv_mech + lv_house;

        let ups_buses = ceil_div(loads.it_mw, blocks.ups_lineup_mw);
        let pdus = ceil_div(loads.it_mw, blocks.pdu_mva);

        let transformers = ceil_div(loads.total_mw, blocks.transformer_mva * blocks.power_factor);

        let mv_buses = blocks.mv_base + blocks.utility_incomers.saturating_sub(1);

        let voltage_additions = if blocks.voltage_levels > 2 {
            (blocks.voltage_levels - 2) * (transformers + 1)
        } else {
            0
        };

        let generator_additions = blocks.backup_gens * 2;

        Self {
            mv_buses,
            transformers,
            lv_buses,
            ups_buses,
            pdus,
            voltage_additions,
            generator_additions,
        }
    }

    /// Sum of all component counts at N redundancy
    pub fn core_total(&self) -> u32 {
        self.mv_buses
            + self.transformers
            + self.lv_buses
            + self.ups_buses
            + self.pdus
            + self.voltage_additions
            + self.generator_additions
    }

    /// N+1 on transformers only. Voltage additions keep their original
    /// transformer basis.
    fn with_spare_transformer(self) -> Self {
        Self {
            transformers: self.transformers + 1,
            ..self
        }
    }

    /// Full 2N duplication, except PDUs which get x1.5 truncated to integer
    /// (partial PDU redundancy is deliberate at Tier IV).
    fn duplicated_total(&self) -> u32 {
        let pdus_2n = (self.pdus as f64 * 1.5) as u32;
        self.mv_buses * 2
            + self.transformers * 2
            + self.lv_buses * 2
            + self.ups_buses * 2
            + pdus_2n
            + (self.voltage_additions + self.generator_additions) * 2
    }
}

/// Tier redundancy scaling (phase 3), before calibration and ceiling
fn tier_scaled(counts: ComponentCounts, tier: Tier, expansion_factor: f64) -> f64 {
    match tier {
        Tier::I => counts.core_total() as f64 * expansion_factor,
        Tier::II => counts.with_spare_transformer().core_total() as f64 * expansion_factor * 1.10,
        Tier::III => counts.with_spare_transformer().core_total() as f64 * expansion_factor * 1.15,
        Tier::IV => counts.duplicated_total() as f64 * expansion_factor,
    }
}

/// Estimate the switchgear bus count for a facility.
///
/// Always returns at least 1: a zero-load facility still has the MV base
/// buses, and the final floor guarantees a non-degenerate result.
pub fn estimate_bus_count(profile: &FacilityProfile, blocks: &EquipmentBlocks) -> u32 {
    let counts = ComponentCounts::count(profile, blocks);
    let scaled = tier_scaled(counts, profile.tier, blocks.expansion_factor);
    let calibrated = scaled * blocks.bus_calibration;

    (calibrated.ceil() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(it_mw: f64, tier: Tier) -> FacilityProfile {
        FacilityProfile {
            it_capacity_mw: it_mw,
            tier,
            ..FacilityProfile::default()
        }
    }

    #[test]
    fn test_load_derivation() {
        let loads = derive_loads(&profile(10.0, Tier::IV));

        assert!((loads.total_mw - 15.6).abs() < 1e-9);
        assert!((loads.it_mw - 10.0).abs() < 1e-9);
        assert!((loads.mech_mw - 3.92).abs() < 1e-9);
        assert!((loads.house_mw - 1.68).abs() < 1e-9);
    }

    #[test]
    fn test_component_counts_default_blocks() {
        let counts = ComponentCounts::count(&profile(10.0, Tier::IV), &EquipmentBlocks::default());

        // lv: ceil(10/3) + ceil(3.92/3) + ceil(1.68/3) = 4 + 2 + 1
        assert_eq!(counts.lv_buses, 7);
        // ups: ceil(10/1.5)
        assert_eq!(counts.ups_buses, 7);
        // pdu: ceil(10/0.3)
        assert_eq!(counts.pdus, 34);
        // tx: ceil(15.6 / (3.0 * 0.95))
        assert_eq!(counts.transformers, 6);
        assert_eq!(counts.mv_buses, 2);
        assert_eq!(counts.voltage_additions, 0);
        assert_eq!(counts.generator_additions, 0);
        assert_eq!(counts.core_total(), 56);
    }

    #[test]
    fn test_golden_scenario_tier_iv() {
        // it=10 MW, pue=1.56, default blocks, calibration 1.0.
        // 2N: mv 4 + tx 12 + lv 14 + ups 14 + pdu trunc(34*1.5)=51 = 95
        let buses = estimate_bus_count(&profile(10.0, Tier::IV), &EquipmentBlocks::default());
        assert_eq!(buses, 95);
    }

    #[test]
    fn test_golden_scenario_lower_tiers() {
        let blocks = EquipmentBlocks::default();

        // Tier I: core 56
        assert_eq!(estimate_bus_count(&profile(10.0, Tier::I), &blocks), 56);
        // Tier II: (56+1) * 1.10 = 62.7 -> 63
        assert_eq!(estimate_bus_count(&profile(10.0, Tier::II), &blocks), 63);
        // Tier III: (56+1) * 1.15 = 65.55 -> 66
        assert_eq!(estimate_bus_count(&profile(10.0, Tier::III), &blocks), 66);
    }

    #[test]
    fn test_floor_of_one_at_zero_capacity() {
        let blocks = EquipmentBlocks::default();
        for tier in [Tier::I, Tier::II, Tier::III, Tier::IV] {
            let buses = estimate_bus_count(&profile(0.0, tier), &blocks);
            assert!(buses >= 1, "{tier} produced {buses}");
        }
    }

    #[test]
    fn test_mv_base_survives_zero_load() {
        // No IT load: every ceiling is 0, but the MV base still contributes.
        let counts = ComponentCounts::count(&profile(0.0, Tier::I), &EquipmentBlocks::default());
        assert_eq!(counts.core_total(), 2);
        assert_eq!(
            estimate_bus_count(&profile(0.0, Tier::I), &EquipmentBlocks::default()),
            2
        );
    }

    #[test]
    fn test_monotonic_in_it_capacity() {
        let blocks = EquipmentBlocks::default();
        for tier in [Tier::I, Tier::II, Tier::III, Tier::IV] {
            let mut prev = 0;
            for step in 1..=80 {
                let buses = estimate_bus_count(&profile(step as f64 * 0.5, tier), &blocks);
                assert!(
                    buses >= prev,
                    "bus count decreased at {} MW for {tier}",
                    step as f64 * 0.5
                );
                prev = buses;
            }
        }
    }

    #[test]
    fn test_tier_ordering() {
        let blocks = EquipmentBlocks::default();
        for it_mw in [0.5, 2.0, 10.0, 25.0, 60.0] {
            let i = estimate_bus_count(&profile(it_mw, Tier::I), &blocks);
            let ii = estimate_bus_count(&profile(it_mw, Tier::II), &blocks);
            let iii = estimate_bus_count(&profile(it_mw, Tier::III), &blocks);
            let iv = estimate_bus_count(&profile(it_mw, Tier::IV), &blocks);

            assert!(i <= ii && ii <= iii && iii <= iv, "{it_mw} MW: {i} {ii} {iii} {iv}");
        }
    }

    #[test]
    fn test_calibration_linearity_within_rounding() {
        let base = estimate_bus_count(&profile(10.0, Tier::IV), &EquipmentBlocks::default());

        for calibration in [0.5, 0.8, 1.3, 2.0, 2.5] {
            let blocks = EquipmentBlocks {
                bus_calibration: calibration,
                ..EquipmentBlocks::default()
            };
            let calibrated = estimate_bus_count(&profile(10.0, Tier::IV), &blocks);
            let expected = base as f64 * calibration;
            assert!(
                (calibrated as f64 - expected).abs() <= 1.0,
                "calibration {calibration}: got {calibrated}, expected ~{expected}"
            );
        }
    }

    #[test]
    fn test_voltage_level_additions() {
        let blocks = EquipmentBlocks {
            voltage_levels: 3,
            ..EquipmentBlocks::default()
        };
        let counts = ComponentCounts::count(&profile(10.0, Tier::I), &blocks);

        // (3 - 2) * (6 transformers + 1) = 7
        assert_eq!(counts.voltage_additions, 7);
    }

    #[test]
    fn test_generator_additions() {
        let blocks = EquipmentBlocks {
            backup_gens: 3,
            ..EquipmentBlocks::default()
        };
        let counts = ComponentCounts::count(&profile(10.0, Tier::I), &blocks);
        assert_eq!(counts.generator_additions, 6);
    }

    #[test]
    fn test_custom_block_sizing_changes_count() {
        let small_pdus = EquipmentBlocks {
            pdu_mva: 0.6,
            ..EquipmentBlocks::default()
        };
        let default_count = estimate_bus_count(&profile(10.0, Tier::IV), &EquipmentBlocks::default());
        let custom_count = estimate_bus_count(&profile(10.0, Tier::IV), &small_pdus);

        // Larger PDU blocks mean fewer PDUs and fewer buses.
        assert!(custom_count < default_count);
    }

    #[test]
    fn test_spare_transformer_keeps_voltage_basis() {
        let blocks = EquipmentBlocks {
            voltage_levels: 3,
            ..EquipmentBlocks::default()
        };
        let counts = ComponentCounts::count(&profile(10.0, Tier::II), &blocks);
        let spare = counts.with_spare_transformer();

        assert_eq!(spare.transformers, counts.transformers + 1);
        // Voltage additions were computed once, from the pre-spare count.
        assert_eq!(spare.voltage_additions, counts.voltage_additions);
    }
}
