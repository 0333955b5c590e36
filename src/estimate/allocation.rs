//! Category allocator - splits the bus count across IT/Mechanical/House
//!
//! Active only in competitive pricing mode. The split is proportional to the
//! facility's *input* loads (not the PUE-derived ones the estimator uses),
//! adjusted by a mechanical redundancy multiplier and a house-load floor,
//! then rescaled so the three categories sum exactly to the bus count.

use serde::{Deserialize, Serialize};

use crate::estimate::facility::FacilityProfile;

/// Buses per MW of house load, before the 35% uplift
const HOUSE_BUSES_PER_MW: f64 = 50.0;

/// Uplift applied to the house-load rule
const HOUSE_UPLIFT: f64 = 1.35;

/// Mechanical cooling redundancy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MechRedundancy {
    /// No redundancy
    N,
    /// One spare unit
    NPlus1,
    /// Fully duplicated units
    NPlusN,
    /// Fully duplicated path
    TwoN,
}

impl MechRedundancy {
    /// Parse a redundancy label ("N", "N+1", "N+N", "2N").
    ///
    /// Unrecognized labels default to N+1, the standard assumption for
    /// mechanical plant. Intentional fallback, not an omission.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "N" => MechRedundancy::N,
            "N+1" => MechRedundancy::NPlus1,
            "N+N" => MechRedundancy::NPlusN,
            "2N" => MechRedundancy::TwoN,
            _ => MechRedundancy::NPlus1,
        }
    }

    /// Multiplier applied to the mechanical bus share
    pub fn factor(&self) -> f64 {
        match self {
            MechRedundancy::N => 1.0,
            MechRedundancy::NPlus1 => 1.25,
            MechRedundancy::NPlusN => 2.0,
            MechRedundancy::TwoN => 2.0,
        }
    }
}

impl Default for MechRedundancy {
    fn default() -> Self {
        MechRedundancy::NPlus1
    }
}

impl std::fmt::Display for MechRedundancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MechRedundancy::N => write!(f, "N"),
            MechRedundancy::NPlus1 => write!(f, "N+1"),
            MechRedundancy::NPlusN => write!(f, "N+N"),
            MechRedundancy::TwoN => write!(f, "2N"),
        }
    }
}

impl From<String> for MechRedundancy {
    fn from(s: String) -> Self {
        MechRedundancy::from_label(&s)
    }
}

impl From<MechRedundancy> for String {
    fn from(r: MechRedundancy) -> Self {
        r.to_string()
    }
}

/// Category-wise bus split. Invariant: the three counts sum exactly to the
/// bus count they were allocated from, with at least one IT bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySplit {
    /// Buses attributed to IT load
    pub it_buses: u32,

    /// Buses attributed to mechanical load
    pub mech_buses: u32,

    /// Buses attributed to house/auxiliary load
    pub house_buses: u32,
}

impl CategorySplit {
    /// Bypass split used when competitive pricing is disabled: everything IT
    pub fn unified(bus_count: u32) -> Self {
        Self {
            it_buses: bus_count,
            mech_buses: 0,
            house_buses: 0,
        }
    }

    /// Total buses across all categories
    pub fn total(&self) -> u32 {
        self.it_buses + self.mech_buses + self.house_buses
    }
}

/// Flat house-load rule: a floor ensuring house buses are never underpriced
/// for small house loads.
pub(crate) fn house_floor(house_mw: f64) -> f64 {
    HOUSE_BUSES_PER_MW * house_mw * HOUSE_UPLIFT
}

/// Split a bus count across categories by the facility's input loads.
///
/// Each share is rounded independently, then all three are rescaled and
/// re-rounded to restore the global total. The residual rounding delta goes
/// to the house category; if that would push house below zero, the deficit
/// is borrowed from mechanical, then IT, preserving the sum.
pub fn allocate_categories(
    bus_count: u32,
    profile: &FacilityProfile,
    redundancy: MechRedundancy,
) -> CategorySplit {
    let total_mw = profile.total_load_mw();
    if total_mw <= 0.0 {
        return CategorySplit::unified(bus_count);
    }

    let buses = bus_count as f64;
    let base_it = buses * (profile.it_capacity_mw / total_mw);
    let base_mech = buses * (profile.mechanical_load_mw / total_mw) * redundancy.factor();
    let base_house = buses * (profile.house_load_mw / total_mw);

    let house_share = if profile.house_load_mw > 0.0 {
        base_house.max(house_floor(profile.house_load_mw))
    } else {
        0.0
    };

    let mut it = (base_it.round() as i64).max(1);
    let mut mech = (base_mech.round() as i64).max(0);
    let mut house = (house_share.round() as i64).max(0);

    // Rescale to match the estimator's total, then push the rounding delta
    // into the house bucket.
    let rounded_sum = it + mech + house;
    if rounded_sum > 0 {
        let scale = buses / rounded_sum as f64;
        it = ((it as f64 * scale).round() as i64).max(1);
        mech = ((mech as f64 * scale).round() as i64).max(0);
        house = ((house as f64 * scale).round() as i64).max(0);

        let delta = bus_count as i64 - (it + mech + house);
        house += delta;

        // Clamp a negative house count, borrowing from mechanical then IT.
        if house < 0 {
            mech += house;
            house = 0;
        }
        if mech < 0 {
            it += mech;
            mech = 0;
        }
    }

    CategorySplit {
        it_buses: it as u32,
        mech_buses: mech as u32,
        house_buses: house as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::facility::Tier;

    fn profile(it: f64, mech: f64, house: f64) -> FacilityProfile {
        FacilityProfile {
            it_capacity_mw: it,
            mechanical_load_mw: mech,
            house_load_mw: house,
            tier: Tier::IV,
            pue: 1.56,
        }
    }

    #[test]
    fn test_redundancy_factors() {
        assert_eq!(MechRedundancy::N.factor(), 1.0);
        assert_eq!(MechRedundancy::NPlus1.factor(), 1.25);
        assert_eq!(MechRedundancy::NPlusN.factor(), 2.0);
        assert_eq!(MechRedundancy::TwoN.factor(), 2.0);
    }

    #[test]
    fn test_redundancy_unknown_label_defaults_to_n_plus_1() {
        assert_eq!(MechRedundancy::from_label("3N"), MechRedundancy::NPlus1);
        assert_eq!(MechRedundancy::from_label(""), MechRedundancy::NPlus1);
        assert_eq!(MechRedundancy::from_label("n+1"), MechRedundancy::NPlus1);
        assert_eq!(MechRedundancy::from_label("2n"), MechRedundancy::TwoN);
    }

    #[test]
    fn test_golden_split() {
        // 95 buses over 10/7/3 MW with N+1 mechanical redundancy.
        let split = allocate_categories(95, &profile(10.0, 7.0, 3.0), MechRedundancy::NPlus1);

        assert_eq!(split.it_buses, 16);
        assert_eq!(split.mech_buses, 14);
        assert_eq!(split.house_buses, 65);
        assert_eq!(split.total(), 95);
    }

    #[test]
    fn test_sum_invariant_across_inputs() {
        let cases = [
            (1, profile(0.1, 0.0, 0.0)),
            (7, profile(1.0, 2.0, 0.5)),
            (95, profile(10.0, 7.0, 3.0)),
            (250, profile(40.0, 20.0, 10.0)),
            (1000, profile(100.0, 1.0, 0.01)),
            (13, profile(0.01, 50.0, 0.0)),
        ];

        for redundancy in [
            MechRedundancy::N,
            MechRedundancy::NPlus1,
            MechRedundancy::NPlusN,
            MechRedundancy::TwoN,
        ] {
            for (buses, profile) in &cases {
                let split = allocate_categories(*buses, profile, redundancy);
                assert_eq!(
                    split.total(),
                    *buses,
                    "sum broken for {buses} buses, {redundancy}"
                );
                assert!(split.it_buses >= 1);
            }
        }
    }

    #[test]
    fn test_zero_load_goes_to_it() {
        let split = allocate_categories(42, &profile(0.0, 0.0, 0.0), MechRedundancy::NPlus1);
        assert_eq!(split, CategorySplit::unified(42));
    }

    #[test]
    fn test_house_floor_rule() {
        assert!((house_floor(3.0) - 202.5).abs() < 1e-9);
        assert!((house_floor(0.1) - 6.75).abs() < 1e-9);
    }

    #[test]
    fn test_house_floor_applied_before_rescale() {
        // 20 buses over 10/7/0.1 MW at N redundancy. The proportional house
        // share is 20 * 0.1/17.1 = 0.12, which rounds to zero; the floor
        // (6.75 -> 7) replaces it before rescaling, so house buses survive:
        // pre-rescale (12, 8, 7), scale 20/27 -> (9, 6, 5).
        let split = allocate_categories(20, &profile(10.0, 7.0, 0.1), MechRedundancy::N);

        assert_eq!(split.it_buses, 9);
        assert_eq!(split.mech_buses, 6);
        assert_eq!(split.house_buses, 5);
        assert_eq!(split.total(), 20);
    }

    #[test]
    fn test_house_floor_dominates_small_house_load() {
        // Proportional house share would be tiny; the 50/MW rule forces the
        // house bucket to absorb most of the total after rescaling.
        let split = allocate_categories(95, &profile(10.0, 7.0, 3.0), MechRedundancy::NPlus1);
        assert!(split.house_buses > split.it_buses);
        assert!(split.house_buses > split.mech_buses);
    }

    #[test]
    fn test_no_house_load_no_house_buses() {
        let split = allocate_categories(50, &profile(10.0, 5.0, 0.0), MechRedundancy::N);
        assert_eq!(split.house_buses, 0);
        assert_eq!(split.total(), 50);
    }

    #[test]
    fn test_mech_redundancy_increases_mech_share() {
        let p = profile(10.0, 10.0, 0.0);
        let n = allocate_categories(100, &p, MechRedundancy::N);
        let two_n = allocate_categories(100, &p, MechRedundancy::TwoN);

        assert!(two_n.mech_buses >= n.mech_buses);
        assert_eq!(n.total(), 100);
        assert_eq!(two_n.total(), 100);
    }

    #[test]
    fn test_skewed_loads_never_go_negative() {
        // Adversarial: huge mechanical multiplier with a tiny house share and
        // a tiny bus count exercises the clamp path.
        for buses in 1..=20 {
            let split =
                allocate_categories(buses, &profile(0.01, 80.0, 0.001), MechRedundancy::TwoN);
            assert_eq!(split.total(), buses);
            assert!(split.it_buses >= 1);
        }
    }

    #[test]
    fn test_unified_bypass() {
        let split = CategorySplit::unified(95);
        assert_eq!(split.it_buses, 95);
        assert_eq!(split.mech_buses, 0);
        assert_eq!(split.house_buses, 0);
    }
}
