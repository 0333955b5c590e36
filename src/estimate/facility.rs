//! Facility profile - the parameters describing one data center

use serde::{Deserialize, Serialize};

/// Uptime-Institute-style redundancy tier classification.
///
/// Higher tiers imply more redundant electrical paths and therefore more
/// switchgear buses and more complex studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tier {
    /// N - single path, no redundancy
    I,
    /// N+1 on transformers
    II,
    /// N+1 on transformers, concurrently maintainable
    III,
    /// 2N - fully duplicated path
    IV,
}

impl Tier {
    /// Parse a tier label, accepting "Tier IV", "IV", "4", etc.
    ///
    /// Unrecognized labels fall back to Tier III. This is intentional: the
    /// estimator must always produce a result, and Tier III is the default
    /// redundancy assumption for data-center work.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        let level = normalized.strip_prefix("tier").map(str::trim).unwrap_or(&normalized);

        match level {
            "i" | "1" => Tier::I,
            "ii" | "2" => Tier::II,
            "iii" | "3" => Tier::III,
            "iv" | "4" => Tier::IV,
            _ => Tier::III,
        }
    }

    /// Study complexity multiplier applied to per-study manhours
    pub fn complexity_factor(&self) -> f64 {
        match self {
            Tier::I => 1.0,
            Tier::II => 1.2,
            Tier::III => 1.5,
            Tier::IV => 2.0,
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::III
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::I => write!(f, "Tier I"),
            Tier::II => write!(f, "Tier II"),
            Tier::III => write!(f, "Tier III"),
            Tier::IV => write!(f, "Tier IV"),
        }
    }
}

impl From<String> for Tier {
    fn from(s: String) -> Self {
        Tier::from_label(&s)
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        tier.to_string()
    }
}

/// Immutable facility parameters for a single estimation.
///
/// The mechanical/house load fields feed the category allocator only; the
/// bus count estimator derives its load composition from PUE and IT capacity
/// alone (see [`crate::estimate::bus_count`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityProfile {
    /// IT (white space) capacity in MW
    pub it_capacity_mw: f64,

    /// Mechanical (cooling) load in MW
    pub mechanical_load_mw: f64,

    /// House/auxiliary load in MW
    pub house_load_mw: f64,

    /// Redundancy tier
    pub tier: Tier,

    /// Power Usage Effectiveness (total facility power / IT power)
    pub pue: f64,
}

impl Default for FacilityProfile {
    fn default() -> Self {
        Self {
            it_capacity_mw: 10.0,
            mechanical_load_mw: 7.0,
            house_load_mw: 3.0,
            tier: Tier::IV,
            pue: 1.56,
        }
    }
}

impl FacilityProfile {
    /// Total input load across all three categories, in MW
    pub fn total_load_mw(&self) -> f64 {
        self.it_capacity_mw + self.mechanical_load_mw + self.house_load_mw
    }
}
