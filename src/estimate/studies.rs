//! Study catalog - the six power-system studies and their pricing

use serde::{Deserialize, Serialize};

/// The power-system studies this toolkit prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyKind {
    /// Load flow / power flow study
    LoadFlow,
    /// Short circuit study
    ShortCircuit,
    /// Protective device coordination
    Pdc,
    /// Arc flash hazard study
    ArcFlash,
    /// Harmonics analysis
    Harmonics,
    /// Transient stability analysis
    Transient,
}

impl StudyKind {
    /// All study kinds, in catalog order
    pub const ALL: [StudyKind; 6] = [
        StudyKind::LoadFlow,
        StudyKind::ShortCircuit,
        StudyKind::Pdc,
        StudyKind::ArcFlash,
        StudyKind::Harmonics,
        StudyKind::Transient,
    ];

    /// Stable machine-readable key
    pub fn key(&self) -> &'static str {
        match self {
            StudyKind::LoadFlow => "load_flow",
            StudyKind::ShortCircuit => "short_circuit",
            StudyKind::Pdc => "pdc",
            StudyKind::ArcFlash => "arc_flash",
            StudyKind::Harmonics => "harmonics",
            StudyKind::Transient => "transient",
        }
    }

    /// Human-readable study name
    pub fn name(&self) -> &'static str {
        match self {
            StudyKind::LoadFlow => "Load Flow Study",
            StudyKind::ShortCircuit => "Short Circuit Study",
            StudyKind::Pdc => "Protective Device Coordination",
            StudyKind::ArcFlash => "Arc Flash Study",
            StudyKind::Harmonics => "Harmonics Analysis",
            StudyKind::Transient => "Transient Stability Analysis",
        }
    }
}

impl std::fmt::Display for StudyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which studies are in scope for an estimate. Plain set semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySelection {
    pub load_flow: bool,
    pub short_circuit: bool,
    pub pdc: bool,
    pub arc_flash: bool,
    pub harmonics: bool,
    pub transient: bool,
}

impl Default for StudySelection {
    fn default() -> Self {
        Self {
            load_flow: true,
            short_circuit: true,
            pdc: true,
            arc_flash: true,
            harmonics: false,
            transient: false,
        }
    }
}

impl StudySelection {
    /// Every study selected
    pub fn all() -> Self {
        Self {
            load_flow: true,
            short_circuit: true,
            pdc: true,
            arc_flash: true,
            harmonics: true,
            transient: true,
        }
    }

    /// No study selected
    pub fn none() -> Self {
        Self {
            load_flow: false,
            short_circuit: false,
            pdc: false,
            arc_flash: false,
            harmonics: false,
            transient: false,
        }
    }

    /// Whether the given study is selected
    pub fn is_selected(&self, kind: StudyKind) -> bool {
        match kind {
            StudyKind::LoadFlow => self.load_flow,
            StudyKind::ShortCircuit => self.short_circuit,
            StudyKind::Pdc => self.pdc,
            StudyKind::ArcFlash => self.arc_flash,
            StudyKind::Harmonics => self.harmonics,
            StudyKind::Transient => self.transient,
        }
    }

    /// Number of selected studies
    pub fn count(&self) -> usize {
        StudyKind::ALL.iter().filter(|k| self.is_selected(**k)).count()
    }

    /// Iterate over the selected kinds in catalog order
    pub fn selected(&self) -> impl Iterator<Item = StudyKind> + '_ {
        StudyKind::ALL.into_iter().filter(|k| self.is_selected(*k))
    }
}

/// Per-category base hours per bus, used in competitive pricing mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryHours {
    pub it: f64,
    pub mech: f64,
    pub house: f64,
}

/// Pricing record for one study kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyPricing {
    /// Base manhours per bus (unified mode)
    pub base_hours_per_bus: f64,

    /// Base manhours per bus per category (competitive mode)
    pub category_hours: CategoryHours,

    /// Study-specific complexity factor
    pub factor: f64,

    /// Flat report cost, before the report-complexity multiplier
    pub report_cost: f64,
}

/// The full pricing catalog, one record per study kind.
///
/// All values are independently configurable; defaults come from the
/// department's standard rate card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyCatalog {
    pub load_flow: StudyPricing,
    pub short_circuit: StudyPricing,
    pub pdc: StudyPricing,
    pub arc_flash: StudyPricing,
    pub harmonics: StudyPricing,
    pub transient: StudyPricing,
}

impl Default for StudyCatalog {
    fn default() -> Self {
        Self {
            load_flow: StudyPricing {
                base_hours_per_bus: 3.0,
                category_hours: CategoryHours { it: 0.4, mech: 0.7, house: 0.9 },
                factor: 1.0,
                report_cost: 8_000.0,
            },
            short_circuit: StudyPricing {
                base_hours_per_bus: 3.5,
                category_hours: CategoryHours { it: 0.5, mech: 0.8, house: 1.0 },
                factor: 1.0,
                report_cost: 10_000.0,
            },
            pdc: StudyPricing {
                base_hours_per_bus: 5.0,
                category_hours: CategoryHours { it: 0.7, mech: 1.1, house: 1.4 },
                factor: 1.0,
                report_cost: 15_000.0,
            },
            arc_flash: StudyPricing {
                base_hours_per_bus: 4.5,
                category_hours: CategoryHours { it: 0.6, mech: 1.0, house: 1.2 },
                factor: 1.0,
                report_cost: 12_000.0,
            },
            harmonics: StudyPricing {
                base_hours_per_bus: 6.0,
                category_hours: CategoryHours { it: 0.8, mech: 1.2, house: 1.5 },
                factor: 1.2,
                report_cost: 11_000.0,
            },
            transient: StudyPricing {
                base_hours_per_bus: 7.0,
                category_hours: CategoryHours { it: 0.9, mech: 1.3, house: 1.6 },
                factor: 1.3,
                report_cost: 13_000.0,
            },
        }
    }
}

impl StudyCatalog {
    /// Pricing record for the given study kind
    pub fn pricing(&self, kind: StudyKind) -> &StudyPricing {
        match kind {
            StudyKind::LoadFlow => &self.load_flow,
            StudyKind::ShortCircuit => &self.short_circuit,
            StudyKind::Pdc => &self.pdc,
            StudyKind::ArcFlash => &self.arc_flash,
            StudyKind::Harmonics => &self.harmonics,
            StudyKind::Transient => &self.transient,
        }
    }
}
