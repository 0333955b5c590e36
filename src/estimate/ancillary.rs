//! Ancillary project costs - site visits, meetings, labels, custom lines

use serde::{Deserialize, Serialize};

/// A free-form cost line item (custom engineering services, validation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub description: String,
    pub amount: f64,
}

/// Non-study project costs added to the subtotal before adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AncillaryCosts {
    /// Number of site visits
    pub site_visits: u32,

    /// Cost per site visit
    pub site_visit_cost: f64,

    /// Number of client meetings
    pub client_meetings: u32,

    /// Cost per client meeting
    pub meeting_cost: f64,

    /// Number of arc-flash labels to print and install
    pub arc_flash_labels: u32,

    /// Cost per label
    pub label_cost: f64,

    /// Flat equipment stickering cost
    pub stickering_cost: f64,

    /// Free-form custom cost lines
    pub custom_lines: Vec<CostLine>,
}

impl Default for AncillaryCosts {
    fn default() -> Self {
        Self {
            site_visits: 2,
            site_visit_cost: 12_000.0,
            client_meetings: 3,
            meeting_cost: 8_000.0,
            arc_flash_labels: 0,
            label_cost: 150.0,
            stickering_cost: 0.0,
            custom_lines: Vec::new(),
        }
    }
}

impl AncillaryCosts {
    /// All costs zeroed out
    pub fn zero() -> Self {
        Self {
            site_visits: 0,
            site_visit_cost: 0.0,
            client_meetings: 0,
            meeting_cost: 0.0,
            arc_flash_labels: 0,
            label_cost: 0.0,
            stickering_cost: 0.0,
            custom_lines: Vec::new(),
        }
    }

    /// Total site visit cost
    pub fn site_visit_total(&self) -> f64 {
        self.site_visits as f64 * self.site_visit_cost
    }

    /// Total client meeting cost
    pub fn meeting_total(&self) -> f64 {
        self.client_meetings as f64 * self.meeting_cost
    }

    /// Total arc-flash label cost
    pub fn label_total(&self) -> f64 {
        self.arc_flash_labels as f64 * self.label_cost
    }

    /// Total of the free-form custom lines
    pub fn custom_total(&self) -> f64 {
        self.custom_lines.iter().map(|line| line.amount).sum()
    }

    /// Grand total of all ancillary costs
    pub fn total(&self) -> f64 {
        self.site_visit_total()
            + self.meeting_total()
            + self.label_total()
            + self.stickering_cost
            + self.custom_total()
    }
}
