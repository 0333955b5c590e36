//! Equipment block sizing for the bus count estimator
//!
//! Defaults represent industry-standard block sizes. A caller enables
//! "custom block sizing" simply by overriding any subset of fields.

use serde::{Deserialize, Serialize};

/// Equipment block capacities and model tuning factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentBlocks {
    /// UPS lineup size in MW
    pub ups_lineup_mw: f64,

    /// Transformer rating in MVA
    pub transformer_mva: f64,

    /// LV bus section capacity in MW
    pub lv_bus_mw: f64,

    /// PDU capacity in MVA
    pub pdu_mva: f64,

    /// System power factor
    pub power_factor: f64,

    /// Baseline MV bus count
    pub mv_base: u32,

    /// Number of utility incomers
    pub utility_incomers: u32,

    /// Number of voltage transformation levels
    pub voltage_levels: u32,

    /// Number of backup generators
    pub backup_gens: u32,

    /// Future-expansion multiplier applied to the core bus count
    pub expansion_factor: f64,

    /// Calibration multiplier applied to the final bus count
    pub bus_calibration: f64,
}

impl Default for EquipmentBlocks {
    fn default() -> Self {
        Self {
            ups_lineup_mw: 1.5,
            transformer_mva: 3.0,
            lv_bus_mw: 3.0,
            pdu_mva: 0.3,
            power_factor: 0.95,
            mv_base: 2,
            utility_incomers: 1,
            voltage_levels: 2,
            backup_gens: 0,
            expansion_factor: 1.0,
            bus_calibration: 1.0,
        }
    }
}
