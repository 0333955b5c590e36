//! Commercial adjustments - delivery urgency, discounts, margins, and the
//! report/model configuration knobs that scale cost

use serde::{Deserialize, Serialize};

/// Delivery schedule for the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Standard,
    Urgent,
}

impl Default for DeliveryType {
    fn default() -> Self {
        DeliveryType::Standard
    }
}

impl std::fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryType::Standard => write!(f, "Standard"),
            DeliveryType::Urgent => write!(f, "Urgent"),
        }
    }
}

/// Customer relationship, for repeat-business discounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    New,
    Repeat,
}

impl Default for CustomerType {
    fn default() -> Self {
        CustomerType::New
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerType::New => write!(f, "New Customer"),
            CustomerType::Repeat => write!(f, "Repeat Customer"),
        }
    }
}

/// Deliverable report depth. Multiplies every report cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportComplexity {
    Basic,
    Standard,
    Premium,
}

impl ReportComplexity {
    /// Multiplier applied to flat report costs
    pub fn multiplier(&self) -> f64 {
        match self {
            ReportComplexity::Basic => 0.8,
            ReportComplexity::Standard => 1.0,
            ReportComplexity::Premium => 1.3,
        }
    }
}

impl Default for ReportComplexity {
    fn default() -> Self {
        ReportComplexity::Standard
    }
}

impl std::fmt::Display for ReportComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportComplexity::Basic => write!(f, "Basic"),
            ReportComplexity::Standard => write!(f, "Standard"),
            ReportComplexity::Premium => write!(f, "Premium"),
        }
    }
}

/// Whether an ETAP simulation model already exists for the facility.
///
/// An existing model reduces the required engineering effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Typical,
    Etap,
}

impl Default for ModelType {
    fn default() -> Self {
        ModelType::Typical
    }
}

/// Model availability and the associated manhour reduction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model_type: ModelType,

    /// Percentage reduction in total manhours when an ETAP model exists.
    /// Meaningful range is 10-90; values outside are clamped.
    pub hour_reduction_pct: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::Typical,
            hour_reduction_pct: 30.0,
        }
    }
}

impl ModelConfig {
    /// Effective reduction percentage: 0 unless the ETAP model is selected,
    /// otherwise the configured value clamped to [10, 90].
    pub fn effective_reduction_pct(&self) -> f64 {
        match self.model_type {
            ModelType::Typical => 0.0,
            ModelType::Etap => self.hour_reduction_pct.clamp(10.0, 90.0),
        }
    }
}

/// Commercial adjustments applied after cost aggregation, in fixed order:
/// urgency, then discount, then margin, each on the running subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAdjustments {
    pub delivery_type: DeliveryType,

    /// Urgent-delivery multiplier; the surcharge is subtotal x (multiplier - 1)
    pub urgency_multiplier: f64,

    pub customer_type: CustomerType,

    /// Repeat-customer discount percentage
    pub repeat_discount_pct: f64,

    /// Project margin percentage, applied last
    pub margin_pct: f64,
}

impl Default for CostAdjustments {
    fn default() -> Self {
        Self {
            delivery_type: DeliveryType::Standard,
            urgency_multiplier: 1.3,
            customer_type: CustomerType::New,
            repeat_discount_pct: 10.0,
            margin_pct: 15.0,
        }
    }
}
