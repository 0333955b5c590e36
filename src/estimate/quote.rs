//! Cost aggregation engine - manhours, labor, reports, adjustments
//!
//! Turns a bus count (or category split) and the selected studies into a
//! [`Quotation`]. Adjustments compound in a fixed order on the running
//! subtotal: urgency, then repeat-customer discount, then margin.

use serde::{Deserialize, Serialize};

use crate::estimate::adjustments::{
    CostAdjustments, CustomerType, DeliveryType, ModelConfig, ReportComplexity,
};
use crate::estimate::allocation::CategorySplit;
use crate::estimate::ancillary::AncillaryCosts;
use crate::estimate::facility::Tier;
use crate::estimate::labor::{LaborBreakdown, LaborModel};
use crate::estimate::studies::{StudyCatalog, StudyKind, StudySelection};

/// Everything the aggregation engine needs for one quotation.
#[derive(Debug, Clone, Copy)]
pub struct AggregationInput<'a> {
    /// Total bus count from the estimator
    pub bus_count: u32,

    /// Category split when competitive pricing is enabled
    pub split: Option<CategorySplit>,

    /// Redundancy tier, for the study complexity multiplier
    pub tier: Tier,

    pub selection: &'a StudySelection,
    pub catalog: &'a StudyCatalog,
    pub labor: &'a LaborModel,
    pub model: &'a ModelConfig,
    pub report_complexity: ReportComplexity,
    pub adjustments: &'a CostAdjustments,
    pub ancillary: &'a AncillaryCosts,
}

/// Per-study cost breakdown line.
///
/// Manhours here are pre-reduction: the ETAP hour reduction applies to the
/// quotation's total only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyLine {
    pub kind: StudyKind,
    pub manhours: f64,
    pub labor_cost: f64,
    pub report_cost: f64,
    pub total_cost: f64,
}

/// The terminal output of the pipeline. Plain data, created fresh per
/// estimation request and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Estimator output this quotation was priced from
    pub bus_count: u32,

    /// Category split, present in competitive pricing mode
    pub split: Option<CategorySplit>,

    /// Per-study breakdown for the selected studies
    pub studies: Vec<StudyLine>,

    /// Total manhours after any ETAP-model reduction
    pub total_manhours: f64,

    /// Manhours removed by the ETAP-model reduction
    pub hours_reduced: f64,

    /// Hours and cost per engineer tier
    pub labor: LaborBreakdown,

    /// Report cost after the complexity multiplier
    pub report_cost: f64,

    pub site_visit_cost: f64,
    pub meeting_cost: f64,
    pub label_cost: f64,
    pub stickering_cost: f64,
    pub custom_cost: f64,

    /// Sum of all ancillary costs
    pub ancillary_cost: f64,

    pub subtotal_before_adjustments: f64,
    pub urgency_cost: f64,
    pub subtotal_after_urgency: f64,
    pub discount_amount: f64,
    pub subtotal_after_discount: f64,
    pub margin_amount: f64,
    pub final_total_cost: f64,
}

/// Raw manhours for one study, before the ETAP reduction
fn study_hours(input: &AggregationInput, kind: StudyKind) -> f64 {
    let pricing = input.catalog.pricing(kind);
    let tier_complexity = input.tier.complexity_factor();

    match input.split {
        Some(split) => {
            let hours = split.it_buses as f64 * pricing.category_hours.it
                + split.mech_buses as f64 * pricing.category_hours.mech
                + split.house_buses as f64 * pricing.category_hours.house;
            hours * pricing.factor * tier_complexity
        }
        None => {
            input.bus_count as f64 * pricing.base_hours_per_bus * pricing.factor * tier_complexity
        }
    }
}

/// Aggregate bus counts and selections into a final quotation.
///
/// Pure function: identical inputs produce identical quotations. No study
/// selected is not an error; the quotation reduces to ancillary plus margin.
pub fn aggregate(input: &AggregationInput) -> Quotation {
    let report_multiplier = input.report_complexity.multiplier();
    let blended_rate = input.labor.blended_rate();

    let mut studies = Vec::new();
    let mut raw_manhours = 0.0;
    let mut report_cost = 0.0;

    for kind in input.selection.selected() {
        let manhours = study_hours(input, kind);
        let line_report = input.catalog.pricing(kind).report_cost * report_multiplier;
        let labor_cost = manhours * blended_rate;

        raw_manhours += manhours;
        report_cost += line_report;

        studies.push(StudyLine {
            kind,
            manhours,
            labor_cost,
            report_cost: line_report,
            total_cost: labor_cost + line_report,
        });
    }

    let reduction_pct = input.model.effective_reduction_pct();
    let total_manhours = raw_manhours * (1.0 - reduction_pct / 100.0);
    let hours_reduced = raw_manhours - total_manhours;

    let labor = input.labor.cost(total_manhours);

    let ancillary_cost = input.ancillary.total();
    let subtotal_before_adjustments = labor.total_cost + report_cost + ancillary_cost;

    let urgency_cost = match input.adjustments.delivery_type {
        DeliveryType::Urgent => {
            subtotal_before_adjustments * (input.adjustments.urgency_multiplier - 1.0)
        }
        DeliveryType::Standard => 0.0,
    };
    let subtotal_after_urgency = subtotal_before_adjustments + urgency_cost;

    let discount_amount = match input.adjustments.customer_type {
        CustomerType::Repeat if input.adjustments.repeat_discount_pct > 0.0 => {
            subtotal_after_urgency * input.adjustments.repeat_discount_pct / 100.0
        }
        _ => 0.0,
    };
    let subtotal_after_discount = subtotal_after_urgency - discount_amount;

    let margin_amount = subtotal_after_discount * input.adjustments.margin_pct / 100.0;
    let final_total_cost = subtotal_after_discount + margin_amount;

    Quotation {
        bus_count: input.bus_count,
        split: input.split,
        studies,
        total_manhours,
        hours_reduced,
        labor,
        report_cost,
        site_visit_cost: input.ancillary.site_visit_total(),
        meeting_cost: input.ancillary.meeting_total(),
        label_cost: input.ancillary.label_total(),
        stickering_cost: input.ancillary.stickering_cost,
        custom_cost: input.ancillary.custom_total(),
        ancillary_cost,
        subtotal_before_adjustments,
        urgency_cost,
        subtotal_after_urgency,
        discount_amount,
        subtotal_after_discount,
        margin_amount,
        final_total_cost,
    }
}
