//! Labor model - engineer allocation percentages and hourly rates

use serde::{Deserialize, Serialize};

/// Percentage split of manhours across engineer seniority tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkAllocation {
    pub senior_pct: f64,
    pub mid_pct: f64,
    pub junior_pct: f64,
}

impl Default for WorkAllocation {
    fn default() -> Self {
        Self {
            senior_pct: 20.0,
            mid_pct: 30.0,
            junior_pct: 50.0,
        }
    }
}

impl WorkAllocation {
    /// Sum of the three percentages
    pub fn total(&self) -> f64 {
        self.senior_pct + self.mid_pct + self.junior_pct
    }

    /// Proportionally rescale so the percentages sum to exactly 100.
    ///
    /// Percentages that do not sum to 100 are corrected, never rejected.
    /// A degenerate all-zero allocation falls back to the default split.
    pub fn normalized(&self) -> WorkAllocation {
        let total = self.total();
        if total <= 0.0 {
            return WorkAllocation::default();
        }

        let factor = 100.0 / total;
        WorkAllocation {
            senior_pct: self.senior_pct * factor,
            mid_pct: self.mid_pct * factor,
            junior_pct: self.junior_pct * factor,
        }
    }
}

/// Hourly rates per engineer seniority tier, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborRates {
    pub senior: f64,
    pub mid: f64,
    pub junior: f64,
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            senior: 2_200.0,
            mid: 1_200.0,
            junior: 800.0,
        }
    }
}

/// Combined labor inputs for costing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborModel {
    pub allocation: WorkAllocation,
    pub rates: LaborRates,
}

/// Hours and cost per engineer tier for a block of manhours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LaborBreakdown {
    pub senior_hours: f64,
    pub mid_hours: f64,
    pub junior_hours: f64,
    pub senior_cost: f64,
    pub mid_cost: f64,
    pub junior_cost: f64,
    pub total_cost: f64,
}

impl LaborModel {
    /// Split manhours by the normalized allocation and cost each tier
    pub fn cost(&self, total_manhours: f64) -> LaborBreakdown {
        let allocation = self.allocation.normalized();

        let senior_hours = total_manhours * allocation.senior_pct / 100.0;
        let mid_hours = total_manhours * allocation.mid_pct / 100.0;
        let junior_hours = total_manhours * allocation.junior_pct / 100.0;

        let senior_cost = senior_hours * self.rates.senior;
        let mid_cost = mid_hours * self.rates.mid;
        let junior_cost = junior_hours * self.rates.junior;

        LaborBreakdown {
            senior_hours,
            mid_hours,
            junior_hours,
            senior_cost,
            mid_cost,
            junior_cost,
            total_cost: senior_cost + mid_cost + junior_cost,
        }
    }

    /// Blended cost per manhour under the normalized allocation
    pub fn blended_rate(&self) -> f64 {
        let allocation = self.allocation.normalized();
        (allocation.senior_pct * self.rates.senior
            + allocation.mid_pct * self.rates.mid
            + allocation.junior_pct * self.rates.junior)
            / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocation_already_normalized() {
        let allocation = WorkAllocation::default();
        assert_eq!(allocation.normalized(), allocation);
        assert!((allocation.total() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalization_preserves_ratios() {
        let allocation = WorkAllocation {
            senior_pct: 10.0,
            mid_pct: 10.0,
            junior_pct: 10.0,
        };
        let normalized = allocation.normalized();

        assert!((normalized.total() - 100.0).abs() < 0.1);
        assert!((normalized.senior_pct - normalized.mid_pct).abs() < 1e-9);
        assert!((normalized.senior_pct - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalization_over_100() {
        let allocation = WorkAllocation {
            senior_pct: 50.0,
            mid_pct: 60.0,
            junior_pct: 70.0,
        };
        let normalized = allocation.normalized();

        assert!((normalized.total() - 100.0).abs() < 0.1);
        // Ratios preserved: 50:60:70
        assert!((normalized.mid_pct / normalized.senior_pct - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_falls_back_to_default() {
        let allocation = WorkAllocation {
            senior_pct: 0.0,
            mid_pct: 0.0,
            junior_pct: 0.0,
        };
        assert_eq!(allocation.normalized(), WorkAllocation::default());
    }

    #[test]
    fn test_labor_cost_default_model() {
        // 30 hours at 20/30/50 over 2200/1200/800:
        // 6h*2200 + 9h*1200 + 15h*800 = 13200 + 10800 + 12000 = 36000
        let breakdown = LaborModel::default().cost(30.0);

        assert!((breakdown.senior_hours - 6.0).abs() < 1e-9);
        assert!((breakdown.mid_hours - 9.0).abs() < 1e-9);
        assert!((breakdown.junior_hours - 15.0).abs() < 1e-9);
        assert!((breakdown.total_cost - 36_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_blended_rate() {
        // 0.2*2200 + 0.3*1200 + 0.5*800 = 1200
        assert!((LaborModel::default().blended_rate() - 1_200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_hours_zero_cost() {
        let breakdown = LaborModel::default().cost(0.0);
        assert_eq!(breakdown.total_cost, 0.0);
    }
}
