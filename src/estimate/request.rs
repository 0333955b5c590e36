//! Estimate request - the YAML artifact that drives a full estimation run
//!
//! An [`EstimateRequest`] bundles every input of the pipeline into one
//! serializable document. Every field has a default, so a partial YAML
//! file (or an empty one) is always a valid request.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimate::adjustments::{CostAdjustments, ModelConfig, ReportComplexity};
use crate::estimate::allocation::{allocate_categories, CategorySplit, MechRedundancy};
use crate::estimate::ancillary::AncillaryCosts;
use crate::estimate::bus_count::estimate_bus_count;
use crate::estimate::equipment::EquipmentBlocks;
use crate::estimate::facility::FacilityProfile;
use crate::estimate::labor::LaborModel;
use crate::estimate::quote::{aggregate, AggregationInput, Quotation};
use crate::estimate::studies::{StudyCatalog, StudySelection};

/// Errors that can occur while loading a request file
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("could not read request file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse request file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// A complete estimation request.
///
/// The project metadata at the top is carried through to exports; the
/// rest feeds the three pipeline stages directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    /// Project name, used in exports and file names
    pub project_name: String,

    /// Engineer preparing the estimate
    pub prepared_by: Option<String>,

    /// Free-form scope description
    pub scope: Option<String>,

    pub facility: FacilityProfile,
    pub equipment: EquipmentBlocks,

    /// When true, allocate buses to IT/Mechanical/House and price
    /// per-category hours instead of the unified rate
    pub competitive_pricing: bool,

    /// Mechanical cooling redundancy, used by the category allocator
    pub mech_redundancy: MechRedundancy,

    pub model: ModelConfig,
    pub studies: StudySelection,
    pub catalog: StudyCatalog,
    pub labor: LaborModel,
    pub adjustments: CostAdjustments,
    pub report_complexity: ReportComplexity,
    pub ancillary: AncillaryCosts,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            project_name: "Project-Alpha".to_string(),
            prepared_by: None,
            scope: None,
            facility: FacilityProfile::default(),
            equipment: EquipmentBlocks::default(),
            competitive_pricing: false,
            mech_redundancy: MechRedundancy::default(),
            model: ModelConfig::default(),
            studies: StudySelection::default(),
            catalog: StudyCatalog::default(),
            labor: LaborModel::default(),
            adjustments: CostAdjustments::default(),
            report_complexity: ReportComplexity::default(),
            ancillary: AncillaryCosts::default(),
        }
    }
}

impl EstimateRequest {
    /// Load a request from a YAML file
    pub fn load(path: &Path) -> Result<Self, RequestError> {
        let content = fs::read_to_string(path).map_err(|source| RequestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yml::from_str(&content).map_err(|source| RequestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Run the bus count estimator for this request
    pub fn bus_count(&self) -> u32 {
        estimate_bus_count(&self.facility, &self.equipment)
    }

    /// Category split, when competitive pricing is enabled
    pub fn split(&self) -> Option<CategorySplit> {
        if self.competitive_pricing {
            Some(allocate_categories(
                self.bus_count(),
                &self.facility,
                self.mech_redundancy,
            ))
        } else {
            None
        }
    }

    /// Run the full pipeline and produce a quotation
    pub fn estimate(&self) -> Quotation {
        aggregate(&AggregationInput {
            bus_count: self.bus_count(),
            split: self.split(),
            tier: self.facility.tier,
            selection: &self.studies,
            catalog: &self.catalog,
            labor: &self.labor,
            model: &self.model,
            report_complexity: self.report_complexity,
            adjustments: &self.adjustments,
            ancillary: &self.ancillary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::facility::Tier;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_request_pipeline() {
        let request = EstimateRequest::default();

        assert_eq!(request.bus_count(), 95);
        assert_eq!(request.split(), None);

        let quote = request.estimate();
        assert_eq!(quote.bus_count, 95);
        assert!(quote.final_total_cost > 0.0);
    }

    #[test]
    fn test_competitive_pricing_produces_split() {
        let request = EstimateRequest {
            competitive_pricing: true,
            ..EstimateRequest::default()
        };

        let split = request.split().unwrap();
        assert_eq!(split.total(), request.bus_count());

        let quote = request.estimate();
        assert_eq!(quote.split, Some(split));
    }

    #[test]
    fn test_load_partial_yaml_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        fs::write(
            &path,
            "project_name: Hyperscale-West\nfacility:\n  tier: Tier II\n",
        )
        .unwrap();

        let request = EstimateRequest::load(&path).unwrap();
        assert_eq!(request.project_name, "Hyperscale-West");
        assert_eq!(request.facility.tier, Tier::II);
        // Untouched sections fall back to defaults.
        assert_eq!(request.facility.it_capacity_mw, 10.0);
        assert_eq!(request.labor.rates.mid, 1_200.0);
    }

    #[test]
    fn test_load_empty_yaml_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        fs::write(&path, "{}\n").unwrap();

        let request = EstimateRequest::load(&path).unwrap();
        assert_eq!(request, EstimateRequest::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = EstimateRequest::load(Path::new("/nonexistent/request.yaml")).unwrap_err();
        assert!(matches!(err, RequestError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.yaml");
        fs::write(&path, "facility: [not, a, mapping]\n").unwrap();

        let err = EstimateRequest::load(&path).unwrap_err();
        assert!(matches!(err, RequestError::Parse { .. }));
    }

    #[test]
    fn test_round_trip_yaml() {
        let request = EstimateRequest {
            project_name: "DC-East-02".to_string(),
            prepared_by: Some("R. Iyer".to_string()),
            competitive_pricing: true,
            ..EstimateRequest::default()
        };

        let yaml = serde_yml::to_string(&request).unwrap();
        let parsed: EstimateRequest = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, request);
    }
}
