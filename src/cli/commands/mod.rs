//! Command implementations

pub mod buses;
pub mod estimate;
pub mod export;
pub mod split;
pub mod template;

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

use crate::estimate::{EstimateRequest, Tier};

/// Facility parameters shared by the `buses` and `split` commands.
///
/// Values come from an optional request file; individual flags override the
/// file, or the built-in defaults when no file is given.
#[derive(clap::Args, Debug)]
pub struct FacilityArgs {
    /// Estimate request file to read parameters from
    #[arg(long, short = 'r')]
    pub request: Option<PathBuf>,

    /// IT (white space) capacity in MW
    #[arg(long)]
    pub it_mw: Option<f64>,

    /// Mechanical (cooling) load in MW
    #[arg(long)]
    pub mech_mw: Option<f64>,

    /// House/auxiliary load in MW
    #[arg(long)]
    pub house_mw: Option<f64>,

    /// Redundancy tier ("Tier IV", "IV", "4", ...)
    #[arg(long)]
    pub tier: Option<String>,

    /// Power usage effectiveness
    #[arg(long)]
    pub pue: Option<f64>,
}

impl FacilityArgs {
    /// Build a request from the file (if any) with flag overrides applied
    pub fn resolve(&self) -> Result<EstimateRequest> {
        let mut request = load_request(&self.request)?;

        let facility = &mut request.facility;
        if let Some(it_mw) = self.it_mw {
            facility.it_capacity_mw = it_mw;
        }
        if let Some(mech_mw) = self.mech_mw {
            facility.mechanical_load_mw = mech_mw;
        }
        if let Some(house_mw) = self.house_mw {
            facility.house_load_mw = house_mw;
        }
        if let Some(ref label) = self.tier {
            facility.tier = Tier::from_label(label);
        }
        if let Some(pue) = self.pue {
            facility.pue = pue;
        }

        Ok(request)
    }
}

/// Load a request file, falling back to the default request when absent
pub fn load_request(path: &Option<PathBuf>) -> Result<EstimateRequest> {
    match path {
        Some(path) => EstimateRequest::load(path).into_diagnostic(),
        None => Ok(EstimateRequest::default()),
    }
}
