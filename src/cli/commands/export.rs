//! `pss export` command - CSV cost sheet for handoff to sales

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::load_request;
use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::estimate::{EstimateRequest, Quotation};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Estimate request file (omit for the built-in defaults)
    pub request: Option<PathBuf>,

    /// Output file (default: PSS_Cost_Estimate_<project>_<timestamp>.csv)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let request = load_request(&args.request)?;
    let quote = request.estimate();

    let path = args.output.unwrap_or_else(|| default_path(&request));
    write_cost_sheet(&path, &request, &quote)?;

    if !global.quiet {
        println!(
            "{} exported cost sheet to {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    Ok(())
}

fn default_path(request: &EstimateRequest) -> PathBuf {
    // Project names are free text; anything that is not filename-safe
    // (path separators included) becomes a dash.
    let project: String = request
        .project_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("PSS_Cost_Estimate_{}_{}.csv", project, timestamp))
}

fn write_cost_sheet(path: &PathBuf, request: &EstimateRequest, quote: &Quotation) -> Result<()> {
    let config = Config::load();
    let prepared_by = request
        .prepared_by
        .clone()
        .unwrap_or_else(|| config.author());

    let mut writer = csv::Writer::from_path(path).into_diagnostic()?;

    writer
        .write_record(["Parameter", "Value"])
        .into_diagnostic()?;

    let mut row = |parameter: &str, value: String| -> Result<()> {
        writer
            .write_record([parameter, value.as_str()])
            .into_diagnostic()
    };

    row("Project", request.project_name.clone())?;
    row("Prepared By", prepared_by)?;
    row(
        "Date",
        chrono::Local::now().format("%Y-%m-%d").to_string(),
    )?;
    if let Some(ref scope) = request.scope {
        row("Scope", scope.clone())?;
    }

    row("IT Capacity (MW)", request.facility.it_capacity_mw.to_string())?;
    row("PUE", request.facility.pue.to_string())?;
    row("Tier", request.facility.tier.to_string())?;
    row(
        "Pricing Mode",
        if request.competitive_pricing {
            "Competitive".to_string()
        } else {
            "Unified".to_string()
        },
    )?;

    row("Bus Count", quote.bus_count.to_string())?;
    if let Some(split) = quote.split {
        row("IT Buses", split.it_buses.to_string())?;
        row("Mechanical Buses", split.mech_buses.to_string())?;
        row("House Buses", split.house_buses.to_string())?;
    }

    for line in &quote.studies {
        row(
            &format!("{} (hours)", line.kind.name()),
            format!("{:.1}", line.manhours),
        )?;
        row(
            &format!("{} (cost)", line.kind.name()),
            format!("{:.2}", line.total_cost),
        )?;
    }

    row("Total Manhours", format!("{:.1}", quote.total_manhours))?;
    if quote.hours_reduced > 0.0 {
        row("Hours Reduced (ETAP)", format!("{:.1}", quote.hours_reduced))?;
    }
    row("Labor Cost", format!("{:.2}", quote.labor.total_cost))?;
    row("Report Cost", format!("{:.2}", quote.report_cost))?;
    row("Ancillary Cost", format!("{:.2}", quote.ancillary_cost))?;
    row(
        "Subtotal",
        format!("{:.2}", quote.subtotal_before_adjustments),
    )?;
    row("Urgency", format!("{:.2}", quote.urgency_cost))?;
    row("Discount", format!("{:.2}", quote.discount_amount))?;
    row("Margin", format!("{:.2}", quote.margin_amount))?;
    row("Final Total", format!("{:.2}", quote.final_total_cost))?;

    writer.flush().into_diagnostic()?;
    Ok(())
}
