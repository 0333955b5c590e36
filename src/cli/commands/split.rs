//! `pss split` command - category allocation for competitive pricing

use console::style;
use miette::{IntoDiagnostic, Result};
use serde_json::json;

use crate::cli::commands::FacilityArgs;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::estimate::{allocate_categories, MechRedundancy};

#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub facility: FacilityArgs,

    /// Bus count to split (defaults to the estimator's result)
    #[arg(long, short = 'b')]
    pub buses: Option<u32>,

    /// Mechanical redundancy ("N", "N+1", "N+N", "2N")
    #[arg(long, short = 'm')]
    pub mech_redundancy: Option<String>,
}

pub fn run(args: SplitArgs, global: &GlobalOpts) -> Result<()> {
    let request = args.facility.resolve()?;
    let facility = &request.facility;

    let bus_count = args.buses.unwrap_or_else(|| request.bus_count());
    let redundancy = args
        .mech_redundancy
        .as_deref()
        .map(MechRedundancy::from_label)
        .unwrap_or(request.mech_redundancy);

    let split = allocate_categories(bus_count, facility, redundancy);

    let record = json!({
        "bus_count": bus_count,
        "mech_redundancy": redundancy.to_string(),
        "it_buses": split.it_buses,
        "mech_buses": split.mech_buses,
        "house_buses": split.house_buses,
    });

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&record).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&record).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("bus_count,mech_redundancy,it_buses,mech_buses,house_buses");
            println!(
                "{},{},{},{},{}",
                bus_count, redundancy, split.it_buses, split.mech_buses, split.house_buses
            );
        }
        OutputFormat::Tsv => {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                bus_count, redundancy, split.it_buses, split.mech_buses, split.house_buses
            );
        }
        OutputFormat::Auto => {
            if global.quiet {
                println!(
                    "{}\t{}\t{}",
                    split.it_buses, split.mech_buses, split.house_buses
                );
                return Ok(());
            }

            println!(
                "{} buses split at {} mechanical redundancy:",
                style(bus_count).cyan().bold(),
                style(redundancy).yellow()
            );
            println!("   IT        {:>5}", split.it_buses);
            println!("   Mech      {:>5}", split.mech_buses);
            println!("   House     {:>5}", split.house_buses);
        }
    }

    Ok(())
}
