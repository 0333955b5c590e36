//! `pss buses` command - bus count estimation

use console::style;
use miette::{IntoDiagnostic, Result};
use serde_json::json;

use crate::cli::commands::FacilityArgs;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::estimate::bus_count::{derive_loads, ComponentCounts};

#[derive(clap::Args, Debug)]
pub struct BusesArgs {
    #[command(flatten)]
    pub facility: FacilityArgs,
}

pub fn run(args: BusesArgs, global: &GlobalOpts) -> Result<()> {
    let request = args.facility.resolve()?;
    let facility = &request.facility;
    let bus_count = request.bus_count();

    let record = json!({
        "bus_count": bus_count,
        "tier": facility.tier.to_string(),
        "it_capacity_mw": facility.it_capacity_mw,
        "pue": facility.pue,
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
            println!("bus_count,tier,it_capacity_mw,pue");
            println!(
                "{},{},{},{}",
                bus_count, facility.tier, facility.it_capacity_mw, facility.pue
            );
        }
        OutputFormat::Tsv => {
            println!("{}\t{}\t{}\t{}", bus_count, facility.tier, facility.it_capacity_mw, facility.pue);
        }
        OutputFormat::Auto => {
            if global.quiet {
                println!("{}", bus_count);
                return Ok(());
            }

            println!(
                "{} estimated buses for {} MW IT at {} (PUE {})",
                style(bus_count).cyan().bold(),
                facility.it_capacity_mw,
                style(facility.tier).yellow(),
                facility.pue
            );

            if global.verbose {
                let loads = derive_loads(facility);
                let counts = ComponentCounts::count(facility, &request.equipment);

                println!();
                println!("   {} loads:", style("Derived").bold());
                println!("     total {:.2} MW | it {:.2} | mech {:.2} | house {:.2}",
                    loads.total_mw, loads.it_mw, loads.mech_mw, loads.house_mw);
                println!("   {} at N redundancy:", style("Equipment").bold());
                println!(
                    "     mv {} | tx {} | lv {} | ups {} | pdu {}",
                    counts.mv_buses,
                    counts.transformers,
                    counts.lv_buses,
                    counts.ups_buses,
                    counts.pdus
                );
            }
        }
    }

    Ok(())
}
