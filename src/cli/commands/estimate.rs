//! `pss estimate` command - full cost quotation

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::load_request;
use crate::cli::helpers::{format_currency, format_hours, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::estimate::{EstimateRequest, Quotation};

#[derive(clap::Args, Debug)]
pub struct EstimateArgs {
    /// Estimate request file (omit for the built-in defaults)
    pub request: Option<PathBuf>,

    /// Force competitive pricing (IT/Mech/House category rates)
    #[arg(long)]
    pub competitive: bool,
}

pub fn run(args: EstimateArgs, global: &GlobalOpts) -> Result<()> {
    let mut request = load_request(&args.request)?;
    if args.competitive {
        request.competitive_pricing = true;
    }

    let quote = request.estimate();

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&quote).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&quote).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("study,manhours,labor_cost,report_cost,total_cost");
            for line in &quote.studies {
                println!(
                    "{},{:.1},{:.2},{:.2},{:.2}",
                    line.kind.key(),
                    line.manhours,
                    line.labor_cost,
                    line.report_cost,
                    line.total_cost
                );
            }
        }
        OutputFormat::Tsv => {
            for line in &quote.studies {
                println!(
                    "{}\t{:.1}\t{:.2}\t{:.2}\t{:.2}",
                    line.kind.key(),
                    line.manhours,
                    line.labor_cost,
                    line.report_cost,
                    line.total_cost
                );
            }
        }
        OutputFormat::Auto => {
            if global.quiet {
                println!("{:.2}", quote.final_total_cost);
                return Ok(());
            }
            print_summary(&request, &quote);
        }
    }

    Ok(())
}

fn print_summary(request: &EstimateRequest, quote: &Quotation) {
    let config = Config::load();
    let currency = config.currency();

    println!(
        "{} {}",
        style("Cost Estimate:").bold(),
        style(&request.project_name).cyan()
    );
    println!(
        "   {} MW IT | {} | PUE {} | {}",
        request.facility.it_capacity_mw,
        style(request.facility.tier).yellow(),
        request.facility.pue,
        if request.competitive_pricing {
            "competitive pricing"
        } else {
            "unified pricing"
        }
    );
    if let Some(ref scope) = request.scope {
        println!("   {}", style(truncate_str(scope, 72)).dim());
    }
    println!();

    println!(
        "   {} {}",
        style("Buses:").bold(),
        style(quote.bus_count).cyan()
    );
    if let Some(split) = quote.split {
        println!(
            "   {} IT {} | Mech {} | House {}",
            style("Split:").bold(),
            split.it_buses,
            split.mech_buses,
            split.house_buses
        );
    }
    println!();

    if !quote.studies.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Study", "Hours", "Labor", "Report", "Total"]);
        for line in &quote.studies {
            builder.push_record([
                line.kind.name().to_string(),
                format_hours(line.manhours),
                format_currency(line.labor_cost),
                format_currency(line.report_cost),
                format_currency(line.total_cost),
            ]);
        }
        println!("{}", builder.build().with(Style::markdown()));
        println!();
    }

    println!(
        "   Manhours: {} total",
        style(format_hours(quote.total_manhours)).cyan()
    );
    if quote.hours_reduced > 0.0 {
        println!(
            "   ETAP model credit: {} hours removed",
            style(format_hours(quote.hours_reduced)).green()
        );
    }
    println!(
        "   Labor: {}{} (senior {:.1}h, mid {:.1}h, junior {:.1}h)",
        currency,
        format_currency(quote.labor.total_cost),
        quote.labor.senior_hours,
        quote.labor.mid_hours,
        quote.labor.junior_hours
    );
    println!("   Reports: {}{}", currency, format_currency(quote.report_cost));
    println!(
        "   Ancillary: {}{}",
        currency,
        format_currency(quote.ancillary_cost)
    );
    println!();

    println!(
        "   Subtotal: {}{}",
        currency,
        format_currency(quote.subtotal_before_adjustments)
    );
    if quote.urgency_cost > 0.0 {
        println!(
            "   Urgency: +{}{}",
            currency,
            format_currency(quote.urgency_cost)
        );
    }
    if quote.discount_amount > 0.0 {
        println!(
            "   Repeat discount: -{}{}",
            currency,
            format_currency(quote.discount_amount)
        );
    }
    println!(
        "   Margin: +{}{}",
        currency,
        format_currency(quote.margin_amount)
    );
    println!();
    println!(
        "   {} {}{}",
        style("Total:").bold(),
        currency,
        style(format_currency(quote.final_total_cost)).green().bold()
    );
}
