//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    buses::BusesArgs, estimate::EstimateArgs, export::ExportArgs, split::SplitArgs,
    template::TemplateArgs,
};

#[derive(Parser)]
#[command(name = "pss")]
#[command(author, version, about = "PSS Cost Toolkit")]
#[command(
    long_about = "A toolkit for estimating data-center power system study costs: bus counts from facility parameters, category splits for competitive pricing, and full cost quotations."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the electrical bus count for a facility
    Buses(BusesArgs),

    /// Split a bus count across IT/Mechanical/House categories
    Split(SplitArgs),

    /// Produce a full cost quotation
    Estimate(EstimateArgs),

    /// Write a template estimate request file
    Template(TemplateArgs),

    /// Export a quotation as a CSV cost sheet
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (styled summary by default)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Tab-separated values (for piping)
    Tsv,
}
