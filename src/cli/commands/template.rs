//! `pss template` command - write a starter estimate request file

use std::fs;
use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::estimate::EstimateRequest;

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: TemplateArgs) -> Result<()> {
    let request = EstimateRequest::default();
    let yaml = serde_yml::to_string(&request).into_diagnostic()?;

    let content = format!(
        "# PSS estimate request\n# Every field is optional; missing sections fall back to defaults.\n{}",
        yaml
    );

    match args.output {
        Some(path) => {
            fs::write(&path, content).into_diagnostic()?;
            println!(
                "{} wrote template to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
