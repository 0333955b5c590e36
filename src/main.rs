use clap::Parser;
use miette::Result;
use pss::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Buses(args) => pss::cli::commands::buses::run(args, &global),
        Commands::Split(args) => pss::cli::commands::split::run(args, &global),
        Commands::Estimate(args) => pss::cli::commands::estimate::run(args, &global),
        Commands::Template(args) => pss::cli::commands::template::run(args),
        Commands::Export(args) => pss::cli::commands::export::run(args, &global),
    }
}
