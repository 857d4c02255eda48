//! # Springcalc CLI
//!
//! Terminal front end for spring_core: spring rate calculation, material
//! reference tables, and the PDF specification sheet.

mod args;
mod commands;

use clap::Parser;
use miette::Result;

use crate::args::{Cli, Commands};

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Rate(args) => commands::rate(&args, &global),
        Commands::Materials => commands::materials(&global),
        Commands::Report(args) => commands::report(&args, &global),
        Commands::Interactive => commands::interactive(&global),
    }
}
