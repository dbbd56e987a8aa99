//! CLI entry point for chromatch.

mod cli;
mod commands;
mod dataset;
mod output;
mod trace;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    trace::init(cli.verbose);
    output::init(cli.output);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
