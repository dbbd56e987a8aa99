//! Command dispatch.

pub mod compare;
pub mod diff;
pub mod rank;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compare {
            nvim,
            iterm,
            out,
            workers,
        } => compare::handle(&nvim, &iterm, &out, workers),
        Command::Rank { tsv, out, top } => rank::handle(&tsv, &out, top),
        Command::Diff {
            nvim,
            iterm,
            nvim_name,
            iterm_name,
        } => diff::handle(&nvim, &iterm, &nvim_name, &iterm_name),
    }
}
