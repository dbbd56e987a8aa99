//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use chromatch_core::rank::DEFAULT_TOP;

/// Find iTerm color schemes that look like your Neovim theme
#[derive(Parser)]
#[command(name = "chromatch", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score every Neovim theme against every iTerm scheme
    Compare {
        /// Neovim dataset TSV (name, url, colors columns)
        #[arg(long)]
        nvim: PathBuf,
        /// iTerm dataset TSV (name, url, colors columns)
        #[arg(long)]
        iterm: PathBuf,
        /// Where to write the comparison table
        #[arg(long, default_value = "results.tsv")]
        out: PathBuf,
        /// Worker threads (default: one per CPU core)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Curate the best non-obvious pairs from a comparison table
    Rank {
        /// Comparison TSV produced by `chromatch compare`
        #[arg(long)]
        tsv: PathBuf,
        /// Where to write the curated table
        #[arg(long, default_value = "top_pairs.tsv")]
        out: PathBuf,
        /// How many pairs to keep
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },
    /// Score one named pair of themes
    Diff {
        /// Neovim dataset TSV
        #[arg(long)]
        nvim: PathBuf,
        /// iTerm dataset TSV
        #[arg(long)]
        iterm: PathBuf,
        /// Neovim theme name to look up
        #[arg(long)]
        nvim_name: String,
        /// iTerm scheme name to look up
        #[arg(long)]
        iterm_name: String,
    },
}
