//! `chromatch diff` command.

use std::path::Path;

use anyhow::Result;

use chromatch_core::summarize_pair;

use crate::dataset;
use crate::output;

pub fn handle(nvim: &Path, iterm: &Path, nvim_name: &str, iterm_name: &str) -> Result<()> {
    let sources = dataset::load_palettes(nvim)?;
    let targets = dataset::load_palettes(iterm)?;
    let source = dataset::find_palette(&sources, nvim_name, nvim)?;
    let target = dataset::find_palette(&targets, iterm_name, iterm)?;
    tracing::info!(
        source = source.name(),
        source_colors = source.len(),
        target = target.name(),
        target_colors = target.len(),
        "scoring pair"
    );

    let summary = summarize_pair(source, target)?;
    output::data("diff", &summary);
    Ok(())
}
