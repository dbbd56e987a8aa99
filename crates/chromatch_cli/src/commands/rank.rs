//! `chromatch rank` command.

use std::path::Path;

use anyhow::{ensure, Result};

use crate::dataset;
use crate::output;

pub fn handle(tsv: &Path, out: &Path, top: usize) -> Result<()> {
    ensure!(top > 0, "--top must be at least 1");

    let rows = dataset::read_comparison_rows(tsv)?;
    tracing::info!(rows = rows.len(), "comparison table loaded");

    let ranked = chromatch_core::rank(rows, top);
    dataset::write_ranked_tsv(out, &ranked)?;
    output::success(&format!(
        "wrote {} curated pairs to {}",
        ranked.len(),
        out.display()
    ));
    if ranked.len() < top {
        output::dim(&format!("  fewer than {top} pairs survived the filters"));
    }

    // Preview mirrors the written file.
    output::header("Top Pairs");
    let mut table = output::table();
    output::table_header(&mut table, dataset::RANKED_HEADER);
    for entry in &ranked {
        output::table_row(
            &mut table,
            &[
                entry.target_name.clone(),
                entry.source_name.clone(),
                format!("{:.4}", entry.index_lab),
            ],
        );
    }
    let items: Vec<serde_json::Value> = ranked
        .iter()
        .map(|entry| {
            serde_json::json!({
                "iterm_name": entry.target_name,
                "nvim_name": entry.source_name,
                "similarity_index_lab": entry.index_lab,
            })
        })
        .collect();
    output::table_print(&table, &items);
    Ok(())
}
