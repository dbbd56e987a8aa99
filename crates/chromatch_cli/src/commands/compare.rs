//! `chromatch compare` command.

use std::path::Path;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use rayon::ThreadPoolBuilder;

use chromatch_core::compare_all_with;

use crate::dataset;
use crate::output;

pub fn handle(nvim: &Path, iterm: &Path, out: &Path, workers: Option<usize>) -> Result<()> {
    let started = Instant::now();

    let sources = dataset::load_palettes(nvim)?;
    let targets = dataset::load_palettes(iterm)?;
    ensure!(
        !sources.is_empty(),
        "no usable palettes in {}",
        nvim.display()
    );
    ensure!(
        !targets.is_empty(),
        "no usable palettes in {}",
        iterm.display()
    );
    tracing::info!(
        sources = sources.len(),
        targets = targets.len(),
        "datasets loaded"
    );

    let bar = output::progress_bar(sources.len() as u64, "comparing palettes");
    let tick = || bar.inc(1);
    let results = match workers {
        Some(threads) => {
            ensure!(threads > 0, "--workers must be at least 1");
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("building worker pool")?;
            pool.install(|| compare_all_with(&sources, &targets, tick))
        }
        None => compare_all_with(&sources, &targets, tick),
    };
    bar.finish_and_clear();

    let expected = sources.len() * targets.len();
    if results.len() < expected {
        output::warning(&format!(
            "skipped {} of {expected} pairs, see the log",
            expected - results.len()
        ));
    }

    dataset::write_comparison_tsv(out, &results)?;
    output::success(&format!(
        "wrote {} comparisons to {}",
        results.len(),
        out.display()
    ));
    output::dim(&format!(
        "  {} nvim themes x {} iterm schemes in {:.1?}",
        sources.len(),
        targets.len(),
        started.elapsed()
    ));
    Ok(())
}
