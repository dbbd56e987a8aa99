//! Parallel all-pairs palette comparison.
//!
//! The unit of parallel work is one source palette scored against every
//! target palette. Units are independent and pure, so they fan out across
//! the rayon pool; the joined rows are then sorted by a total key to keep
//! the output byte-identical regardless of worker count or completion
//! order.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::matcher::symmetric_score;
use crate::metric::Metric;
use crate::palette::Palette;

/// One scored (source, target) palette pair.
///
/// Carries both raw symmetric scores and their normalized similarity
/// indices, plus the input positions of the two palettes for ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub source_name: String,
    pub target_name: String,
    pub target_url: String,
    pub score_rgb: f64,
    pub score_lab: f64,
    pub index_rgb: f64,
    pub index_lab: f64,
    #[serde(skip)]
    pub source_index: usize,
    #[serde(skip)]
    pub target_index: usize,
}

/// Scorecard for a single (source, target) pair, with palette sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSummary {
    pub source_name: String,
    pub target_name: String,
    pub source_colors: usize,
    pub target_colors: usize,
    pub score_rgb: f64,
    pub score_lab: f64,
    pub index_rgb: f64,
    pub index_lab: f64,
}

/// Scores one source against one target under both metrics.
pub fn summarize_pair(source: &Palette, target: &Palette) -> Result<PairSummary> {
    let score_rgb = symmetric_score(source, target, Metric::SrgbEuclidean)?;
    let score_lab = symmetric_score(source, target, Metric::DeltaE2000)?;
    Ok(PairSummary {
        source_name: source.name().to_string(),
        target_name: target.name().to_string(),
        source_colors: source.len(),
        target_colors: target.len(),
        score_rgb,
        score_lab,
        index_rgb: Metric::SrgbEuclidean.similarity_index(score_rgb),
        index_lab: Metric::DeltaE2000.similarity_index(score_lab),
    })
}

/// Scores one source palette against every target under both metrics.
///
/// `source_index` is the source's position in the input dataset; it is
/// carried into every row so the joined table can be ordered
/// deterministically later.
pub fn compare_one(
    source_index: usize,
    source: &Palette,
    targets: &[Palette],
) -> Result<Vec<ComparisonResult>> {
    let mut batch = Vec::with_capacity(targets.len());
    for (target_index, target) in targets.iter().enumerate() {
        let score_rgb = symmetric_score(source, target, Metric::SrgbEuclidean)?;
        let score_lab = symmetric_score(source, target, Metric::DeltaE2000)?;
        batch.push(ComparisonResult {
            source_name: source.name().to_string(),
            target_name: target.name().to_string(),
            target_url: target.url().to_string(),
            score_rgb,
            score_lab,
            index_rgb: Metric::SrgbEuclidean.similarity_index(score_rgb),
            index_lab: Metric::DeltaE2000.similarity_index(score_lab),
            source_index,
            target_index,
        });
    }
    Ok(batch)
}

/// Compares every source against every target in parallel.
///
/// Rows come back sorted by Lab similarity, best first. A source whose
/// scoring fails is logged and dropped without disturbing the others.
pub fn compare_all(sources: &[Palette], targets: &[Palette]) -> Vec<ComparisonResult> {
    compare_all_with(sources, targets, || {})
}

/// Like [`compare_all`], invoking `progress` once per finished source.
/// The callback runs on rayon worker threads.
pub fn compare_all_with<F>(
    sources: &[Palette],
    targets: &[Palette],
    progress: F,
) -> Vec<ComparisonResult>
where
    F: Fn() + Sync,
{
    let mut results: Vec<ComparisonResult> = sources
        .par_iter()
        .enumerate()
        .filter_map(|(source_index, source)| {
            let batch = match compare_one(source_index, source, targets) {
                Ok(batch) => Some(batch),
                Err(err) => {
                    tracing::warn!(source = %source.name(), %err, "skipping source palette");
                    None
                }
            };
            progress();
            batch
        })
        .flatten()
        .collect();
    sort_results(&mut results);
    results
}

/// Total ordering over the joined table: Lab similarity descending, ties
/// broken by source then target input position. Every pair occurs once, so
/// the key is unique and the output independent of scheduling.
fn sort_results(results: &mut [ComparisonResult]) {
    results.sort_unstable_by(|x, y| {
        y.index_lab
            .total_cmp(&x.index_lab)
            .then_with(|| x.source_index.cmp(&y.source_index))
            .then_with(|| x.target_index.cmp(&y.target_index))
    });
}
