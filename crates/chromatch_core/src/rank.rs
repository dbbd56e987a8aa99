//! Ranking and curation of comparison results.
//!
//! Collapses a scored table to the best Lab similarity per (target, source)
//! pair, drops pairs whose names already give the relationship away, drops
//! known junk source names, and keeps the top N. The point of the name
//! filter is discovery: "Gruvbox Dark" matching "gruvbox-material" is not
//! news, an unrelated theme landing at 0.97 is.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

/// Rows kept by default after filtering.
pub const DEFAULT_TOP: usize = 50;

/// Words too generic to count as a shared name: scheme boilerplate and
/// light/dark variant markers.
pub const NAME_STOPWORDS: &[&str] = &["nvim", "vim", "theme", "colors", "color", "dark", "light"];

/// Theme families matched by substring rather than whole word, so
/// "NeoNordic" and "nordic.nvim" still count as the same family.
const SHARED_FAMILIES: &[&str] = &["nord", "gruvbox"];

/// Source names that are dataset noise, not real themes.
const SOURCE_BLACKLIST: &[&str] = &["theme.nvim", "nvim"];

/// One curated pair: a target theme, a source theme, and the best Lab
/// similarity observed between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub target_name: String,
    pub source_name: String,
    pub index_lab: f64,
}

/// Lowercases and collapses every run of non-alphanumeric characters to a
/// single space, trimming the ends.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn keywords(name: &str) -> HashSet<String> {
    normalize_name(name)
        .split(' ')
        .filter(|word| !word.is_empty() && !NAME_STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// True when two theme names share a meaningful keyword or a known family
/// substring. Such pairs are filtered out as trivially related.
pub fn is_obvious_pair(target_name: &str, source_name: &str) -> bool {
    let target_words = keywords(target_name);
    let source_words = keywords(source_name);
    if target_words.intersection(&source_words).next().is_some() {
        return true;
    }
    let target_lower = target_name.to_lowercase();
    let source_lower = source_name.to_lowercase();
    SHARED_FAMILIES
        .iter()
        .any(|family| target_lower.contains(*family) && source_lower.contains(*family))
}

/// Collapses rows to the maximum Lab similarity per (target, source) pair.
/// Output is ordered by pair name, which later stable sorts preserve for
/// equal scores.
pub fn aggregate_best<I>(rows: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = RankedEntry>,
{
    let mut best: BTreeMap<(String, String), f64> = BTreeMap::new();
    for row in rows {
        let slot = best
            .entry((row.target_name, row.source_name))
            .or_insert(f64::NEG_INFINITY);
        if row.index_lab > *slot {
            *slot = row.index_lab;
        }
    }
    best.into_iter()
        .map(|((target_name, source_name), index_lab)| RankedEntry {
            target_name,
            source_name,
            index_lab,
        })
        .collect()
}

/// Aggregates, filters, and keeps the `top` best-scoring pairs.
///
/// Obvious pairs and blacklisted sources are removed after aggregation;
/// the survivors are sorted by Lab similarity descending with ties left in
/// pair-name order.
pub fn rank<I>(rows: I, top: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = RankedEntry>,
{
    let mut entries: Vec<RankedEntry> = aggregate_best(rows)
        .into_iter()
        .filter(|entry| !is_obvious_pair(&entry.target_name, &entry.source_name))
        .filter(|entry| !SOURCE_BLACKLIST.contains(&entry.source_name.as_str()))
        .collect();
    entries.sort_by(|x, y| y.index_lab.total_cmp(&x.index_lab));
    entries.truncate(top);
    entries
}
