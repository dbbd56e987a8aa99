//! TSV dataset loading and result table writing.
//!
//! Input datasets carry one theme per row: `name`, `url`, and a
//! comma-separated `colors` list of `#RRGGBB` literals. Columns are
//! resolved by header name, so extra columns and reordered files load
//! fine. Rows that cannot become a usable palette are skipped and logged,
//! never invented.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use chromatch_core::{ComparisonResult, Palette, RankedEntry};

/// Column order of the comparison table written by `compare` and read
/// back by `rank`.
pub const COMPARISON_HEADER: &[&str] = &[
    "nvim_name",
    "iterm_name",
    "iterm_url",
    "similarity_score_rgb",
    "similarity_score_lab",
    "similarity_index_rgb",
    "similarity_index_lab",
];

/// Column order of the curated table written by `rank`.
pub const RANKED_HEADER: &[&str] = &["iterm_name", "nvim_name", "similarity_index_lab"];

/// Loads a theme dataset, skipping rows that yield no usable palette.
pub fn load_palettes(path: &Path) -> Result<Vec<Palette>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading dataset {}", path.display()))?;
    parse_palettes(&text).with_context(|| format!("parsing dataset {}", path.display()))
}

fn parse_palettes(text: &str) -> Result<Vec<Palette>> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .context("dataset is empty, expected a header row")?;
    let names: Vec<&str> = header.trim_end_matches('\r').split('\t').collect();
    let find = |wanted: &str| {
        names
            .iter()
            .position(|n| *n == wanted)
            .with_context(|| format!("dataset header is missing a {wanted:?} column"))
    };
    let name_col = find("name")?;
    let url_col = find("url")?;
    let colors_col = find("colors")?;

    let mut palettes = Vec::new();
    let mut skipped = 0usize;
    for (lineno, line) in lines.enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |at: usize| fields.get(at).copied().unwrap_or("");
        let name = field(name_col).trim();
        let colors = field(colors_col).trim();
        if name.is_empty() || colors.is_empty() {
            tracing::debug!(line = lineno + 2, "skipping row without name or colors");
            skipped += 1;
            continue;
        }
        let hex = colors.split(',').map(str::trim).filter(|c| !c.is_empty());
        match Palette::from_hex_colors(name, field(url_col).trim(), hex) {
            Ok(palette) => palettes.push(palette),
            Err(err) => {
                tracing::warn!(line = lineno + 2, %err, "skipping unusable palette row");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "dataset rows skipped");
    }
    Ok(palettes)
}

/// Looks a theme up by its exact dataset name.
pub fn find_palette<'a>(palettes: &'a [Palette], name: &str, path: &Path) -> Result<&'a Palette> {
    palettes
        .iter()
        .find(|p| p.name() == name)
        .with_context(|| format!("theme {name:?} not found in {}", path.display()))
}

pub fn write_comparison_tsv(path: &Path, results: &[ComparisonResult]) -> Result<()> {
    let mut out = String::with_capacity(results.len() * 96 + 128);
    out.push_str(&COMPARISON_HEADER.join("\t"));
    out.push('\n');
    for row in results {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            row.source_name,
            row.target_name,
            row.target_url,
            row.score_rgb,
            row.score_lab,
            row.index_rgb,
            row.index_lab,
        ));
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

pub fn write_ranked_tsv(path: &Path, entries: &[RankedEntry]) -> Result<()> {
    let mut out = String::with_capacity(entries.len() * 48 + 64);
    out.push_str(&RANKED_HEADER.join("\t"));
    out.push('\n');
    for entry in entries {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            entry.target_name, entry.source_name, entry.index_lab,
        ));
    }
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

/// Reads the columns `rank` needs back out of a comparison table.
pub fn read_comparison_rows(path: &Path) -> Result<Vec<RankedEntry>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading comparison table {}", path.display()))?;
    parse_comparison_rows(&text)
        .with_context(|| format!("parsing comparison table {}", path.display()))
}

fn parse_comparison_rows(text: &str) -> Result<Vec<RankedEntry>> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .context("comparison table is empty, expected a header row")?;
    let names: Vec<&str> = header.trim_end_matches('\r').split('\t').collect();
    let find = |wanted: &str| {
        names
            .iter()
            .position(|n| *n == wanted)
            .with_context(|| format!("comparison table is missing a {wanted:?} column"))
    };
    let target_col = find("iterm_name")?;
    let source_col = find("nvim_name")?;
    let index_col = find("similarity_index_lab")?;

    let mut rows = Vec::new();
    for (lineno, line) in lines.enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |at: usize| fields.get(at).copied().unwrap_or("");
        let raw_index = field(index_col);
        let index_lab: f64 = raw_index.parse().with_context(|| {
            format!(
                "line {}: bad similarity_index_lab value {raw_index:?}",
                lineno + 2
            )
        })?;
        rows.push(RankedEntry {
            target_name: field(target_col).to_string(),
            source_name: field(source_col).to_string(),
            index_lab,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(source: &str, target: &str, index_lab: f64) -> ComparisonResult {
        ComparisonResult {
            source_name: source.to_string(),
            target_name: target.to_string(),
            target_url: format!("https://example.com/{target}"),
            score_rgb: 100.5,
            score_lab: 12.25,
            index_rgb: 0.75,
            index_lab,
            source_index: 0,
            target_index: 0,
        }
    }

    #[test]
    fn test_parse_palettes_basic() {
        let text = "name\turl\tcolors\n\
                    nord\thttps://x/nord\t#2e3440,#d8dee9\n\
                    dracula\thttps://x/dracula\t#282a36\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes.len(), 2);
        assert_eq!(palettes[0].name(), "nord");
        assert_eq!(palettes[0].len(), 2);
        assert_eq!(palettes[1].url(), "https://x/dracula");
    }

    #[test]
    fn test_parse_palettes_reordered_columns_with_extras() {
        let text = "status\tcolors\tname\turl\n\
                    ok\t#ffffff,#000000\tpaper\thttps://x/paper\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].name(), "paper");
        assert_eq!(palettes[0].len(), 2);
    }

    #[test]
    fn test_parse_palettes_skips_empty_colors() {
        let text = "name\turl\tcolors\n\
                    pending\thttps://x/pending\t\n\
                    kept\thttps://x/kept\t#123456\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].name(), "kept");
    }

    #[test]
    fn test_parse_palettes_skips_short_rows_and_blank_lines() {
        let text = "name\turl\tcolors\n\
                    \n\
                    lonely\n\
                    kept\thttps://x\t#abcdef\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes.len(), 1);
    }

    #[test]
    fn test_parse_palettes_drops_bad_hex_keeps_row() {
        let text = "name\turl\tcolors\n\
                    mixed\thttps://x\t#ffffff,oops,#000000\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes[0].len(), 2);
    }

    #[test]
    fn test_parse_palettes_skips_all_bad_hex_row() {
        let text = "name\turl\tcolors\n\
                    broken\thttps://x\toops,#12\n\
                    kept\thttps://x\t#abcdef\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes.len(), 1);
        assert_eq!(palettes[0].name(), "kept");
    }

    #[test]
    fn test_parse_palettes_tolerates_crlf_and_spacing() {
        let text = "name\turl\tcolors\r\n\
                    windows\thttps://x\t#ffffff, #000000\r\n";
        let palettes = parse_palettes(text).unwrap();
        assert_eq!(palettes[0].len(), 2);
    }

    #[test]
    fn test_parse_palettes_missing_column() {
        let err = parse_palettes("name\turl\nnord\thttps://x\n").unwrap_err();
        assert!(err.to_string().contains("\"colors\""));
    }

    #[test]
    fn test_parse_palettes_empty_input() {
        assert!(parse_palettes("").is_err());
    }

    #[test]
    fn test_find_palette() {
        let palettes = parse_palettes(
            "name\turl\tcolors\n\
             nord\thttps://x\t#2e3440\n",
        )
        .unwrap();
        let path = Path::new("themes.tsv");
        assert!(find_palette(&palettes, "nord", path).is_ok());
        let err = find_palette(&palettes, "missing", path).unwrap_err();
        assert!(err.to_string().contains("\"missing\""));
    }

    #[test]
    fn test_write_comparison_tsv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.tsv");
        write_comparison_tsv(&path, &[result("onedark", "One Dark", 0.5)]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "nvim_name\titerm_name\titerm_url\tsimilarity_score_rgb\tsimilarity_score_lab\tsimilarity_index_rgb\tsimilarity_index_lab"
        );
        assert_eq!(
            lines.next().unwrap(),
            "onedark\tOne Dark\thttps://example.com/One Dark\t100.5\t12.25\t0.75\t0.5"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_comparison_table_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.tsv");
        let rows = vec![result("a", "A", 0.9), result("b", "B", 0.3)];
        write_comparison_tsv(&path, &rows).unwrap();
        let back = read_comparison_rows(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].source_name, "a");
        assert_eq!(back[0].target_name, "A");
        assert_eq!(back[0].index_lab, 0.9);
    }

    #[test]
    fn test_write_ranked_tsv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.tsv");
        let entries = vec![RankedEntry {
            target_name: "Spacegray".to_string(),
            source_name: "melange".to_string(),
            index_lab: 0.875,
        }];
        write_ranked_tsv(&path, &entries).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "iterm_name\tnvim_name\tsimilarity_index_lab\nSpacegray\tmelange\t0.875\n"
        );
    }

    #[test]
    fn test_parse_comparison_rows_requires_lab_column() {
        let err = parse_comparison_rows("nvim_name\titerm_name\nfoo\tbar\n").unwrap_err();
        assert!(err.to_string().contains("similarity_index_lab"));
    }

    #[test]
    fn test_parse_comparison_rows_rejects_bad_float() {
        let text = "nvim_name\titerm_name\tsimilarity_index_lab\nfoo\tbar\tnot-a-number\n";
        let err = parse_comparison_rows(text).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
