//! Symmetric palette-to-palette scoring.
//!
//! For each color in one palette, find the distance to its nearest neighbor
//! in the other, average those minima, then average the two directions. The
//! symmetric mean keeps the score stable when one palette is much larger
//! than the other: a tiny palette that happens to sit inside a huge one is
//! not a perfect match.

use crate::error::{ChromatchError, Result};
use crate::metric::{ciede2000, srgb_euclidean, Metric};
use crate::palette::Palette;

/// Symmetric average nearest-neighbor distance between two palettes.
///
/// Lower is more similar; identical palettes score 0. Fails with
/// [`ChromatchError::EmptyPalette`] if either side has no colors.
pub fn symmetric_score(source: &Palette, target: &Palette, metric: Metric) -> Result<f64> {
    if source.is_empty() {
        return Err(ChromatchError::EmptyPalette(source.name().to_string()));
    }
    if target.is_empty() {
        return Err(ChromatchError::EmptyPalette(target.name().to_string()));
    }
    let forward = directed_mean(source, target, metric);
    let backward = directed_mean(target, source, metric);
    Ok((forward + backward) / 2.0)
}

/// Mean distance from each color in `from` to its nearest neighbor in `to`.
/// Both palettes must be non-empty.
fn directed_mean(from: &Palette, to: &Palette, metric: Metric) -> f64 {
    match metric {
        Metric::SrgbEuclidean => mean_nearest(from.colors(), to.colors(), |a, b| {
            srgb_euclidean(*a, *b)
        }),
        Metric::DeltaE2000 => mean_nearest(from.labs(), to.labs(), |a, b| ciede2000(*a, *b)),
    }
}

fn mean_nearest<T, F>(from: &[T], to: &[T], distance: F) -> f64
where
    F: Fn(&T, &T) -> f64,
{
    let total: f64 = from
        .iter()
        .map(|origin| {
            let mut best = f64::INFINITY;
            for candidate in to {
                let d = distance(origin, candidate);
                if d < best {
                    best = d;
                }
            }
            best
        })
        .sum();
    total / from.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::SRGB_MAX_DISTANCE;

    fn palette(name: &str, hex: &[&str]) -> Palette {
        Palette::from_hex_colors(name, "", hex.iter().copied()).unwrap()
    }

    #[test]
    fn test_identical_palettes_score_zero() {
        let a = palette("a", &["#000000", "#ff0000", "#1e90ff"]);
        let b = palette("b", &["#000000", "#ff0000", "#1e90ff"]);
        assert_eq!(
            symmetric_score(&a, &b, Metric::SrgbEuclidean).unwrap(),
            0.0
        );
        let lab = symmetric_score(&a, &b, Metric::DeltaE2000).unwrap();
        assert!(lab.abs() < 1e-6, "identical palettes gave {lab}");
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = palette("a", &["#102030", "#ffcc00"]);
        let b = palette("b", &["#aabbcc", "#001122", "#ff0000"]);
        for metric in [Metric::SrgbEuclidean, Metric::DeltaE2000] {
            assert_eq!(
                symmetric_score(&a, &b, metric).unwrap(),
                symmetric_score(&b, &a, metric).unwrap()
            );
        }
    }

    #[test]
    fn test_subset_palette_is_not_a_perfect_match() {
        // Forward direction is zero, backward still pays for white.
        let small = palette("small", &["#000000"]);
        let big = palette("big", &["#000000", "#ffffff"]);
        let score = symmetric_score(&small, &big, Metric::SrgbEuclidean).unwrap();
        let expected = (0.0 + (0.0 + SRGB_MAX_DISTANCE) / 2.0) / 2.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_neighbor_wins() {
        // Red's nearest target is the almost-red, not the blue.
        let source = palette("src", &["#ff0000"]);
        let target = palette("tgt", &["#fe0101", "#0000ff"]);
        let score = symmetric_score(&source, &target, Metric::SrgbEuclidean).unwrap();
        let near = srgb_euclidean(crate::color::Rgb(255, 0, 0), crate::color::Rgb(254, 1, 1));
        let far = srgb_euclidean(crate::color::Rgb(0, 0, 255), crate::color::Rgb(255, 0, 0));
        let expected = (near + (near + far) / 2.0) / 2.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_close_palettes_beat_distant_ones() {
        let anchor = palette("anchor", &["#000000", "#ffffff"]);
        let close = palette("close", &["#010101", "#fefefe"]);
        let far = palette("far", &["#ff0000", "#00ff00"]);
        for metric in [Metric::SrgbEuclidean, Metric::DeltaE2000] {
            let close_score = symmetric_score(&anchor, &close, metric).unwrap();
            let far_score = symmetric_score(&anchor, &far, metric).unwrap();
            assert!(close_score < far_score);
        }
    }

    #[test]
    fn test_score_within_metric_range() {
        let a = palette("a", &["#000000", "#ffffff", "#ff0000"]);
        let b = palette("b", &["#00ff00", "#0000ff"]);
        for metric in [Metric::SrgbEuclidean, Metric::DeltaE2000] {
            let score = symmetric_score(&a, &b, metric).unwrap();
            assert!(score >= 0.0);
            assert!(score <= metric.max_range());
        }
    }
}
