//! Named color palettes.
//!
//! A [`Palette`] owns an ordered, deduplicated list of sRGB colors plus a
//! lazily computed Lab form of the same list. The Lab slice is built once
//! on first use and kept in the same order as the sRGB slice, so index `i`
//! always refers to the same underlying color in both.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::color::{Lab, Rgb};
use crate::error::{ChromatchError, Result};

/// Set of colors that remembers insertion order and keeps only the first
/// occurrence of each color.
#[derive(Debug, Default)]
pub struct OrderedRgbSet {
    seen: HashSet<Rgb>,
    order: Vec<Rgb>,
}

impl OrderedRgbSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a color, returning `false` if it was already present.
    pub fn insert(&mut self, color: Rgb) -> bool {
        if self.seen.insert(color) {
            self.order.push(color);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<Rgb> {
        self.order
    }
}

impl FromIterator<Rgb> for OrderedRgbSet {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut set = Self::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

/// A named theme palette with its source URL and colors.
#[derive(Debug, Clone)]
pub struct Palette {
    name: String,
    url: String,
    colors: Vec<Rgb>,
    labs: OnceLock<Vec<Lab>>,
}

impl Palette {
    /// Builds a palette from RGB colors, deduplicating while preserving
    /// first-occurrence order.
    ///
    /// Returns [`ChromatchError::EmptyPalette`] if no colors remain.
    pub fn new(name: impl Into<String>, url: impl Into<String>, colors: Vec<Rgb>) -> Result<Self> {
        let name = name.into();
        let colors = colors.into_iter().collect::<OrderedRgbSet>().into_vec();
        if colors.is_empty() {
            return Err(ChromatchError::EmptyPalette(name));
        }
        Ok(Palette {
            name,
            url: url.into(),
            colors,
            labs: OnceLock::new(),
        })
    }

    /// Builds a palette from `#RRGGBB` literals.
    ///
    /// Entries that fail to parse are dropped rather than replaced with a
    /// sentinel; if nothing parses, the palette is rejected as empty.
    pub fn from_hex_colors<I, S>(
        name: impl Into<String>,
        url: impl Into<String>,
        hex: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let mut colors = Vec::new();
        let mut dropped = 0usize;
        for entry in hex {
            match Rgb::parse_hex(entry.as_ref()) {
                Ok(color) => colors.push(color),
                Err(_) => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::debug!(palette = %name, dropped, "dropped malformed hex entries");
        }
        Self::new(name, url, colors)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Colors in insertion order, duplicates removed.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Lab form of [`colors`](Self::colors), same order and length.
    /// Computed on first call, cached afterwards.
    pub fn labs(&self) -> &[Lab] {
        self.labs
            .get_or_init(|| self.colors.iter().map(|c| c.to_lab()).collect())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_set_keeps_first_occurrence() {
        let mut set = OrderedRgbSet::new();
        assert!(set.insert(Rgb(1, 2, 3)));
        assert!(set.insert(Rgb(9, 9, 9)));
        assert!(!set.insert(Rgb(1, 2, 3)));
        assert_eq!(set.into_vec(), vec![Rgb(1, 2, 3), Rgb(9, 9, 9)]);
    }

    #[test]
    fn test_new_dedups_preserving_order() {
        let palette = Palette::new(
            "dup",
            "",
            vec![Rgb(0, 0, 0), Rgb(255, 0, 0), Rgb(0, 0, 0), Rgb(0, 255, 0)],
        )
        .unwrap();
        assert_eq!(
            palette.colors(),
            &[Rgb(0, 0, 0), Rgb(255, 0, 0), Rgb(0, 255, 0)]
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = Palette::new("void", "", vec![]).unwrap_err();
        assert!(matches!(err, ChromatchError::EmptyPalette(name) if name == "void"));
    }

    #[test]
    fn test_from_hex_drops_malformed_entries() {
        let palette =
            Palette::from_hex_colors("t", "", ["#ffffff", "nope", "#00FF00", "#123"]).unwrap();
        assert_eq!(palette.colors(), &[Rgb(255, 255, 255), Rgb(0, 255, 0)]);
    }

    #[test]
    fn test_from_hex_all_malformed_is_empty() {
        let err = Palette::from_hex_colors("bad", "", ["zzz", "#12"]).unwrap_err();
        assert!(matches!(err, ChromatchError::EmptyPalette(_)));
    }

    #[test]
    fn test_from_hex_dedups_case_variants() {
        let palette = Palette::from_hex_colors("t", "", ["#AABBCC", "#aabbcc"]).unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_labs_parallel_to_colors() {
        let palette = Palette::from_hex_colors("t", "", ["#000000", "#ff0000", "#1e90ff"]).unwrap();
        let labs = palette.labs();
        assert_eq!(labs.len(), palette.len());
        for (color, lab) in palette.colors().iter().zip(labs) {
            assert_eq!(color.to_lab(), *lab);
        }
    }

    #[test]
    fn test_labs_cached_once() {
        let palette = Palette::from_hex_colors("t", "", ["#336699"]).unwrap();
        let first = palette.labs().as_ptr();
        let second = palette.labs().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_metadata_accessors() {
        let palette =
            Palette::from_hex_colors("nord", "https://example.com/nord", ["#2e3440"]).unwrap();
        assert_eq!(palette.name(), "nord");
        assert_eq!(palette.url(), "https://example.com/nord");
        assert!(!palette.is_empty());
    }
}
