//! Color types and the sRGB to CIE Lab conversion.
//!
//! All perceptual scoring happens in Lab (CIE 1976 L*a*b*, D65 reference
//! white), converted from 8-bit sRGB via linearization and the XYZ matrix
//! transform. Conversion is deterministic: the same input always produces
//! the same Lab triple, so converted palettes can be cached safely.

use std::fmt;

use crate::error::{ChromatchError, Result};

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn r(&self) -> u8 {
        self.0
    }

    pub fn g(&self) -> u8 {
        self.1
    }

    pub fn b(&self) -> u8 {
        self.2
    }

    /// Parses a strict `#RRGGBB` hex literal, case-insensitive.
    ///
    /// Anything else (missing `#`, wrong length, shorthand `#FFF`, alpha
    /// channels, stray whitespace) is rejected so malformed dataset entries
    /// are dropped instead of smuggled in as a sentinel color.
    pub fn parse_hex(s: &str) -> Result<Self> {
        let invalid = || ChromatchError::InvalidHex(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Converts to CIE Lab under the D65 illuminant.
    pub fn to_lab(self) -> Lab {
        let r = srgb_to_linear(f64::from(self.0) / 255.0);
        let g = srgb_to_linear(f64::from(self.1) / 255.0);
        let b = srgb_to_linear(f64::from(self.2) / 255.0);

        // sRGB (linear) to XYZ, D65.
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / D65_XN);
        let fy = lab_f(y / D65_YN);
        let fz = lab_f(z / D65_ZN);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// A color in CIE 1976 L*a*b* space.
///
/// `l` is in [0, 100] for in-gamut sRGB input; `a` and `b` are unbounded
/// and are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Lab { l, a, b }
    }
}

// D65 reference white.
const D65_XN: f64 = 0.95047;
const D65_YN: f64 = 1.0;
const D65_ZN: f64 = 1.08883;

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}
