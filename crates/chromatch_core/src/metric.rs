//! Distance metrics over colors and score normalization.
//!
//! Two metrics are supported: plain Euclidean distance in 8-bit sRGB space
//! (cheap, perceptually naive) and CIEDE2000 in Lab space (the perceptual
//! reference). Raw distances map to a similarity index in [0, 1] by linear
//! rescaling against the metric's maximum meaningful range.

use crate::color::{Lab, Rgb};

/// Largest possible sRGB Euclidean distance, `sqrt(3 * 255^2)`,
/// reached between black and white.
pub const SRGB_MAX_DISTANCE: f64 = 441.6729559300637;

/// 25^7, shared by the G factor and the rotation term of CIEDE2000.
const POW25_7: f64 = 6_103_515_625.0;

/// Which distance metric to score palettes with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Euclidean distance over 8-bit sRGB channels.
    SrgbEuclidean,
    /// CIEDE2000 over CIE Lab.
    DeltaE2000,
}

impl Metric {
    /// Upper bound used to normalize raw scores for this metric.
    ///
    /// For sRGB this is the exact diagonal of the color cube. For CIEDE2000
    /// the formula has no hard ceiling; 100.0 is the conventional bound and
    /// anything beyond it clamps to zero similarity.
    pub const fn max_range(self) -> f64 {
        match self {
            Metric::SrgbEuclidean => SRGB_MAX_DISTANCE,
            Metric::DeltaE2000 => 100.0,
        }
    }

    /// Maps a raw distance to a similarity index in [0, 1].
    ///
    /// Zero distance maps to 1.0, the metric's maximum range to 0.0, and
    /// out-of-range values are clamped so the index never leaves [0, 1].
    pub fn similarity_index(self, raw: f64) -> f64 {
        (1.0 - raw / self.max_range()).clamp(0.0, 1.0)
    }
}

/// Euclidean distance between two colors in 8-bit sRGB space.
pub fn srgb_euclidean(first: Rgb, second: Rgb) -> f64 {
    let dr = f64::from(first.r()) - f64::from(second.r());
    let dg = f64::from(first.g()) - f64::from(second.g());
    let db = f64::from(first.b()) - f64::from(second.b());
    (dr * dr + dg * dg + db * db).sqrt()
}

/// CIEDE2000 color difference (ΔE00) between two Lab colors.
///
/// Implements the full formula from CIE TR 142-2001: the G chroma
/// adjustment, the T hue weighting factor, and the blue-region rotation
/// term RT. Symmetric in its arguments.
pub fn ciede2000(first: Lab, second: Lab) -> f64 {
    // G factor: desaturates a* when both colors sit near the neutral axis.
    let c_mean = (first.a.hypot(first.b) + second.a.hypot(second.b)) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let ap1 = first.a * (1.0 + g);
    let ap2 = second.a * (1.0 + g);
    let cp1 = ap1.hypot(first.b);
    let cp2 = ap2.hypot(second.b);
    let hp1 = hue_angle(ap1, first.b);
    let hp2 = hue_angle(ap2, second.b);

    let dl = second.l - first.l;
    let dc = cp2 - cp1;

    // Hue difference, taken the short way around the circle. Undefined when
    // either chroma is zero, in which case it contributes nothing.
    let dh = if cp1 * cp2 == 0.0 {
        0.0
    } else {
        let raw = hp2 - hp1;
        if raw.abs() <= 180.0 {
            raw
        } else if raw > 180.0 {
            raw - 360.0
        } else {
            raw + 360.0
        }
    };
    let dh_term = 2.0 * (cp1 * cp2).sqrt() * (dh / 2.0).to_radians().sin();

    let l_mean = (first.l + second.l) / 2.0;
    let cp_mean = (cp1 + cp2) / 2.0;
    let hp_mean = if cp1 * cp2 == 0.0 {
        hp1 + hp2
    } else if (hp1 - hp2).abs() <= 180.0 {
        (hp1 + hp2) / 2.0
    } else if hp1 + hp2 < 360.0 {
        (hp1 + hp2 + 360.0) / 2.0
    } else {
        (hp1 + hp2 - 360.0) / 2.0
    };

    // T hue weighting factor.
    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let l_dev = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_dev / (20.0 + l_dev).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    // Rotation term, active for high-chroma colors near h' = 275 deg.
    let d_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let rc = 2.0 * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh_term / sh;
    (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
}

/// Hue angle of (a', b) in degrees, in [0, 360).
fn hue_angle(ap: f64, b: f64) -> f64 {
    if ap == 0.0 && b == 0.0 {
        return 0.0;
    }
    let deg = b.atan2(ap).to_degrees();
    if deg < 0.0 {
        deg + 360.0
    } else {
        deg
    }
}
