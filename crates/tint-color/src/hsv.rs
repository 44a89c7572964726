// SPDX-License-Identifier: MIT
//
// RGB ⇄ HSV conversion.
//
// Hue is kept as a real number end to end; the ramp engine rounds it only
// where it needs a whole degree. `Hsv::rounded` produces the display form
// (whole degrees, four decimals).

// h, s, v, p, q, t are the textbook names for the sector decomposition.
#![allow(clippy::many_single_char_names)]

use crate::color::Color;
use crate::round::{normalize_hue, round_to};

/// Hue / saturation / value triple.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue angle in degrees, [0, 360).
    pub hue: f64,
    /// Saturation, [0, 1].
    pub saturation: f64,
    /// Value (brightness), [0, 1].
    pub value: f64,
}

impl Hsv {
    /// Create a triple from its components as given, without normalizing.
    #[inline]
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Display form: hue to the nearest whole degree, saturation and value
    /// to four decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            hue: normalize_hue(self.hue.round()),
            saturation: round_to(self.saturation, 4),
            value: round_to(self.value, 4),
        }
    }

    /// Convert back to an opaque [`Color`].
    #[must_use]
    pub fn to_color(self) -> Color {
        from_hsv(self.hue, self.saturation, self.value)
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        to_hsv(color)
    }
}

/// Decompose a color into hue, saturation and value. Alpha is ignored.
///
/// Uses the max/min channel method: hue depends on which channel is the
/// maximum, saturation is `(max - min) / max`, value is `max`. Grays have
/// hue 0 and black has saturation 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn to_hsv(color: Color) -> Hsv {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue: normalize_hue(hue),
        saturation,
        value: max,
    }
}

/// Build an opaque color from hue (degrees), saturation and value.
///
/// Hue may be any real number; it selects one of six 60° sectors after
/// wrapping. Each channel is rounded to the nearest 8-bit step and clamped,
/// so out-of-range saturation or value never overflow.
///
/// # Examples
///
/// ```
/// use tint_color::{Color, from_hsv};
///
/// assert_eq!(from_hsv(0.0, 1.0, 1.0), Color::rgb(255, 0, 0));
/// assert_eq!(from_hsv(201.0, 0.5, 0.52), Color::rgb(66, 109, 133));
/// ```
#[must_use]
#[allow(clippy::suboptimal_flops, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Color {
    let h = hue / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let v = value;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match sector.rem_euclid(6.0) as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::rgb(to_channel(r), to_channel(g), to_channel(b))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
