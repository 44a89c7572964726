// SPDX-License-Identifier: MIT
//
// Rounding and angle helpers shared by the HSV converter and the ramp
// engine.
//
// Every "round to nearest" in tint-ramp sends ties away from zero. The
// published Ant Design ramps were produced that way: with ties-to-even,
// 0.7 * 255 = 178.5 becomes 178 and `#003eb3` in the blue ramp turns
// into `#003eb2`.

/// Values at or above this magnitude have no fractional digits left to
/// round, and scaling them could overflow to infinity.
const ROUND_LIMIT: f64 = 1e16;

/// Round to `digits` decimal places, ties away from zero.
///
/// Scales by `10^digits`, rounds, and scales back, so the result carries
/// the binary representation error of the scaled value.
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() || value.abs() >= ROUND_LIMIT {
        return value;
    }
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}
