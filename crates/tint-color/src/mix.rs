// SPDX-License-Identifier: MIT
//
// Linear RGBA blending.
//
// Not alpha compositing in linear light: a straight weighted average of
// the 8-bit channels, truncated toward zero. The dark-mode ramps depend on
// that exact arithmetic.

use crate::color::Color;

/// Blend two colors channel by channel.
///
/// `ratio` is the weight of `a` and is clamped to [0, 1] (NaN counts as 0).
/// Every channel, alpha included, becomes
/// `trunc(a * ratio + b * (1 - ratio))`.
///
/// # Examples
///
/// ```
/// use tint_color::{Color, mix};
///
/// let gray = Color::rgb(10, 10, 10);
/// assert_eq!(mix(gray, Color::BLACK, 0.5), Color::rgb(5, 5, 5));
/// assert_eq!(mix(gray, Color::BLACK, 0.3), Color::rgb(3, 3, 3));
/// ```
#[must_use]
pub fn mix(a: Color, b: Color, ratio: f64) -> Color {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let inv = 1.0 - ratio;
    Color::new(
        blend(a.r, b.r, ratio, inv),
        blend(a.g, b.g, ratio, inv),
        blend(a.b, b.b, ratio, inv),
        blend(a.a, b.a, ratio, inv),
    )
}

// Two products and a sum, in that order: a fused multiply-add rounds
// differently and can push a channel across an integer boundary.
#[inline]
#[allow(
    clippy::suboptimal_flops,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn blend(a: u8, b: u8, ratio: f64, inv: f64) -> u8 {
    (f64::from(a) * ratio + f64::from(b) * inv) as u8
}
