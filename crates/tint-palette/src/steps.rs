//! Per-step hue, saturation and value adjustments.
//!
//! `index` counts steps away from the base color: 1 is the nearest tint or
//! shade, [`LIGHT_COLOR_COUNT`] the lightest tint and [`DARK_COLOR_COUNT`]
//! the darkest shade. `light` selects tints (`true`) or shades (`false`).
//!
//! The free functions use [`RampConfig::ANT`]; the methods on
//! [`RampConfig`] take the step sizes from `self`.

use tint_color::round::{normalize_hue, round_to};

use crate::config::RampConfig;

/// Hue shift per step, in degrees.
pub const HUE_STEP: f64 = 2.0;
/// Saturation removed per tint step.
pub const SATURATION_STEP: f64 = 0.16;
/// Saturation added per shade step (all but the darkest).
pub const SATURATION_STEP_DARK: f64 = 0.05;
/// Value added per tint step.
pub const BRIGHTNESS_STEP_LIGHT: f64 = 0.05;
/// Value removed per shade step.
pub const BRIGHTNESS_STEP_DARK: f64 = 0.15;

/// Number of tints before the base color.
pub const LIGHT_COLOR_COUNT: u32 = 5;
/// Number of shades after the base color.
pub const DARK_COLOR_COUNT: u32 = 4;

/// Hues in this closed range (rounded degrees) turn toward lower angles as
/// they lighten; all other hues turn toward higher angles.
const HUE_BAND: std::ops::RangeInclusive<f64> = 60.0..=240.0;
/// Ceiling for the lightest tint's saturation.
const LIGHTEST_SATURATION_CAP: f64 = 0.1;
/// Floor for every derived saturation.
const MIN_SATURATION: f64 = 0.06;

/// Hue for step `index`, using [`RampConfig::ANT`].
#[must_use]
pub fn hue_step(hue: f64, index: u32, light: bool) -> f64 {
    RampConfig::ANT.hue(hue, index, light)
}

/// Saturation for step `index`, using [`RampConfig::ANT`].
///
/// A color with hue 0 and saturation 0 (any gray) always yields 0.
#[must_use]
pub fn saturation_step(saturation: f64, hue: f64, index: u32, light: bool) -> f64 {
    RampConfig::ANT.saturation(saturation, hue, index, light)
}

/// Value for step `index`, using [`RampConfig::ANT`].
#[must_use]
pub fn value_step(value: f64, index: u32, light: bool) -> f64 {
    RampConfig::ANT.value(value, index, light)
}

impl RampConfig {
    /// Hue for step `index`.
    ///
    /// The base hue is rounded to whole degrees, shifted by
    /// `hue_step * index`, and wrapped into [0, 360).
    #[must_use]
    pub fn hue(&self, hue: f64, index: u32, light: bool) -> f64 {
        let base = hue.round();
        let shift = self.hue_step * f64::from(index);
        let shifted = if HUE_BAND.contains(&base) == light {
            base - shift
        } else {
            base + shift
        };
        normalize_hue(shifted)
    }

    /// Saturation for step `index`, rounded to two decimals.
    ///
    /// Tints lose `saturation_step` per step. Shades gain
    /// `saturation_step_dark` per step, except the darkest, which gains a
    /// single `saturation_step`. The result is capped at 1, the lightest
    /// tint at 0.1, and floored at 0.06.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn saturation(&self, saturation: f64, hue: f64, index: u32, light: bool) -> f64 {
        if hue == 0.0 && saturation == 0.0 {
            return 0.0;
        }

        let step = f64::from(index);
        let mut result = if light {
            saturation - self.saturation_step * step
        } else if index == DARK_COLOR_COUNT {
            saturation + self.saturation_step
        } else {
            saturation + self.saturation_step_dark * step
        };

        result = result.min(1.0);
        if light && index == LIGHT_COLOR_COUNT && result > LIGHTEST_SATURATION_CAP {
            result = LIGHTEST_SATURATION_CAP;
        }
        if result < MIN_SATURATION {
            result = MIN_SATURATION;
        }
        round_to(result, 2)
    }

    /// Value for step `index`, clamped to [0, 1] and rounded to two
    /// decimals.
    #[must_use]
    pub fn value(&self, value: f64, index: u32, light: bool) -> f64 {
        let step = f64::from(index);
        let result = if light {
            value + self.brightness_step_light * step
        } else {
            value - self.brightness_step_dark * step
        };
        round_to(result.clamp(0.0, 1.0), 2)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // #f5222d decomposed.
    const RED_HUE: f64 = 356.872_037_914_691_93;
    const RED_SAT: f64 = 0.861_224_489_795_918_4;
    const RED_VAL: f64 = 0.960_784_313_725_490_2;

    // #1677ff decomposed.
    const BLUE_HUE: f64 = 215.021_459_227_467_83;
    const BLUE_SAT: f64 = 0.913_725_490_196_078_4;
    const BLUE_VAL: f64 = 1.0;

    // ── hue_step ────────────────────────────────────────────────────

    #[test]
    fn hue_outside_band_rises_when_lightening() {
        let tints: Vec<f64> = (1..=5).rev().map(|i| hue_step(RED_HUE, i, true)).collect();
        assert_eq!(tints, vec![7.0, 5.0, 3.0, 1.0, 359.0]);
    }

    #[test]
    fn hue_outside_band_falls_when_darkening() {
        let shades: Vec<f64> = (1..=4).map(|i| hue_step(RED_HUE, i, false)).collect();
        assert_eq!(shades, vec![355.0, 353.0, 351.0, 349.0]);
    }

    #[test]
    fn hue_inside_band_reverses_direction() {
        let tints: Vec<f64> = (1..=5).rev().map(|i| hue_step(BLUE_HUE, i, true)).collect();
        assert_eq!(tints, vec![205.0, 207.0, 209.0, 211.0, 213.0]);
        let shades: Vec<f64> = (1..=4).map(|i| hue_step(BLUE_HUE, i, false)).collect();
        assert_eq!(shades, vec![217.0, 219.0, 221.0, 223.0]);
    }

    #[test]
    fn hue_band_edges_are_inclusive() {
        assert_eq!(hue_step(60.0, 1, true), 58.0);
        assert_eq!(hue_step(240.0, 1, true), 238.0);
        assert_eq!(hue_step(59.0, 1, true), 61.0);
        assert_eq!(hue_step(241.0, 1, true), 243.0);
        // 59.6 rounds into the band.
        assert_eq!(hue_step(59.6, 1, true), 58.0);
    }

    #[test]
    fn hue_wraps_below_zero() {
        assert_eq!(hue_step(1.0, 2, false), 357.0);
        assert_eq!(hue_step(0.0, 4, false), 352.0);
    }

    #[test]
    fn hue_rounding_up_to_360_wraps() {
        assert_eq!(hue_step(359.7, 1, true), 2.0);
        assert_eq!(hue_step(359.7, 1, false), 358.0);
    }

    // ── saturation_step ─────────────────────────────────────────────

    #[test]
    fn saturation_tints() {
        let tints: Vec<f64> = (1..=5)
            .rev()
            .map(|i| saturation_step(RED_SAT, RED_HUE, i, true))
            .collect();
        assert_eq!(tints, vec![0.06, 0.22, 0.38, 0.54, 0.7]);
    }

    #[test]
    fn saturation_shades() {
        let shades: Vec<f64> = (1..=4)
            .map(|i| saturation_step(RED_SAT, RED_HUE, i, false))
            .collect();
        assert_eq!(shades, vec![0.91, 0.96, 1.0, 1.0]);
    }

    #[test]
    fn darkest_shade_takes_one_full_step() {
        // 0.3 + 0.16, not 0.3 + 0.05 * 4.
        assert_eq!(saturation_step(0.3, 120.0, 4, false), 0.46);
        assert_eq!(saturation_step(0.3, 120.0, 3, false), 0.45);
    }

    #[test]
    fn lightest_tint_is_capped() {
        assert_eq!(saturation_step(BLUE_SAT, BLUE_HUE, 5, true), 0.1);
        // Only the lightest step is capped.
        assert_eq!(saturation_step(BLUE_SAT, BLUE_HUE, 4, true), 0.27);
    }

    #[test]
    fn saturation_floor() {
        assert_eq!(saturation_step(0.1, 30.0, 3, true), 0.06);
        assert_eq!(saturation_step(0.0, 30.0, 1, false), 0.06);
    }

    #[test]
    fn gray_stays_gray() {
        for light in [true, false] {
            for index in 1..=5 {
                assert_eq!(saturation_step(0.0, 0.0, index, light), 0.0);
            }
        }
    }

    #[test]
    fn zero_saturation_with_hue_is_not_gray() {
        assert_eq!(saturation_step(0.0, 10.0, 2, true), 0.06);
    }

    // ── value_step ──────────────────────────────────────────────────

    #[test]
    fn value_tints_cap_at_one() {
        let tints: Vec<f64> = (1..=5).rev().map(|i| value_step(RED_VAL, i, true)).collect();
        assert_eq!(tints, vec![1.0; 5]);
        assert_eq!(value_step(0.5, 2, true), 0.6);
    }

    #[test]
    fn value_shades() {
        let shades: Vec<f64> = (1..=4).map(|i| value_step(RED_VAL, i, false)).collect();
        assert_eq!(shades, vec![0.81, 0.66, 0.51, 0.36]);
        let blue: Vec<f64> = (1..=4).map(|i| value_step(BLUE_VAL, i, false)).collect();
        assert_eq!(blue, vec![0.85, 0.7, 0.55, 0.4]);
    }

    #[test]
    fn value_never_negative() {
        assert_eq!(value_step(0.2, 4, false), 0.0);
        assert_eq!(value_step(0.0, 1, false), 0.0);
    }

    // ── Custom config ───────────────────────────────────────────────

    #[test]
    fn custom_steps_are_honored() {
        let config = RampConfig {
            hue_step: 5.0,
            brightness_step_dark: 0.1,
            ..RampConfig::ANT
        };
        assert_eq!(config.hue(100.0, 2, false), 110.0);
        assert_eq!(config.value(0.9, 3, false), 0.6);
    }
}
