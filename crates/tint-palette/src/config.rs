//! Ramp configuration: the tunable step sizes as a plain value.
//!
//! There is no global state: every generator call reads its step sizes
//! from a `RampConfig`. [`RampConfig::ANT`] holds the values that reproduce
//! the Ant Design ramps and is what the free functions use.

use tint_color::Color;

use crate::dark::DEFAULT_DARK_BACKGROUND;
use crate::steps::{
    BRIGHTNESS_STEP_DARK, BRIGHTNESS_STEP_LIGHT, HUE_STEP, SATURATION_STEP, SATURATION_STEP_DARK,
};

/// Step sizes and dark-mode background for ramp generation.
///
/// The step methods ([`hue`](Self::hue), [`saturation`](Self::saturation),
/// [`value`](Self::value)) live in [`steps`](crate::steps) and
/// [`generate`](Self::generate) in [`palette`](crate::palette).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RampConfig {
    /// Hue shift per step, in degrees.
    pub hue_step: f64,
    /// Saturation removed per tint step; also the darkest shade's boost.
    pub saturation_step: f64,
    /// Saturation added per shade step.
    pub saturation_step_dark: f64,
    /// Value added per tint step.
    pub brightness_step_light: f64,
    /// Value removed per shade step.
    pub brightness_step_dark: f64,
    /// Background for dark-mode tuning when the caller passes none.
    pub dark_background: Color,
}

impl RampConfig {
    /// The Ant Design ramp.
    pub const ANT: Self = Self {
        hue_step: HUE_STEP,
        saturation_step: SATURATION_STEP,
        saturation_step_dark: SATURATION_STEP_DARK,
        brightness_step_light: BRIGHTNESS_STEP_LIGHT,
        brightness_step_dark: BRIGHTNESS_STEP_DARK,
        dark_background: DEFAULT_DARK_BACKGROUND,
    };

    /// Same steps with a different default dark background.
    #[must_use]
    pub const fn with_dark_background(self, dark_background: Color) -> Self {
        Self {
            dark_background,
            ..self
        }
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self::ANT
    }
}
