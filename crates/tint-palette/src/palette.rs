//! Ramp generation: from one base color to ten.
//!
//! Light-mode layout:
//!
//! ```text
//! index:  0      1      2      3      4      5     6      7      8      9
//!         tint5  tint4  tint3  tint2  tint1  base  shade1 shade2 shade3 shade4
//! ```
//!
//! Dark mode replaces that layout with the remapped sequence from
//! [`tune_dark`]; the base color is then no longer at a fixed slot.

use std::fmt;
use std::ops::Index;

use tint_color::{Color, Hsv, from_hsv};
use tracing::trace;

use crate::config::RampConfig;
use crate::dark::tune_dark;
use crate::steps::{DARK_COLOR_COUNT, LIGHT_COLOR_COUNT};

/// Number of colors in every ramp.
pub const PALETTE_LEN: usize = 10;

/// Slot of the base color in a light ramp.
pub const BASE_INDEX: usize = LIGHT_COLOR_COUNT as usize;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A generated ramp of exactly [`PALETTE_LEN`] colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Color; PALETTE_LEN],
    dark: bool,
}

impl Palette {
    /// Generate a ramp with the Ant Design step sizes.
    ///
    /// See [`generate_palette`].
    #[must_use]
    pub fn generate(base: Color, background: Option<Color>, is_dark: bool) -> Self {
        RampConfig::ANT.generate(base, background, is_dark)
    }

    /// Whether this ramp was tuned for a dark background.
    #[inline]
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// The base color, for light ramps. Dark ramps blend every slot, so
    /// there is no base to return.
    #[must_use]
    pub const fn base(&self) -> Option<Color> {
        if self.dark {
            None
        } else {
            Some(self.colors[BASE_INDEX])
        }
    }

    /// Always [`PALETTE_LEN`].
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        PALETTE_LEN
    }

    /// Never true; present for symmetry with `len`.
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The colors in slot order.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Unwrap into the underlying array.
    #[inline]
    #[must_use]
    pub const fn into_array(self) -> [Color; PALETTE_LEN] {
        self.colors
    }

    /// Iterate the colors in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Every color as a hex string, lightest first in light mode.
    #[must_use]
    pub fn to_hex_strings(&self, include_alpha: bool) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex(include_alpha)).collect()
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::array::IntoIter<Color, PALETTE_LEN>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

impl From<Palette> for [Color; PALETTE_LEN] {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl fmt::Display for Palette {
    /// Space-separated hex colors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a ten-color ramp from `base`.
///
/// Light mode returns five tints (lightest first), `base` itself, then
/// four shades (darkest last). Dark mode (`is_dark`) remaps and blends
/// those ten colors over `background`, or over `#141414` when no
/// background is given.
///
/// # Examples
///
/// ```
/// use tint_color::Color;
/// use tint_palette::generate_palette;
///
/// let blue = Color::hex("#1677ff").unwrap();
/// let light = generate_palette(blue, None, false);
/// assert_eq!(light.base(), Some(blue));
///
/// let dark = generate_palette(blue, None, true);
/// assert_eq!(dark.len(), 10);
/// assert_eq!(dark.base(), None);
/// ```
#[must_use]
pub fn generate_palette(base: Color, background: Option<Color>, is_dark: bool) -> Palette {
    Palette::generate(base, background, is_dark)
}

impl RampConfig {
    /// Generate a ramp with these step sizes.
    ///
    /// A missing `background` falls back to
    /// [`dark_background`](Self::dark_background).
    #[must_use]
    pub fn generate(&self, base: Color, background: Option<Color>, is_dark: bool) -> Palette {
        let hsv = base.to_hsv();
        trace!(
            base = %base,
            hue = hsv.hue,
            saturation = hsv.saturation,
            value = hsv.value,
            "decomposed base color"
        );

        let mut colors = [base; PALETTE_LEN];
        let (tints, rest) = colors.split_at_mut(BASE_INDEX);
        for (slot, index) in tints.iter_mut().zip((1..=LIGHT_COLOR_COUNT).rev()) {
            *slot = self.step_color(hsv, index, true);
        }
        for (slot, index) in rest[1..].iter_mut().zip(1..=DARK_COLOR_COUNT) {
            *slot = self.step_color(hsv, index, false);
        }

        if !is_dark {
            return Palette { colors, dark: false };
        }

        let background = background.unwrap_or(self.dark_background);
        Palette {
            colors: tune_dark(&colors, background),
            dark: true,
        }
    }

    fn step_color(&self, base: Hsv, index: u32, light: bool) -> Color {
        let hue = self.hue(base.hue, index, light);
        let saturation = self.saturation(base.saturation, base.hue, index, light);
        let value = self.value(base.value, index, light);
        let color = from_hsv(hue, saturation, value);
        trace!(index, light, hue, saturation, value, color = %color, "derived ramp step");
        color
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
