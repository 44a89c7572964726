// SPDX-License-Identifier: MIT
//
// The color value type.
//
// A `Color` is four 8-bit channels and nothing else: no color space tag,
// no cached HSV. HSV is recomputed on demand. The type is `Copy + Eq +
// Hash`, so palettes compare exactly.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hex::{format_hex, parse_hex};
use crate::hsv::{Hsv, from_hsv, to_hsv};
use crate::mix::mix;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit red, green, blue, and alpha channels.
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let red = Color::hex("#f5222d").unwrap();
/// assert_eq!(red, Color::rgb(0xf5, 0x22, 0x2d));
///
/// // Composite 85% red over a dark background.
/// let tuned = red.mix(Color::rgb(0x14, 0x14, 0x14), 0.85);
/// assert_eq!(tuned.to_hex(false), "#D31F29");
///
/// // HSV round trip is exact for most colors.
/// assert_eq!(Color::from_hsv(red.to_hsv()), red);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel: 0 is fully transparent, 255 fully opaque.
    pub a: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from all four channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a hex string. See [`parse_hex`] for the accepted shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] if the string is not a hex color.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    /// Build an opaque color from hue (degrees), saturation and value.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        from_hsv(hsv.hue, hsv.saturation, hsv.value)
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether alpha is 255.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Channels as an `(r, g, b, a)` tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgba(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when `include_alpha` is set.
    #[must_use]
    pub fn to_hex(self, include_alpha: bool) -> String {
        format_hex(self, include_alpha)
    }

    /// Decompose into hue, saturation and value at full precision.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        to_hsv(self)
    }

    /// Blend with `other`; `ratio` is the weight of `self`.
    ///
    /// See [`mix`](crate::mix::mix) for the exact channel formula.
    #[must_use]
    pub fn mix(self, other: Self, ratio: f64) -> Self {
        mix(self, other, ratio)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    /// Hex form; alpha is included only when the color is translucent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(*self, !self.is_opaque()))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    /// Channels in `[r, g, b, a]` order.
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Colors travel as `#AARRGGBB` strings so that config files stay readable
// and alpha survives the round trip.

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_hex(*self, true))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::rgb(1, 2, 3);
        assert!(c.is_opaque());
        assert_eq!(c.to_rgba(), (1, 2, 3, 255));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::rgb(10, 20, 30).with_alpha(0);
        assert_eq!(c, Color::new(10, 20, 30, 0));
        assert!(!c.is_opaque());
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn display_hides_alpha_when_opaque() {
        assert_eq!(Color::rgb(0xf5, 0x22, 0x2d).to_string(), "#F5222D");
        assert_eq!(Color::new(0xf5, 0x22, 0x2d, 0x80).to_string(), "#80F5222D");
    }

    #[test]
    fn debug_lists_channels() {
        assert_eq!(format!("{:?}", Color::new(1, 2, 3, 4)), "Color(1, 2, 3, 4)");
    }

    #[test]
    fn from_str_parses_hex() {
        let c: Color = "#141414".parse().unwrap();
        assert_eq!(c, Color::rgb(0x14, 0x14, 0x14));
        assert!("#14141".parse::<Color>().is_err());
    }

    #[test]
    fn tuple_and_array_conversions() {
        assert_eq!(Color::from((1, 2, 3)), Color::rgb(1, 2, 3));
        assert_eq!(Color::from([1, 2, 3, 4]), Color::new(1, 2, 3, 4));
    }

    #[test]
    fn hsv_methods_round_trip() {
        let c = Color::hex("406A80").unwrap();
        assert_eq!(Color::from_hsv(c.to_hsv()), c);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_with_alpha() {
        let c = Color::new(0x12, 0x34, 0x56, 0x78);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#78123456\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>("\"#zzz\"").is_err());
    }
}
