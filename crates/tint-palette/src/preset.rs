//! Named preset base colors, the Ant Design primaries.
//!
//! Each preset is only a base color; its ramp is generated on demand with
//! [`RampConfig::ANT`](crate::RampConfig::ANT).

use std::fmt;
use std::str::FromStr;

use tint_color::Color;

use crate::palette::{Palette, generate_palette};

/// One of the thirteen Ant Design base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PresetColor {
    Red,
    Volcano,
    Orange,
    Gold,
    Yellow,
    Lime,
    Green,
    Cyan,
    Blue,
    GeekBlue,
    Purple,
    Magenta,
    Grey,
}

impl PresetColor {
    /// Every preset, in color-wheel order with grey last.
    pub const ALL: [Self; 13] = [
        Self::Red,
        Self::Volcano,
        Self::Orange,
        Self::Gold,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::GeekBlue,
        Self::Purple,
        Self::Magenta,
        Self::Grey,
    ];

    /// Lowercase name, as used by [`from_name`](Self::from_name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Volcano => "volcano",
            Self::Orange => "orange",
            Self::Gold => "gold",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::GeekBlue => "geekblue",
            Self::Purple => "purple",
            Self::Magenta => "magenta",
            Self::Grey => "grey",
        }
    }

    /// The base color (slot 5 of the light ramp).
    #[must_use]
    pub const fn base(self) -> Color {
        match self {
            Self::Red => Color::rgb(0xf5, 0x22, 0x2d),
            Self::Volcano => Color::rgb(0xfa, 0x54, 0x1c),
            Self::Orange => Color::rgb(0xfa, 0x8c, 0x16),
            Self::Gold => Color::rgb(0xfa, 0xad, 0x14),
            Self::Yellow => Color::rgb(0xfa, 0xdb, 0x14),
            Self::Lime => Color::rgb(0xa0, 0xd9, 0x11),
            Self::Green => Color::rgb(0x52, 0xc4, 0x1a),
            Self::Cyan => Color::rgb(0x13, 0xc2, 0xc2),
            Self::Blue => Color::rgb(0x16, 0x77, 0xff),
            Self::GeekBlue => Color::rgb(0x2f, 0x54, 0xeb),
            Self::Purple => Color::rgb(0x72, 0x2e, 0xd1),
            Self::Magenta => Color::rgb(0xeb, 0x2f, 0x96),
            Self::Grey => Color::rgb(0x66, 0x66, 0x66),
        }
    }

    /// The preset's ramp; dark ramps use the default `#141414` background.
    #[must_use]
    pub fn palette(self, is_dark: bool) -> Palette {
        generate_palette(self.base(), None, is_dark)
    }

    /// Look up a preset by name, ignoring case. `gray` is accepted for grey.
    ///
    /// Returns `None` if the name is not recognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("gray") {
            return Some(Self::Grey);
        }
        Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PresetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset color {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for PresetColor {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
