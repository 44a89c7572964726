//! # tint-ramp — 10-step color ramps from one base color
//!
//! Public face of the workspace. Re-exports the color value type from
//! [`tint_color`] and the ramp engine from [`tint_palette`] so callers
//! need only one dependency.
//!
//! | Crate          | Provides                                             |
//! |----------------|------------------------------------------------------|
//! | `tint-color`   | `Color`, hex parsing/formatting, `mix`, HSV          |
//! | `tint-palette` | `generate_palette`, step functions, dark tuning, presets |
//!
//! ```
//! use tint_ramp::{Color, PresetColor, generate_palette};
//!
//! let base = Color::hex("#1677ff").unwrap();
//! let ramp = generate_palette(base, None, false);
//! assert_eq!(ramp, PresetColor::Blue.palette(false));
//! assert_eq!(ramp.to_string().split(' ').count(), 10);
//! ```
//!
//! Enable the `serde` feature to serialize colors (as `#AARRGGBB`),
//! HSV triples, ramp configs and preset names.

pub use tint_color::{
    Color, ColorError, HexErrorReason, Hsv, format_hex, from_hsv, mix, parse_hex, to_hsv,
};
pub use tint_palette::{
    BASE_INDEX, DEFAULT_DARK_BACKGROUND, PALETTE_LEN, Palette, PresetColor, RampConfig,
    UnknownPreset, generate_palette, hue_step, saturation_step, tune_dark, value_step,
};
