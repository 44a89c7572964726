//! # tint-palette — Ant Design style color ramps
//!
//! Derives a ten-color tint/shade ramp from one base color. Five tints get
//! lighter and less saturated, four shades get darker and more saturated,
//! and hue drifts a few degrees along the way so the ends of the ramp stay
//! perceptually related to the base.
//!
//! # Architecture
//!
//! ```text
//! base Color
//!     │
//!     ▼
//! to_hsv (tint-color):  real-valued hue, saturation, value
//!     │
//!     ▼
//! steps.rs:   hue / saturation / value per step (5 tints, 4 shades)
//!     │
//!     ▼
//! from_hsv (tint-color):  back to 8-bit RGB
//!     │
//!     ▼
//! palette.rs: [tint5 … tint1, base, shade1 … shade4]
//!     │
//!     ▼ (dark mode only)
//! dark.rs:    remap + blend each slot over the background
//! ```
//!
//! Step sizes live in [`RampConfig`]; [`RampConfig::ANT`] reproduces the
//! published Ant Design ramps and backs the free functions.
//!
//! ```
//! use tint_color::Color;
//! use tint_palette::generate_palette;
//!
//! let red = Color::hex("#f5222d").unwrap();
//! let ramp = generate_palette(red, None, false);
//! assert_eq!(ramp[0].to_hex(false), "#FFF1F0");
//! assert_eq!(ramp[9].to_hex(false), "#5C0011");
//! ```

pub mod config;
pub mod dark;
pub mod palette;
pub mod preset;
pub mod steps;

pub use config::RampConfig;
pub use dark::{DEFAULT_DARK_BACKGROUND, tune_dark};
pub use palette::{BASE_INDEX, PALETTE_LEN, Palette, generate_palette};
pub use preset::{PresetColor, UnknownPreset};
pub use steps::{hue_step, saturation_step, value_step};
