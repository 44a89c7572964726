// SPDX-License-Identifier: MIT
//
// tint-color — the color value type behind tint-ramp.
//
// Everything here works on plain 8-bit RGBA values. The palette engine
// needs exactly three things from a color: read it from a hex string,
// decompose it into HSV and back, and composite it over a background.
// Each of those lives in its own module; `Color` exposes them as methods
// so callers rarely need the free functions.
//
//   hex string ⇄ Color ⇄ HSV
//                  │
//                  └─ mix(Color, Color, ratio)

pub mod color;
pub mod error;
pub mod hex;
pub mod hsv;
pub mod mix;
pub mod round;

pub use color::Color;
pub use error::{ColorError, HexErrorReason};
pub use hex::{format_hex, parse_hex};
pub use hsv::{Hsv, from_hsv, to_hsv};
pub use mix::mix;
