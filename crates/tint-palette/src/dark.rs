//! Dark-mode tuning.
//!
//! A light ramp placed on a dark background reads backwards: the pale
//! tints glare and the deep shades vanish. Dark mode reverses the ramp and
//! blends every slot into the background, so slot 0 is a barely tinted
//! background and slot 9 a soft tint.

use tint_color::{Color, mix};
use tracing::debug;

use crate::palette::PALETTE_LEN;

/// Background used when a dark palette is requested without one (`#141414`).
pub const DEFAULT_DARK_BACKGROUND: Color = Color::rgb(0x14, 0x14, 0x14);

/// For each dark slot, the light-ramp slot it is built from.
pub const DARK_COLOR_INDICES: [usize; PALETTE_LEN] = [7, 6, 5, 5, 5, 5, 4, 3, 2, 1];

/// For each dark slot, the weight of the ramp color against the background.
pub const DARK_COLOR_OPACITIES: [f64; PALETTE_LEN] =
    [0.15, 0.25, 0.30, 0.45, 0.65, 0.85, 0.90, 0.95, 0.97, 0.98];

/// Remap a light ramp for a dark background.
///
/// Slot `k` of the result is `mix(ramp[DARK_COLOR_INDICES[k]], background,
/// DARK_COLOR_OPACITIES[k])`.
#[must_use]
pub fn tune_dark(ramp: &[Color; PALETTE_LEN], background: Color) -> [Color; PALETTE_LEN] {
    debug!(background = %background, "tuning ramp for dark background");
    std::array::from_fn(|k| mix(ramp[DARK_COLOR_INDICES[k]], background, DARK_COLOR_OPACITIES[k]))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
