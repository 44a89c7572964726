// SPDX-License-Identifier: MIT
//
// Hex string codec.
//
// Accepted shapes, each with or without a leading `#`:
//
//   RGB        → expanded to RRGGBB, alpha = FF
//   ARGB       → expanded to AARRGGBB
//   RRGGBB     → alpha = FF
//   AARRGGBB
//
// Alpha leads when present. Output is always the long, uppercase form.

use crate::color::Color;
use crate::error::{ColorError, HexErrorReason};

/// Parse a hex color string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when the digit count is not 3, 4,
/// 6, or 8, or when any character is not a hex digit.
///
/// # Examples
///
/// ```
/// use tint_color::{Color, parse_hex};
///
/// assert_eq!(parse_hex("F00").unwrap(), Color::rgb(255, 0, 0));
/// assert_eq!(parse_hex("#0F00").unwrap(), Color::new(255, 0, 0, 0));
/// assert!(parse_hex("#12345").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let len = digits.chars().count();
    if !matches!(len, 3 | 4 | 6 | 8) {
        return Err(ColorError::invalid(input, HexErrorReason::Length(len)));
    }

    let mut nibbles = [0u8; 8];
    for (slot, c) in nibbles.iter_mut().zip(digits.chars()) {
        *slot = hex_digit(c).ok_or_else(|| ColorError::invalid(input, HexErrorReason::Digit(c)))?;
    }

    // Shorthand repeats each digit: "A" → 0xAA.
    let shorthand = len <= 4;
    let channels = if len % 4 == 0 { 4 } else { 3 };
    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().take(channels).enumerate() {
        let (hi, lo) = if shorthand {
            (nibbles[i], nibbles[i])
        } else {
            (nibbles[2 * i], nibbles[2 * i + 1])
        };
        *byte = (hi << 4) | lo;
    }

    Ok(if channels == 4 {
        Color::new(bytes[1], bytes[2], bytes[3], bytes[0])
    } else {
        Color::rgb(bytes[0], bytes[1], bytes[2])
    })
}

/// Format a color as `#RRGGBB`, or `#AARRGGBB` when `include_alpha` is set.
///
/// Digits are uppercase and never compressed to shorthand.
#[must_use]
pub fn format_hex(color: Color, include_alpha: bool) -> String {
    let Color { r, g, b, a } = color;
    if include_alpha {
        format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

#[inline]
fn hex_digit(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
