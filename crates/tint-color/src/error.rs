// SPDX-License-Identifier: MIT
//
// Errors for color parsing. Parsing a hex string is the only fallible
// operation in the crate; every numeric conversion is total.

use std::fmt;

/// Why a hex string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexErrorReason {
    /// Digit count (after an optional `#`) was not 3, 4, 6, or 8.
    Length(usize),

    /// A character that is not a hexadecimal digit.
    Digit(char),
}

impl fmt::Display for HexErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "expected 3, 4, 6, or 8 hex digits, found {len}"),
            Self::Digit(c) => write!(f, "{c:?} is not a hex digit"),
        }
    }
}

/// Error produced by [`parse_hex`](crate::hex::parse_hex).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input is not a hex color in one of the accepted shapes.
    #[error("invalid hex color format {input:?}: {reason}")]
    InvalidFormat {
        /// The string as given by the caller.
        input: String,
        /// What was wrong with it.
        reason: HexErrorReason,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: HexErrorReason) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
            reason,
        }
    }

    /// The reason the input was rejected.
    #[must_use]
    pub const fn reason(&self) -> HexErrorReason {
        match self {
            Self::InvalidFormat { reason, .. } => *reason,
        }
    }
}
