//! Error types for color parsing.

use thiserror::Error;

/// Result type alias for color parsing.
pub type ParseResult<T> = std::result::Result<T, ParseColorError>;

/// Errors raised when parsing a hex string or color name.
///
/// Numeric range problems are never errors anywhere in the workspace
/// (out-of-range components are clamped); parsing malformed text is the
/// one place a caller must handle failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input was empty (or just a `#`).
    #[error("empty color string")]
    Empty,

    /// More than six hex digits.
    #[error("hex color too long: {0} digits (expected 1-6)")]
    TooLong(usize),

    /// A `#`-prefixed string contained a non-hex character.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),

    /// Input was neither hex digits nor a recognized color name.
    #[error("unrecognized color name {0:?}")]
    UnknownName(String),
}
