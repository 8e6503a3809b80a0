//! Hex-string parsing, formatting and named color constants.
//!
//! The accepted grammar follows the classic web-color shorthand: an optional
//! leading `#` and 1 to 6 hex digits, case-insensitive. Inputs shorter than
//! six digits repeat as a pattern until six characters are filled, so
//! `"FFA"` parses as `"FFAFFA"` and `"FFFA"` as `"FFFAFF"`. Alpha is always
//! 1.0 regardless of input.
//!
//! Strings that are not hex digits are looked up in the named-constant table
//! (`"yellow"`, `"orange"`, `"clear"`, ...) case-insensitively. A leading `#`
//! forces hex interpretation, so `"#grey"` is an invalid digit, not an
//! unknown name.
//!
//! ```rust
//! use chroma_core::{Color, hex};
//!
//! assert_eq!(hex::parse("#FFFFFF").unwrap(), Color::WHITE);
//! assert_eq!(hex::parse("FFA").unwrap(), hex::parse("FFAFFA").unwrap());
//! assert_eq!(hex::parse("yellow").unwrap(), Color::YELLOW);
//! assert_eq!(hex::format(Color::RED), "FF0000");
//! ```

use crate::color::Color;
use crate::error::{ParseColorError, ParseResult};
use std::str::FromStr;

/// Named constants recognized by [`parse`], with their platform-standard
/// RGBA values.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("darkgray", Color::DARK_GRAY),
    ("lightgray", Color::LIGHT_GRAY),
    ("white", Color::WHITE),
    ("gray", Color::GRAY),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("cyan", Color::CYAN),
    ("yellow", Color::YELLOW),
    ("magenta", Color::MAGENTA),
    ("orange", Color::ORANGE),
    ("purple", Color::PURPLE),
    ("brown", Color::BROWN),
    ("clear", Color::CLEAR),
];

/// Parses a hex string or named constant into a [`Color`].
///
/// See the module docs for the accepted grammar. Malformed input fails with
/// a [`ParseColorError`]; parsing never panics.
pub fn parse(code: &str) -> ParseResult<Color> {
    let stripped = code.strip_prefix('#');
    let body = stripped.unwrap_or(code);
    if body.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(c) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        if stripped.is_some() {
            return Err(ParseColorError::InvalidDigit(c));
        }
        return lookup_name(body);
    }

    if body.len() > 6 {
        return Err(ParseColorError::TooLong(body.len()));
    }
    Ok(from_digit_pattern(body))
}

/// Formats the RGB channels as a six-character uppercase hex string.
///
/// Alpha is ignored; channels are rounded to 8 bits.
pub fn format(color: Color) -> String {
    format!(
        "{:02X}{:02X}{:02X}",
        channel_byte(color.red()),
        channel_byte(color.green()),
        channel_byte(color.blue())
    )
}

#[inline]
fn channel_byte(channel: f32) -> u8 {
    (channel * 255.0).round() as u8
}

/// Expands 1-6 validated hex digits to a six-digit color by repetition.
fn from_digit_pattern(digits: &str) -> Color {
    let mut value: u32 = 0;
    for c in digits.chars().cycle().take(6) {
        // digits are pre-validated as ASCII hex
        value = (value << 4) | c.to_digit(16).unwrap_or(0);
    }
    Color::new(
        ((value >> 16) & 0xFF) as f32 / 255.0,
        ((value >> 8) & 0xFF) as f32 / 255.0,
        (value & 0xFF) as f32 / 255.0,
        1.0,
    )
}

fn lookup_name(name: &str) -> ParseResult<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
        .ok_or_else(|| ParseColorError::UnknownName(name.to_string()))
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse(s)
    }
}
