//! 8-bit RGB color type, derived-color helpers and predefined color constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a color from its hex form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("color '{input}' must have exactly 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    #[error("color '{input}' contains a character that is not a hex digit")]
    InvalidDigit { input: String },
}

/// Represents an opaque RGB color with one byte per channel.
///
/// Colors are values: every transform returns a new color and leaves the
/// receiver untouched. The serialized form is six lowercase hex digits
/// (`rrggbb`), prefixed with `#` when displayed.
///
/// # Examples
///
/// ```
/// use paintbox::draw::Color;
/// let orange = Color::from_hex("#ff8000").unwrap();
/// assert_eq!(orange.green(), 0x80);
/// assert_eq!(orange.to_string(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from exact channel bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `rrggbb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> Result<Self, FormatError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let len = digits.chars().count();
        if len != 6 {
            return Err(FormatError::InvalidLength {
                input: input.to_string(),
                len,
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FormatError::InvalidDigit {
                input: input.to_string(),
            });
        }

        // All six bytes are ASCII hex digits, so byte slicing is on char boundaries.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| {
                FormatError::InvalidDigit {
                    input: input.to_string(),
                }
            })
        };
        Ok(Self::rgb(channel(0)?, channel(1)?, channel(2)?))
    }

    /// Builds a color from arbitrary numeric channel values.
    ///
    /// Each value is rounded to the nearest integer and clamped to 0-255.
    /// NaN encodes as 0.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(encode_channel(r), encode_channel(g), encode_channel(b))
    }

    /// Returns channel `i` (0 = red, 1 = green, 2 = blue).
    ///
    /// # Panics
    /// Panics if `i > 2`.
    pub fn channel(&self, i: usize) -> u8 {
        match i {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("color channel index {i} out of range (expected 0..=2)"),
        }
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Linearly interpolates towards `other`.
    ///
    /// `frac <= 0` returns `self`, `frac >= 1` returns `other`; anything in
    /// between blends each channel and rounds to the nearest byte.
    pub fn fade(&self, other: Color, frac: f64) -> Color {
        if frac <= 0.0 {
            return *self;
        }
        if frac >= 1.0 {
            return other;
        }
        let mix = |c1: u8, c2: u8| {
            let c1 = f64::from(c1);
            c1 + (f64::from(c2) - c1) * frac
        };
        Color::from_channels(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Scales every channel by `mult`, clamping the result.
    pub fn darker(&self, mult: f64) -> Color {
        Color::from_channels(
            f64::from(self.r) * mult,
            f64::from(self.g) * mult,
            f64::from(self.b) * mult,
        )
    }

    /// Inverts every channel.
    pub fn opposite(&self) -> Color {
        Color::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Picks a readable text color for this background: black on bright
    /// colors (channel sum above 3 * 128), white otherwise.
    pub fn contrast_text(&self) -> Color {
        let bright = u32::from(self.r) + u32::from(self.g) + u32::from(self.b);
        if bright > 3 * 128 { BLACK } else { WHITE }
    }

    /// Six lowercase hex digits without a prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as 0.0-1.0 floats, the form Cairo sources expect.
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

fn encode_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s.trim())
    }
}

impl TryFrom<String> for Color {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Pure black (`#000000`)
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Pure white (`#ffffff`)
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Predefined red (`#ff0000`)
pub const RED: Color = Color::rgb(255, 0, 0);

/// Predefined green (`#00ff00`)
pub const GREEN: Color = Color::rgb(0, 255, 0);

/// Predefined blue (`#0000ff`)
pub const BLUE: Color = Color::rgb(0, 0, 255);

/// Predefined yellow (`#ffff00`)
pub const YELLOW: Color = Color::rgb(255, 255, 0);

/// Predefined orange (`#ff8000`)
pub const ORANGE: Color = Color::rgb(255, 128, 0);

/// Mid gray (`#808080`), the default text shadow
pub const GRAY: Color = Color::rgb(128, 128, 128);
