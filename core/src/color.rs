use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAMED_COLORS: [(&str, Color); 12] = [
    ("black", Color::from_rgb(0x00, 0x00, 0x00)),
    ("white", Color::from_rgb(0xff, 0xff, 0xff)),
    ("red", Color::from_rgb(0xff, 0x00, 0x00)),
    ("green", Color::from_rgb(0x00, 0x80, 0x00)),
    ("blue", Color::from_rgb(0x00, 0x00, 0xff)),
    ("purple", Color::from_rgb(0x80, 0x00, 0x80)),
    ("orange", Color::from_rgb(0xff, 0xa5, 0x00)),
    ("pink", Color::from_rgb(0xff, 0xc0, 0xcb)),
    ("yellow", Color::from_rgb(0xff, 0xff, 0x00)),
    ("gray", Color::from_rgb(0x80, 0x80, 0x80)),
    ("cyan", Color::from_rgb(0x00, 0xff, 0xff)),
    ("magenta", Color::from_rgb(0xff, 0x00, 0xff)),
];

/// Opaque RGB colour used to fill renderable squares.
///
/// Colours parse from the CSS keywords the garden uses (`"green"`, `"pink"`, ...)
/// or from `#rrggbb` hex notation, and serialize back to hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Creates a new colour from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the colour.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the colour.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the colour.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::MalformedHex(trimmed.to_owned()));
        }

        let name = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| ColorParseError::UnknownName(trimmed.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Reasons a colour string could not be interpreted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The value is not one of the supported colour keywords.
    #[error("unknown colour name `{0}`")]
    UnknownName(String),
    /// The value starts with `#` but is not six hexadecimal digits.
    #[error("malformed hex colour `{0}`, expected #rrggbb")]
    MalformedHex(String),
}
