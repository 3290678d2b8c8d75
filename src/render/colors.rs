use std::collections::HashMap;
use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An sRGB color with 8-bit channels, written in configs as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Used when no palette slot is available.
    pub const FALLBACK: Color = Color::rgb(0x80, 0x80, 0x8C);

    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) || !(digits.len() == 6 || digits.len() == 8) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// The 12-color qualitative "Set3" scheme.
pub fn set3() -> Vec<Color> {
    vec![
        Color::rgb(0x8d, 0xd3, 0xc7),
        Color::rgb(0xff, 0xff, 0xb3),
        Color::rgb(0xbe, 0xba, 0xda),
        Color::rgb(0xfb, 0x80, 0x72),
        Color::rgb(0x80, 0xb1, 0xd3),
        Color::rgb(0xfd, 0xb4, 0x62),
        Color::rgb(0xb3, 0xde, 0x69),
        Color::rgb(0xfc, 0xcd, 0xe5),
        Color::rgb(0xd9, 0xd9, 0xd9),
        Color::rgb(0xbc, 0x80, 0xbd),
        Color::rgb(0xcc, 0xeb, 0xc5),
        Color::rgb(0xff, 0xed, 0x6f),
    ]
}

/// Maps category names to palette slots in first-seen order.
///
/// A category keeps its color for the lifetime of the assigner. When there are
/// more categories than palette entries the slots wrap around, so two
/// categories may share a color; this is intentional reuse rather than an error.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Vec<Color>,
    slots: HashMap<CompactString, usize>,
}

impl ColorAssigner {
    pub fn new(palette: Vec<Color>) -> Self {
        Self {
            palette,
            slots: HashMap::new(),
        }
    }

    /// Color for `category`, assigning the next slot on first sight.
    pub fn color_of(&mut self, category: &str) -> Color {
        let next = self.slots.len();
        let slot = *self
            .slots
            .entry(CompactString::new(category))
            .or_insert(next);
        self.slot_color(slot)
    }

    /// Number of distinct categories seen so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_color(&self, slot: usize) -> Color {
        if self.palette.is_empty() {
            return Color::FALLBACK;
        }
        self.palette[slot % self.palette.len()]
    }
}
