//! Colors used to render notes.
//!
//! Tints are stored on notes as `#RRGGBB` strings and are never validated on
//! write. Conversion to [`Rgb`] happens at render time and falls back to
//! [`Rgb::GRAY`] for anything that is not six hex digits.

use std::fmt;

pub const DEFAULT_TINT: &str = "#BB86FC";

pub const BACKGROUND: Rgb = Rgb::new(0x12, 0x12, 0x12);
pub const SURFACE: Rgb = Rgb::new(0x1E, 0x1E, 0x1E);
pub const ACCENT: Rgb = Rgb::new(0xBB, 0x86, 0xFC);
pub const SECONDARY: Rgb = Rgb::new(0x03, 0xDA, 0xC6);

/// Tints offered by the editor, as (name, hex) pairs.
pub const TINT_CHOICES: [(&str, &str); 5] = [
    ("Purple", "#BB86FC"),
    ("Teal", "#03DAC6"),
    ("Red", "#CF6679"),
    ("Orange", "#F39C12"),
    ("Blue", "#3498DB"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Neutral 50% gray.
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional, surrounding whitespace ignored).
    /// Returns [`Rgb::GRAY`] on malformed input.
    pub fn from_hex(hex: &str) -> Rgb {
        Self::parse_hex(hex).unwrap_or(Self::GRAY)
    }

    fn parse_hex(hex: &str) -> Option<Rgb> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Rgb::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Look up a tint choice by name, case-insensitively.
pub fn tint_by_name(name: &str) -> Option<&'static str> {
    TINT_CHOICES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}
