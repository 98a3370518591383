//! Packed RGB color type and the palette used for tool defaults.

use std::fmt;

/// A tool color packed as `0xRRGGBB`.
///
/// The all-ones value is reserved as [`Color::NONE`], meaning "no color": it is
/// what selection tools report when the selected elements have mixed colors.
///
/// # Examples
///
/// ```
/// use tooldeck::draw::Color;
/// let blue = Color::from_rgb(0x33, 0x33, 0xCC);
/// assert_eq!(blue, Color::new(0x3333CC));
/// assert_eq!(blue.to_string(), "#3333cc");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Sentinel for "no color" (persisted as `-1`).
    pub const NONE: Color = Color(u32::MAX);

    /// Wraps a packed `0xRRGGBB` value. Bits above the low 24 are dropped.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Builds a color from its three channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Packed value, `u32::MAX` for [`Color::NONE`].
    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Integer representation stored in the settings file.
    pub fn to_setting(self) -> i64 {
        if self.is_none() {
            -1
        } else {
            i64::from(self.0)
        }
    }

    /// Inverse of [`Color::to_setting`]; any negative value maps to [`Color::NONE`].
    pub fn from_setting(value: i64) -> Self {
        if value < 0 {
            Self::NONE
        } else {
            Self::new((value & 0x00FF_FFFF) as u32)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "#{:06x}", self.0)
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Default pen color.
pub const ROYAL_BLUE: Color = Color::new(0x3333CC);

/// Default highlighter color.
pub const YELLOW: Color = Color::new(0xFFFF00);

/// Default color of tools that do not care about color.
pub const BLACK: Color = Color::new(0x000000);

pub const WHITE: Color = Color::new(0xFFFFFF);

pub const RED: Color = Color::new(0xFF0000);
