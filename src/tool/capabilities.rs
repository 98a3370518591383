//! Typed capability set gating which `Tool` fields are meaningful.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A single capability flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCapability {
    Color,
    Size,
    Ruler,
    Rectangle,
    Ellipse,
    Arrow,
    DoubleArrow,
    Recognizer,
    Fill,
    CoordinateSystem,
    DashLine,
    Spline,
    LineStyle,
}

impl ToolCapability {
    pub const ALL: [ToolCapability; 13] = [
        ToolCapability::Color,
        ToolCapability::Size,
        ToolCapability::Ruler,
        ToolCapability::Rectangle,
        ToolCapability::Ellipse,
        ToolCapability::Arrow,
        ToolCapability::DoubleArrow,
        ToolCapability::Recognizer,
        ToolCapability::Fill,
        ToolCapability::CoordinateSystem,
        ToolCapability::DashLine,
        ToolCapability::Spline,
        ToolCapability::LineStyle,
    ];

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ToolCapability::Color => "color",
            ToolCapability::Size => "size",
            ToolCapability::Ruler => "ruler",
            ToolCapability::Rectangle => "rectangle",
            ToolCapability::Ellipse => "ellipse",
            ToolCapability::Arrow => "arrow",
            ToolCapability::DoubleArrow => "doubleArrow",
            ToolCapability::Recognizer => "recognizer",
            ToolCapability::Fill => "fill",
            ToolCapability::CoordinateSystem => "coordinateSystem",
            ToolCapability::DashLine => "dashLine",
            ToolCapability::Spline => "spline",
            ToolCapability::LineStyle => "lineStyle",
        }
    }
}

/// Set of [`ToolCapability`] flags.
///
/// Only bits corresponding to a `ToolCapability` variant can ever be set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ToolCapabilities(u16);

impl ToolCapabilities {
    pub const NONE: ToolCapabilities = ToolCapabilities(0);

    /// Builds a set from a list of flags, usable in `const` tables.
    pub const fn of(caps: &[ToolCapability]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < caps.len() {
            bits |= caps[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, cap: ToolCapability) -> bool {
        self.0 & cap.bit() != 0
    }

    pub fn insert(&mut self, cap: ToolCapability) {
        self.0 |= cap.bit();
    }

    pub fn remove(&mut self, cap: ToolCapability) {
        self.0 &= !cap.bit();
    }

    pub fn set(&mut self, cap: ToolCapability, enabled: bool) {
        if enabled {
            self.insert(cap);
        } else {
            self.remove(cap);
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the contained flags in declaration order.
    pub fn iter(self) -> impl Iterator<Item = ToolCapability> {
        ToolCapability::ALL
            .into_iter()
            .filter(move |cap| self.contains(*cap))
    }
}

impl From<ToolCapability> for ToolCapabilities {
    fn from(cap: ToolCapability) -> Self {
        Self(cap.bit())
    }
}

impl BitOr for ToolCapabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<ToolCapability> for ToolCapabilities {
    type Output = Self;

    fn bitor(self, rhs: ToolCapability) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign<ToolCapability> for ToolCapabilities {
    fn bitor_assign(&mut self, rhs: ToolCapability) {
        self.insert(rhs);
    }
}

impl fmt::Debug for ToolCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(ToolCapability::name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_remove_are_independent() {
        let mut caps = ToolCapabilities::of(&[ToolCapability::Color, ToolCapability::Fill]);
        assert!(caps.contains(ToolCapability::Color));
        assert!(!caps.contains(ToolCapability::Size));

        caps.set(ToolCapability::Size, true);
        caps.set(ToolCapability::Color, false);
        assert!(caps.contains(ToolCapability::Size));
        assert!(caps.contains(ToolCapability::Fill));
        assert!(!caps.contains(ToolCapability::Color));
    }

    #[test]
    fn iter_follows_declaration_order() {
        let caps = ToolCapabilities::NONE | ToolCapability::LineStyle | ToolCapability::Color;
        let listed: Vec<_> = caps.iter().collect();
        assert_eq!(listed, vec![ToolCapability::Color, ToolCapability::LineStyle]);
        assert_eq!(format!("{caps:?}"), r#"{"color", "lineStyle"}"#);
    }

    #[test]
    fn empty_set() {
        assert!(ToolCapabilities::NONE.is_empty());
        assert_eq!(ToolCapabilities::default(), ToolCapabilities::NONE);
    }
}
