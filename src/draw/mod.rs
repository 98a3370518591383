//! Visual value types shared by tools: colors and stroke dash patterns.

pub mod color;
pub mod line_style;

pub use color::Color;
pub use line_style::LineStyle;
