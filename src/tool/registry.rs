//! Canonical tool set with factory defaults.

use super::capabilities::{ToolCapabilities, ToolCapability as Cap};
use super::enums::ToolKind;
use super::types::Tool;
use crate::draw::color::{BLACK, ROYAL_BLUE, YELLOW};

const PEN_THICKNESS: [f64; 5] = [0.42, 0.85, 1.41, 2.26, 5.67];
const ERASER_THICKNESS: [f64; 5] = [1.0, 2.83, 8.50, 12.0, 18.0];
const HIGHLIGHTER_THICKNESS: [f64; 5] = [1.0, 2.83, 8.50, 19.84, 30.0];

const HIGHLIGHTER_CAPS: ToolCapabilities = ToolCapabilities::of(&[
    Cap::Color,
    Cap::Size,
    Cap::Ruler,
    Cap::Rectangle,
    Cap::Ellipse,
    Cap::Arrow,
    Cap::DoubleArrow,
    Cap::Spline,
    Cap::Recognizer,
    Cap::Fill,
]);

const PEN_CAPS: ToolCapabilities = ToolCapabilities::of(&[
    Cap::Color,
    Cap::Size,
    Cap::Ruler,
    Cap::Rectangle,
    Cap::Ellipse,
    Cap::Arrow,
    Cap::DoubleArrow,
    Cap::Spline,
    Cap::Recognizer,
    Cap::Fill,
    Cap::DashLine,
    Cap::LineStyle,
]);

const PDF_SELECT_CAPS: ToolCapabilities = ToolCapabilities::of(&[Cap::Color, Cap::Ruler]);

/// Factory configuration for `kind`.
pub fn default_tool(kind: ToolKind) -> Tool {
    match kind {
        ToolKind::Pen => Tool::new(kind, ROYAL_BLUE, PEN_CAPS, Some(PEN_THICKNESS)),
        ToolKind::Eraser => Tool::new(kind, BLACK, Cap::Size.into(), Some(ERASER_THICKNESS)),
        ToolKind::Highlighter => {
            Tool::new(kind, YELLOW, HIGHLIGHTER_CAPS, Some(HIGHLIGHTER_THICKNESS))
        }
        ToolKind::Text => Tool::new(kind, BLACK, Cap::Color.into(), None),
        ToolKind::SelectPdfTextLinear | ToolKind::SelectPdfTextRect => {
            Tool::new(kind, BLACK, PDF_SELECT_CAPS, None)
        }
        _ => Tool::new(kind, BLACK, ToolCapabilities::NONE, None),
    }
}

/// Owns exactly one canonical [`Tool`] per [`ToolKind`].
///
/// Tools are addressed by `ToolKind::index`, so lookups by kind cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRegistry {
    tools: [Tool; ToolKind::COUNT],
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: std::array::from_fn(|i| default_tool(ToolKind::ALL[i])),
        }
    }

    pub fn get(&self, kind: ToolKind) -> &Tool {
        &self.tools[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ToolKind) -> &mut Tool {
        &mut self.tools[kind.index()]
    }

    /// Index-based lookup for callers holding a raw tool number.
    pub fn get_by_index(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    /// Visits every tool in `ToolKind` declaration order.
    pub fn for_each(&self, mut f: impl FnMut(&Tool)) {
        self.tools.iter().for_each(&mut f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
