//! Tool enumerations and their symbolic names.
//!
//! The string forms returned by `name()` are the ones written to the settings
//! store, so they must stay stable across releases.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing the symbolic names of tool enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Unknown tool size '{0}'")]
    UnknownSize(String),

    #[error("Unknown drawing type '{0}'")]
    UnknownDrawingType(String),

    #[error("Unknown eraser mode '{0}'")]
    UnknownEraserMode(String),

    #[error("Invalid line style '{0}'")]
    InvalidLineStyle(String),
}

/// Every editing tool the application knows about.
///
/// Declaration order is stable and contiguous: [`ToolKind::index`] is used to
/// address the registry's tool array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolKind {
    Pen,
    Eraser,
    Highlighter,
    Text,
    Image,
    SelectRect,
    SelectRegion,
    SelectMultiLayerRect,
    SelectMultiLayerRegion,
    SelectObject,
    PlayObject,
    VerticalSpace,
    Hand,
    DrawRect,
    DrawEllipse,
    DrawArrow,
    DrawDoubleArrow,
    DrawCoordinateSystem,
    DrawSpline,
    FloatingToolbox,
    SelectPdfTextLinear,
    SelectPdfTextRect,
}

impl ToolKind {
    pub const COUNT: usize = 22;

    /// All kinds in declaration order.
    pub const ALL: [ToolKind; Self::COUNT] = [
        ToolKind::Pen,
        ToolKind::Eraser,
        ToolKind::Highlighter,
        ToolKind::Text,
        ToolKind::Image,
        ToolKind::SelectRect,
        ToolKind::SelectRegion,
        ToolKind::SelectMultiLayerRect,
        ToolKind::SelectMultiLayerRegion,
        ToolKind::SelectObject,
        ToolKind::PlayObject,
        ToolKind::VerticalSpace,
        ToolKind::Hand,
        ToolKind::DrawRect,
        ToolKind::DrawEllipse,
        ToolKind::DrawArrow,
        ToolKind::DrawDoubleArrow,
        ToolKind::DrawCoordinateSystem,
        ToolKind::DrawSpline,
        ToolKind::FloatingToolbox,
        ToolKind::SelectPdfTextLinear,
        ToolKind::SelectPdfTextRect,
    ];

    /// Selection tools whose capabilities follow the current canvas selection.
    pub const SELECTION_EDIT: [ToolKind; 3] = [
        ToolKind::SelectRect,
        ToolKind::SelectRegion,
        ToolKind::SelectObject,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `None` for an index past the last kind.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name used in the settings store (`tools/<name>/...`).
    pub const fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Eraser => "eraser",
            ToolKind::Highlighter => "highlighter",
            ToolKind::Text => "text",
            ToolKind::Image => "image",
            ToolKind::SelectRect => "selectRect",
            ToolKind::SelectRegion => "selectRegion",
            ToolKind::SelectMultiLayerRect => "selectMultiLayerRect",
            ToolKind::SelectMultiLayerRegion => "selectMultiLayerRegion",
            ToolKind::SelectObject => "selectObject",
            ToolKind::PlayObject => "playObject",
            ToolKind::VerticalSpace => "verticalSpace",
            ToolKind::Hand => "hand",
            ToolKind::DrawRect => "drawRect",
            ToolKind::DrawEllipse => "drawEllipse",
            ToolKind::DrawArrow => "drawArrow",
            ToolKind::DrawDoubleArrow => "drawDoubleArrow",
            ToolKind::DrawCoordinateSystem => "drawCoordinateSystem",
            ToolKind::DrawSpline => "drawSpline",
            ToolKind::FloatingToolbox => "showFloatingToolbox",
            ToolKind::SelectPdfTextLinear => "selectPdfTextLinear",
            ToolKind::SelectPdfTextRect => "selectPdfTextRect",
        }
    }

    /// Pen, highlighter and eraser: the tools that write to the canvas directly.
    pub const fn is_drawing(self) -> bool {
        matches!(self, ToolKind::Pen | ToolKind::Highlighter | ToolKind::Eraser)
    }

    /// Part of the selection family whose capabilities are edited by
    /// `set_selection_edit_capabilities`.
    pub const fn is_selection_edit(self) -> bool {
        matches!(
            self,
            ToolKind::SelectRect | ToolKind::SelectRegion | ToolKind::SelectObject
        )
    }
}

impl TryFrom<usize> for ToolKind {
    type Error = usize;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(index)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseError::UnknownTool(s.to_string()))
    }
}

/// Stroke size slot of a tool.
///
/// Only the first five variants are user-selectable; `None` marks an unset
/// size (selection tools with mixed sizes) and `Custom` addresses the extra
/// slot of the thickness table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolSize {
    VeryFine,
    Fine,
    Medium,
    Thick,
    VeryThick,
    None,
    Custom,
}

impl ToolSize {
    /// The user-selectable sizes, smallest first.
    pub const SELECTABLE: [ToolSize; 5] = [
        ToolSize::VeryFine,
        ToolSize::Fine,
        ToolSize::Medium,
        ToolSize::Thick,
        ToolSize::VeryThick,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_selectable(self) -> bool {
        (self as usize) <= ToolSize::VeryThick as usize
    }

    /// Maps a numeric level onto the selectable range, clamping anything
    /// outside `0..=4` to the nearest bound.
    pub fn from_level(level: i64) -> Self {
        let clamped = level.clamp(0, Self::SELECTABLE.len() as i64 - 1);
        Self::SELECTABLE[clamped as usize]
    }

    /// Clamps to the selectable range. `None` and `Custom` sit above
    /// `VeryThick` in the ordering and clamp to it.
    pub fn clamp_selectable(self) -> Self {
        if self.is_selectable() {
            self
        } else {
            ToolSize::VeryThick
        }
    }

    /// Symbolic name written to the settings store. Empty for sizes that are
    /// never persisted.
    pub const fn setting_name(self) -> &'static str {
        match self {
            ToolSize::VeryFine => "VERY_FINE",
            ToolSize::Fine => "FINE",
            ToolSize::Medium => "MEDIUM",
            ToolSize::Thick => "THICK",
            ToolSize::VeryThick => "VERY_THICK",
            ToolSize::None | ToolSize::Custom => "",
        }
    }
}

impl fmt::Display for ToolSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolSize::None => f.write_str("NONE"),
            ToolSize::Custom => f.write_str("CUSTOM"),
            other => f.write_str(other.setting_name()),
        }
    }
}

impl FromStr for ToolSize {
    type Err = ParseError;

    /// Accepts the current names as well as `THIN`, `BIG` and `VERY_BIG`
    /// written by older releases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERY_FINE" => Ok(ToolSize::VeryFine),
            "FINE" | "THIN" => Ok(ToolSize::Fine),
            "MEDIUM" => Ok(ToolSize::Medium),
            "THICK" | "BIG" => Ok(ToolSize::Thick),
            "VERY_THICK" | "VERY_BIG" => Ok(ToolSize::VeryThick),
            other => Err(ParseError::UnknownSize(other.to_string())),
        }
    }
}

/// Shape variant applied while drawing with the pen or highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawingType {
    /// Button configuration value: keep whatever the tool already has.
    DontChange,
    Default,
    Line,
    Rectangle,
    Ellipse,
    Arrow,
    DoubleArrow,
    CoordinateSystem,
    ShapeRecognizer,
    Spline,
}

impl DrawingType {
    pub const ALL: [DrawingType; 10] = [
        DrawingType::DontChange,
        DrawingType::Default,
        DrawingType::Line,
        DrawingType::Rectangle,
        DrawingType::Ellipse,
        DrawingType::Arrow,
        DrawingType::DoubleArrow,
        DrawingType::CoordinateSystem,
        DrawingType::ShapeRecognizer,
        DrawingType::Spline,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            DrawingType::DontChange => "dontChange",
            DrawingType::Default => "default",
            DrawingType::Line => "line",
            DrawingType::Rectangle => "rectangle",
            DrawingType::Ellipse => "ellipse",
            DrawingType::Arrow => "arrow",
            DrawingType::DoubleArrow => "doubleArrow",
            DrawingType::CoordinateSystem => "drawCoordinateSystem",
            DrawingType::ShapeRecognizer => "strokeRecognizer",
            DrawingType::Spline => "spline",
        }
    }

    /// Sub-types that produce a bounded shape rather than a freehand stroke.
    pub const fn is_shape(self) -> bool {
        matches!(
            self,
            DrawingType::Line
                | DrawingType::Rectangle
                | DrawingType::Ellipse
                | DrawingType::Arrow
                | DrawingType::DoubleArrow
                | DrawingType::CoordinateSystem
                | DrawingType::Spline
        )
    }
}

impl fmt::Display for DrawingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawingType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseError::UnknownDrawingType(s.to_string()))
    }
}

/// Eraser sub-behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraserMode {
    None,
    Default,
    Whiteout,
    DeleteStroke,
}

impl EraserMode {
    pub const fn name(self) -> &'static str {
        match self {
            EraserMode::None => "none",
            EraserMode::Default => "default",
            EraserMode::Whiteout => "whiteout",
            EraserMode::DeleteStroke => "deleteStroke",
        }
    }
}

impl fmt::Display for EraserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EraserMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(EraserMode::None),
            "default" => Ok(EraserMode::Default),
            "whiteout" => Ok(EraserMode::Whiteout),
            "deleteStroke" => Ok(EraserMode::DeleteStroke),
            other => Err(ParseError::UnknownEraserMode(other.to_string())),
        }
    }
}
