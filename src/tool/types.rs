//! The per-tool configuration record.

use super::capabilities::{ToolCapabilities, ToolCapability};
use super::enums::{DrawingType, EraserMode, ToolKind, ToolSize};
use crate::draw::{Color, LineStyle};

/// Default fill opacity for pen and highlighter fills (0-255).
pub const DEFAULT_FILL_ALPHA: i32 = 128;

/// Number of slots in a thickness table: the five selectable sizes plus one
/// custom slot.
pub const THICKNESS_SLOTS: usize = 6;

/// One editing tool's configuration.
///
/// The `kind` is fixed at construction. Field meaning is gated by the
/// capability set: a color only matters with [`ToolCapability::Color`], a size
/// and thickness table only with [`ToolCapability::Size`], and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    kind: ToolKind,
    capabilities: ToolCapabilities,
    color: Color,
    size: ToolSize,
    thickness: Option<[f64; THICKNESS_SLOTS]>,
    drawing_sub_type: DrawingType,
    eraser_mode: EraserMode,
    fill_enabled: bool,
    fill_alpha: i32,
    line_style: LineStyle,
}

impl Tool {
    /// Creates a tool with medium size and default sub-modes.
    ///
    /// The custom thickness slot starts out equal to the medium width.
    pub fn new(
        kind: ToolKind,
        color: Color,
        capabilities: ToolCapabilities,
        thickness: Option<[f64; 5]>,
    ) -> Self {
        let thickness = thickness.map(|table| {
            let mut slots = [0.0; THICKNESS_SLOTS];
            slots[..5].copy_from_slice(&table);
            slots[THICKNESS_SLOTS - 1] = table[ToolSize::Medium.index()];
            slots
        });
        let eraser_mode = if kind == ToolKind::Eraser {
            EraserMode::Default
        } else {
            EraserMode::None
        };

        Self {
            kind,
            capabilities,
            color,
            size: ToolSize::Medium,
            thickness,
            drawing_sub_type: DrawingType::Default,
            eraser_mode,
            fill_enabled: false,
            fill_alpha: DEFAULT_FILL_ALPHA,
            line_style: LineStyle::plain(),
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Settings-store name of this tool's kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn capabilities(&self) -> ToolCapabilities {
        self.capabilities
    }

    pub fn has_capability(&self, cap: ToolCapability) -> bool {
        self.capabilities.contains(cap)
    }

    pub fn set_capability(&mut self, cap: ToolCapability, enabled: bool) {
        self.capabilities.set(cap, enabled);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn size(&self) -> ToolSize {
        self.size
    }

    /// Sets one of the five selectable sizes.
    ///
    /// `None` and `Custom` are not selectable here; they clamp to
    /// `VeryThick` with a warning. Use [`Tool::clear_size`] and
    /// [`Tool::set_custom_thickness`] for those.
    pub fn set_size(&mut self, size: ToolSize) {
        let clamped = size.clamp_selectable();
        if clamped != size {
            log::warn!(
                "Tool '{}': size {} is out of range, clamping to {}",
                self.name(),
                size,
                clamped
            );
        }
        self.size = clamped;
    }

    /// Marks the size as unset (mixed sizes in a selection).
    pub fn clear_size(&mut self) {
        self.size = ToolSize::None;
    }

    /// Writes the custom thickness slot and switches to the custom size.
    ///
    /// Ignored with a warning on tools without a thickness table.
    pub fn set_custom_thickness(&mut self, width: f64) {
        let Some(table) = self.thickness.as_mut() else {
            log::warn!(
                "Tool '{}' has no thickness table, ignoring custom width {}",
                self.kind.name(),
                width
            );
            return;
        };
        if !width.is_finite() || width <= 0.0 {
            log::warn!(
                "Tool '{}': custom width {} must be positive, ignoring",
                self.kind.name(),
                width
            );
            return;
        }
        table[THICKNESS_SLOTS - 1] = width;
        self.size = ToolSize::Custom;
    }

    pub fn has_thickness_table(&self) -> bool {
        self.thickness.is_some()
    }

    /// Stroke width for `size`.
    ///
    /// Returns 0 (and logs) when the tool has no thickness table or the size
    /// is unset.
    pub fn thickness(&self, size: ToolSize) -> f64 {
        let Some(table) = self.thickness.as_ref() else {
            log::warn!(
                "Tool '{}' has no size capability, thickness requested",
                self.name()
            );
            return 0.0;
        };
        match size {
            ToolSize::None => {
                log::warn!("Tool '{}': thickness requested for unset size", self.name());
                0.0
            }
            ToolSize::Custom => table[THICKNESS_SLOTS - 1],
            selectable => table[selectable.index()],
        }
    }

    /// Stroke width for the tool's current size.
    pub fn current_thickness(&self) -> f64 {
        self.thickness(self.size)
    }

    pub fn drawing_sub_type(&self) -> DrawingType {
        self.drawing_sub_type
    }

    pub fn set_drawing_sub_type(&mut self, sub_type: DrawingType) {
        self.drawing_sub_type = sub_type;
    }

    pub fn eraser_mode(&self) -> EraserMode {
        self.eraser_mode
    }

    pub fn set_eraser_mode(&mut self, mode: EraserMode) {
        self.eraser_mode = mode;
    }

    pub fn fill_enabled(&self) -> bool {
        self.fill_enabled
    }

    pub fn set_fill(&mut self, enabled: bool) {
        self.fill_enabled = enabled;
    }

    pub fn fill_alpha(&self) -> i32 {
        self.fill_alpha
    }

    /// Sets the fill opacity, clamped to `0..=255`.
    pub fn set_fill_alpha(&mut self, alpha: i32) {
        let clamped = alpha.clamp(0, 255);
        if clamped != alpha {
            log::warn!(
                "Tool '{}': fill alpha {} out of range, clamping to {}",
                self.name(),
                alpha,
                clamped
            );
        }
        self.fill_alpha = clamped;
    }

    pub fn line_style(&self) -> &LineStyle {
        &self.line_style
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }
}
