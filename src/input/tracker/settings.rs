//! Per-field mutations and readers.

use super::core::{ActiveToolTracker, ToolRef};
use crate::draw::{Color, LineStyle};
use crate::input::button::ButtonSlot;
use crate::notify::{ActionGroup, ActionType};
use crate::tool::{DrawingType, EraserMode, ToolCapability, ToolKind, ToolSize};

impl ActiveToolTracker {
    // ========================================================================
    // Color
    // ========================================================================

    pub fn color(&self) -> Color {
        self.active_tool().color()
    }

    /// Applies `color` to the active tool.
    ///
    /// When the active tool has no color capability but the toolbar-selected
    /// tool does, the toolbar tool is colored instead. `user_selection` marks
    /// a color picked by the user, which is also pushed to the document
    /// selection.
    pub fn set_color(&mut self, color: Color, user_selection: bool) {
        let toolbar = ToolRef::Canonical(self.toolbar_selected);
        let redirect = self.active != toolbar
            && !self.active_tool().has_capability(ToolCapability::Color)
            && self.toolbar_tool().has_capability(ToolCapability::Color);
        let target = if redirect { toolbar } else { self.active };

        self.resolve_mut(target).set_color(color);
        self.bus.fire_color_changed(color);
        if user_selection {
            self.bus.fire_change_color_of_selection(color);
        }
        self.bus.fire_custom_color_selected(color);
    }

    /// Colors the slot's tool only.
    pub fn set_button_color(&mut self, color: Color, slot: ButtonSlot) {
        self.button_mut(slot).set_color(color);
        self.bus.fire_color_changed(color);
        self.bus.fire_custom_color_selected(color);
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Stroke width of the active tool at its current size.
    pub fn thickness(&self) -> f64 {
        self.active_tool().current_thickness()
    }

    /// Sets the toolbar-selected tool's size, clamped to the selectable range.
    pub fn set_size(&mut self, size: ToolSize) {
        let kind = self.toolbar_selected;
        let tool = self.registry.get_mut(kind);
        tool.set_size(size);
        let size = tool.size();
        self.bus.fire_size_changed(size);
    }

    /// Index-based variant of [`set_size`](Self::set_size); out-of-range
    /// levels clamp to the nearest size with a warning.
    pub fn set_size_level(&mut self, level: i64) {
        let size = ToolSize::from_level(level);
        if size.index() as i64 != level {
            log::warn!("Size level {} out of range, clamping to {}", level, size);
        }
        self.set_size(size);
    }

    pub fn set_button_size(&mut self, size: ToolSize, slot: ButtonSlot) {
        let tool = self.button_mut(slot);
        tool.set_size(size);
        let size = tool.size();
        self.bus.fire_size_changed(size);
    }

    /// Sets the custom width of the toolbar-selected tool and switches it to
    /// the custom size.
    pub fn set_custom_thickness(&mut self, width: f64) {
        let kind = self.toolbar_selected;
        let tool = self.registry.get_mut(kind);
        tool.set_custom_thickness(width);
        let size = tool.size();
        self.bus.fire_size_changed(size);
    }

    pub fn pen_size(&self) -> ToolSize {
        self.registry.get(ToolKind::Pen).size()
    }

    pub fn eraser_size(&self) -> ToolSize {
        self.registry.get(ToolKind::Eraser).size()
    }

    pub fn highlighter_size(&self) -> ToolSize {
        self.registry.get(ToolKind::Highlighter).size()
    }

    pub fn set_pen_size(&mut self, size: ToolSize) {
        self.set_kind_size(ToolKind::Pen, size, ActionGroup::PenSize, ActionType::PenSize);
    }

    pub fn set_eraser_size(&mut self, size: ToolSize) {
        self.set_kind_size(
            ToolKind::Eraser,
            size,
            ActionGroup::EraserSize,
            ActionType::EraserSize,
        );
    }

    pub fn set_highlighter_size(&mut self, size: ToolSize) {
        self.set_kind_size(
            ToolKind::Highlighter,
            size,
            ActionGroup::HighlighterSize,
            ActionType::HighlighterSize,
        );
    }

    // Size changes of a specific canonical tool only notify the listener when
    // that tool is the one in use.
    fn set_kind_size(
        &mut self,
        kind: ToolKind,
        size: ToolSize,
        group: ActionGroup,
        action: fn(ToolSize) -> ActionType,
    ) {
        let tool = self.registry.get_mut(kind);
        tool.set_size(size);
        let size = tool.size();
        self.bus.fire_selected(group, action(size));
        if self.active_kind() == kind {
            self.bus.fire_size_changed(size);
        }
    }

    // ========================================================================
    // Eraser mode
    // ========================================================================

    /// Mode of the eraser in use: the active tool's own mode when it is an
    /// eraser, otherwise the canonical eraser's.
    pub fn eraser_mode(&self) -> EraserMode {
        let active = self.active_tool();
        if active.kind() == ToolKind::Eraser {
            active.eraser_mode()
        } else {
            self.registry.get(ToolKind::Eraser).eraser_mode()
        }
    }

    pub fn set_eraser_mode(&mut self, mode: EraserMode) {
        self.registry.get_mut(ToolKind::Eraser).set_eraser_mode(mode);
        self.broadcast_eraser_mode();
    }

    pub fn set_button_eraser_mode(&mut self, mode: EraserMode, slot: ButtonSlot) {
        self.button_mut(slot).set_eraser_mode(mode);
        self.broadcast_eraser_mode();
    }

    /// Publishes the resolved mode, which may differ from the one just
    /// written when the other eraser is in use.
    pub(super) fn broadcast_eraser_mode(&self) {
        let action = ActionType::for_eraser_mode(self.eraser_mode());
        self.bus.fire_selected(ActionGroup::EraserMode, action);
    }

    // ========================================================================
    // Drawing sub-type
    // ========================================================================

    pub fn set_drawing_sub_type(&mut self, sub_type: DrawingType) {
        let kind = self.toolbar_selected;
        self.registry.get_mut(kind).set_drawing_sub_type(sub_type);
        self.broadcast_drawing_sub_type(sub_type);
    }

    pub fn set_button_drawing_sub_type(&mut self, sub_type: DrawingType, slot: ButtonSlot) {
        self.button_mut(slot).set_drawing_sub_type(sub_type);
        self.broadcast_drawing_sub_type(sub_type);
    }

    fn broadcast_drawing_sub_type(&self, sub_type: DrawingType) {
        self.bus
            .fire_selected(ActionGroup::DrawingType, ActionType::DrawingType(sub_type));
    }

    // ========================================================================
    // Fill and line style
    // ========================================================================

    /// Fill of the active tool: `-1` when disabled, else the fill alpha.
    pub fn fill(&self) -> i32 {
        let tool = self.active_tool();
        if tool.fill_enabled() {
            tool.fill_alpha()
        } else {
            -1
        }
    }

    pub fn pen_fill_enabled(&self) -> bool {
        self.registry.get(ToolKind::Pen).fill_enabled()
    }

    pub fn highlighter_fill_enabled(&self) -> bool {
        self.registry.get(ToolKind::Highlighter).fill_enabled()
    }

    pub fn pen_fill_alpha(&self) -> i32 {
        self.registry.get(ToolKind::Pen).fill_alpha()
    }

    pub fn highlighter_fill_alpha(&self) -> i32 {
        self.registry.get(ToolKind::Highlighter).fill_alpha()
    }

    pub fn set_pen_fill_enabled(&mut self, enabled: bool, fire: bool) {
        self.set_kind_fill(ToolKind::Pen, enabled, fire);
    }

    pub fn set_highlighter_fill_enabled(&mut self, enabled: bool, fire: bool) {
        self.set_kind_fill(ToolKind::Highlighter, enabled, fire);
    }

    pub fn set_pen_fill_alpha(&mut self, alpha: i32) {
        self.registry.get_mut(ToolKind::Pen).set_fill_alpha(alpha);
    }

    pub fn set_highlighter_fill_alpha(&mut self, alpha: i32) {
        self.registry
            .get_mut(ToolKind::Highlighter)
            .set_fill_alpha(alpha);
    }

    fn set_kind_fill(&mut self, kind: ToolKind, enabled: bool, fire: bool) {
        self.registry.get_mut(kind).set_fill(enabled);
        if fire && self.active_kind() == kind {
            let fill = self.fill();
            self.bus.fire_fill_changed(fill);
        }
    }

    pub fn line_style(&self) -> &LineStyle {
        self.active_tool().line_style()
    }

    /// Sets the pen's dash pattern.
    pub fn set_line_style(&mut self, style: LineStyle) {
        let pen = self.registry.get_mut(ToolKind::Pen);
        pen.set_line_style(style);
        self.bus.fire_line_style_changed(pen.line_style());
    }
}
