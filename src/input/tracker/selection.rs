//! Selection-tool capability editing and toolbar widget sync.

use super::core::ActiveToolTracker;
use crate::draw::Color;
use crate::notify::{ActionGroup, ActionType};
use crate::tool::{ToolCapability, ToolKind, ToolSize};

impl ActiveToolTracker {
    /// Reconfigures the selection tools to match what the current canvas
    /// selection supports.
    ///
    /// Each selection tool gets the four capabilities toggled and its size,
    /// color and fill reset to unset. When a selection tool (or the play
    /// object tool) is active, all field notifications and `tool_changed`
    /// are fired so the toolbar refreshes.
    pub fn set_selection_edit_capabilities(
        &mut self,
        color: bool,
        size: bool,
        fill: bool,
        line_style: bool,
    ) {
        for kind in ToolKind::SELECTION_EDIT {
            let tool = self.registry.get_mut(kind);
            tool.set_capability(ToolCapability::Color, color);
            tool.set_capability(ToolCapability::Size, size);
            tool.set_capability(ToolCapability::Fill, fill);
            tool.set_capability(ToolCapability::LineStyle, line_style);
            tool.clear_size();
            tool.set_color(Color::NONE);
            tool.set_fill(false);
        }

        let active = self.active_kind();
        if active.is_selection_edit() || active == ToolKind::PlayObject {
            let tool = self.active_tool();
            let (color, size, style) = (tool.color(), tool.size(), tool.line_style().clone());
            let fill = self.fill();
            self.bus.fire_color_changed(color);
            self.bus.fire_size_changed(size);
            self.bus.fire_fill_changed(fill);
            self.bus.fire_line_style_changed(&style);
            self.fire_tool_changed();
        }
    }

    /// True when elements created with the active tool must stay on one
    /// page: shape sub-types of the pen and highlighter, the selection tools,
    /// the dedicated shape tools, the floating toolbox and PDF text
    /// selection.
    pub fn is_single_page_tool(&self) -> bool {
        let tool = self.active_tool();
        match tool.kind() {
            ToolKind::Pen | ToolKind::Highlighter => tool.drawing_sub_type().is_shape(),
            ToolKind::SelectRect
            | ToolKind::SelectRegion
            | ToolKind::SelectObject
            | ToolKind::DrawRect
            | ToolKind::DrawEllipse
            | ToolKind::DrawArrow
            | ToolKind::DrawDoubleArrow
            | ToolKind::DrawCoordinateSystem
            | ToolKind::DrawSpline
            | ToolKind::FloatingToolbox
            | ToolKind::SelectPdfTextLinear
            | ToolKind::SelectPdfTextRect => true,
            _ => false,
        }
    }

    /// Pushes the current state to toolbar widgets: selected tool, size,
    /// drawing sub-type and eraser mode, plus the enabled state of the
    /// capability-gated controls.
    pub fn sync_toolbar_actions(&self) {
        let tool = self.active_tool();
        self.bus
            .fire_selected(ActionGroup::Tool, ActionType::Tool(self.toolbar_selected));
        self.bus
            .fire_selected(ActionGroup::Size, ActionType::for_size(tool.size()));
        self.bus.fire_selected(
            ActionGroup::DrawingType,
            ActionType::DrawingType(tool.drawing_sub_type()),
        );
        self.broadcast_eraser_mode();

        let has = |cap| tool.has_capability(cap);
        self.bus
            .fire_enabled(ActionType::SelectColor, has(ToolCapability::Color));
        for size in ToolSize::SELECTABLE {
            self.bus
                .fire_enabled(ActionType::Size(size), has(ToolCapability::Size));
        }
        self.bus.fire_enabled(ActionType::Fill, has(ToolCapability::Fill));
        self.bus
            .fire_enabled(ActionType::LineStyle, has(ToolCapability::LineStyle));
    }
}
