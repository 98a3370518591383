//! State-change listener protocol.

use crate::draw::{Color, LineStyle};
use crate::tool::{ToolKind, ToolSize};
use std::cell::RefCell;
use std::rc::Rc;

/// Primary observer of tool state, implemented by the hosting UI.
///
/// Every callback carries the value that changed, so implementations never
/// need to query the tracker while it is dispatching. All methods default to
/// no-ops.
pub trait ToolListener {
    fn tool_changed(&mut self, _kind: ToolKind) {}

    fn tool_size_changed(&mut self, _size: ToolSize) {}

    fn tool_color_changed(&mut self, _color: Color) {}

    /// `fill` is `-1` when fill is disabled, otherwise the fill alpha.
    fn tool_fill_changed(&mut self, _fill: i32) {}

    fn tool_line_style_changed(&mut self, _style: &LineStyle) {}

    /// The user picked `color` and it should be applied to the current
    /// document selection.
    fn change_color_of_selection(&mut self, _color: Color) {}

    /// A color was set; swatch widgets that do not match it should deselect.
    fn set_custom_color_selected(&mut self, _color: Color) {}
}

/// Lightweight observer notified with the active kind before
/// [`ToolListener::tool_changed`].
pub type ToolChangedCallback = Box<dyn FnMut(ToolKind)>;

/// One notification, as recorded by [`RecordingListener`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    ToolChanged(ToolKind),
    SizeChanged(ToolSize),
    ColorChanged(Color),
    FillChanged(i32),
    LineStyleChanged(LineStyle),
    ChangeColorOfSelection(Color),
    CustomColorSelected(Color),
}

/// Listener that only logs at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl ToolListener for LoggingListener {
    fn tool_changed(&mut self, kind: ToolKind) {
        log::debug!("Tool changed to {}", kind);
    }

    fn tool_size_changed(&mut self, size: ToolSize) {
        log::debug!("Tool size changed to {}", size);
    }

    fn tool_color_changed(&mut self, color: Color) {
        log::debug!("Tool color changed to {}", color);
    }

    fn tool_fill_changed(&mut self, fill: i32) {
        log::debug!("Tool fill changed to {}", fill);
    }

    fn tool_line_style_changed(&mut self, style: &LineStyle) {
        log::debug!("Tool line style changed to {}", style);
    }
}

/// Listener that appends every notification to a shared event list.
///
/// Clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<ToolEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ToolEvent> {
        self.events.borrow().clone()
    }

    /// Returns the recorded events and clears the list.
    pub fn take(&self) -> Vec<ToolEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&self, event: ToolEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ToolListener for RecordingListener {
    fn tool_changed(&mut self, kind: ToolKind) {
        self.push(ToolEvent::ToolChanged(kind));
    }

    fn tool_size_changed(&mut self, size: ToolSize) {
        self.push(ToolEvent::SizeChanged(size));
    }

    fn tool_color_changed(&mut self, color: Color) {
        self.push(ToolEvent::ColorChanged(color));
    }

    fn tool_fill_changed(&mut self, fill: i32) {
        self.push(ToolEvent::FillChanged(fill));
    }

    fn tool_line_style_changed(&mut self, style: &LineStyle) {
        self.push(ToolEvent::LineStyleChanged(style.clone()));
    }

    fn change_color_of_selection(&mut self, color: Color) {
        self.push(ToolEvent::ChangeColorOfSelection(color));
    }

    fn set_custom_color_selected(&mut self, color: Color) {
        self.push(ToolEvent::CustomColorSelected(color));
    }
}
