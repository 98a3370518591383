//! Synchronous notification protocols: the primary state-change listener and
//! the group/action broadcaster.

pub mod actions;
pub mod listener;

pub use actions::{
    ActionBroadcaster, ActionEnabledListener, ActionGroup, ActionSelectionListener, ActionType,
};
pub use listener::{LoggingListener, RecordingListener, ToolChangedCallback, ToolEvent, ToolListener};

use crate::draw::{Color, LineStyle};
use crate::tool::{ToolKind, ToolSize};
use std::rc::Rc;

/// Owns the primary listener, the tool-changed callbacks and a handle to the
/// shared action broadcaster.
pub struct NotificationBus {
    listener: Box<dyn ToolListener>,
    callbacks: Vec<ToolChangedCallback>,
    actions: Rc<ActionBroadcaster>,
}

impl NotificationBus {
    pub fn new(listener: Box<dyn ToolListener>, actions: Rc<ActionBroadcaster>) -> Self {
        Self {
            listener,
            callbacks: Vec::new(),
            actions,
        }
    }

    pub fn actions(&self) -> &Rc<ActionBroadcaster> {
        &self.actions
    }

    pub fn add_tool_changed_callback(&mut self, callback: ToolChangedCallback) {
        self.callbacks.push(callback);
    }

    /// Runs the callbacks in registration order, then the primary listener.
    pub fn fire_tool_changed(&mut self, kind: ToolKind) {
        for callback in &mut self.callbacks {
            callback(kind);
        }
        self.listener.tool_changed(kind);
    }

    pub fn fire_size_changed(&mut self, size: ToolSize) {
        self.listener.tool_size_changed(size);
    }

    pub fn fire_color_changed(&mut self, color: Color) {
        self.listener.tool_color_changed(color);
    }

    pub fn fire_fill_changed(&mut self, fill: i32) {
        self.listener.tool_fill_changed(fill);
    }

    pub fn fire_line_style_changed(&mut self, style: &LineStyle) {
        self.listener.tool_line_style_changed(style);
    }

    pub fn fire_change_color_of_selection(&mut self, color: Color) {
        self.listener.change_color_of_selection(color);
    }

    pub fn fire_custom_color_selected(&mut self, color: Color) {
        self.listener.set_custom_color_selected(color);
    }

    pub fn fire_enabled(&self, action: ActionType, enabled: bool) {
        self.actions.fire_enabled(action, enabled);
    }

    pub fn fire_selected(&self, group: ActionGroup, action: ActionType) {
        self.actions.fire_selected(group, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn callbacks_run_before_primary_listener() {
        let order = Rc::new(RefCell::new(Vec::new()));

        struct Primary(Rc<RefCell<Vec<String>>>);
        impl ToolListener for Primary {
            fn tool_changed(&mut self, kind: ToolKind) {
                self.0.borrow_mut().push(format!("listener:{kind}"));
            }
        }

        let mut bus = NotificationBus::new(
            Box::new(Primary(order.clone())),
            ActionBroadcaster::new(),
        );
        for tag in ["first", "second"] {
            let order = order.clone();
            bus.add_tool_changed_callback(Box::new(move |kind| {
                order.borrow_mut().push(format!("{tag}:{kind}"));
            }));
        }

        bus.fire_tool_changed(ToolKind::Eraser);

        assert_eq!(
            *order.borrow(),
            vec!["first:eraser", "second:eraser", "listener:eraser"]
        );
    }

    #[test]
    fn recording_listener_captures_payloads() {
        let recorder = RecordingListener::new();
        let mut bus = NotificationBus::new(Box::new(recorder.clone()), ActionBroadcaster::new());

        bus.fire_size_changed(ToolSize::Thick);
        bus.fire_fill_changed(-1);
        bus.fire_line_style_changed(&LineStyle::dot());

        assert_eq!(
            recorder.take(),
            vec![
                ToolEvent::SizeChanged(ToolSize::Thick),
                ToolEvent::FillChanged(-1),
                ToolEvent::LineStyleChanged(LineStyle::dot()),
            ]
        );
        assert!(recorder.events().is_empty());
    }
}
