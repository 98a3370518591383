//! Tracker state and the role-pointer transitions.

use crate::input::button::ButtonSlot;
use crate::notify::{ActionBroadcaster, NotificationBus, ToolChangedCallback, ToolListener};
use crate::tool::{DrawingType, Tool, ToolCapability, ToolKind, ToolRegistry, ToolSize};
use std::rc::Rc;

/// Where a role pointer resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolRef {
    /// The registry's canonical tool for a kind.
    Canonical(ToolKind),
    /// A button slot's private tool.
    Button(ButtonSlot),
}

/// Which of the two "current tool" roles a query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectedRole {
    Active,
    Toolbar,
}

/// Tool-state machine.
///
/// Holds the canonical tools, one private tool per [`ButtonSlot`], and two
/// role pointers:
/// - `active`: the tool interpreting pointer input, either canonical or a
///   button slot's.
/// - `toolbar_selected`: the user's last toolbar pick, always canonical.
///
/// Both start at the pen. All mutations go through this type so that
/// notifications stay consistent with state.
pub struct ActiveToolTracker {
    pub(super) registry: ToolRegistry,
    pub(super) buttons: [Tool; ButtonSlot::COUNT],
    pub(super) active: ToolRef,
    pub(super) toolbar_selected: ToolKind,
    pub(super) bus: NotificationBus,
}

impl ActiveToolTracker {
    /// Creates a tracker with factory tools. Button slots start as copies of
    /// the highlighter.
    pub fn new(listener: Box<dyn ToolListener>, actions: Rc<ActionBroadcaster>) -> Self {
        let registry = ToolRegistry::new();
        let template = registry.get(ToolKind::Highlighter).clone();
        Self {
            buttons: std::array::from_fn(|_| template.clone()),
            registry,
            active: ToolRef::Canonical(ToolKind::Pen),
            toolbar_selected: ToolKind::Pen,
            bus: NotificationBus::new(listener, actions),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn actions(&self) -> &Rc<ActionBroadcaster> {
        self.bus.actions()
    }

    pub fn active_ref(&self) -> ToolRef {
        self.active
    }

    pub fn active_kind(&self) -> ToolKind {
        self.active_tool().kind()
    }

    pub fn toolbar_kind(&self) -> ToolKind {
        self.toolbar_selected
    }

    pub fn active_tool(&self) -> &Tool {
        self.resolve(self.active)
    }

    pub fn toolbar_tool(&self) -> &Tool {
        self.registry.get(self.toolbar_selected)
    }

    pub fn button_tool(&self, slot: ButtonSlot) -> &Tool {
        &self.buttons[slot.index()]
    }

    pub fn tool(&self, role: SelectedRole) -> &Tool {
        match role {
            SelectedRole::Active => self.active_tool(),
            SelectedRole::Toolbar => self.toolbar_tool(),
        }
    }

    pub fn has_capability(&self, cap: ToolCapability, role: SelectedRole) -> bool {
        self.tool(role).has_capability(cap)
    }

    pub fn size(&self, role: SelectedRole) -> ToolSize {
        self.tool(role).size()
    }

    pub fn drawing_sub_type(&self, role: SelectedRole) -> DrawingType {
        self.tool(role).drawing_sub_type()
    }

    /// Points both roles at the canonical tool for `kind` and fires
    /// `tool_changed`.
    pub fn select_toolbar_tool(&mut self, kind: ToolKind) {
        self.toolbar_selected = kind;
        self.active = ToolRef::Canonical(kind);
        self.fire_tool_changed();
    }

    /// Like [`select_toolbar_tool`](Self::select_toolbar_tool) for a raw tool
    /// index. Out-of-range indices are logged and ignored.
    pub fn select_toolbar_tool_index(&mut self, index: usize) {
        match ToolKind::try_from(index) {
            Ok(kind) => self.select_toolbar_tool(kind),
            Err(index) => log::warn!("Unknown tool index {} selected, ignoring", index),
        }
    }

    /// Selects a tool by its settings name. Unknown names are logged and
    /// ignored.
    pub fn select_toolbar_tool_by_name(&mut self, name: &str) {
        match name.parse::<ToolKind>() {
            Ok(kind) => self.select_toolbar_tool(kind),
            Err(err) => log::warn!("Cannot select tool: {}", err),
        }
    }

    /// Reseats `active` to the slot's tool. Returns `false` if it already
    /// pointed there.
    pub fn point_active_to_button(&mut self, slot: ButtonSlot) -> bool {
        let target = ToolRef::Button(slot);
        if self.active == target {
            return false;
        }
        self.active = target;
        true
    }

    /// Reseats `active` back to the toolbar-selected tool. Returns `false` if
    /// it already pointed there.
    pub fn point_active_to_toolbar(&mut self) -> bool {
        let target = ToolRef::Canonical(self.toolbar_selected);
        if self.active == target {
            return false;
        }
        self.active = target;
        true
    }

    /// Replaces the slot's tool with a fresh copy of the canonical tool for
    /// `kind`.
    pub fn reset_button_tool(&mut self, kind: ToolKind, slot: ButtonSlot) {
        self.buttons[slot.index()] = self.registry.get(kind).clone();
        log::debug!("Button {} now carries a copy of {}", slot, kind);
    }

    pub fn add_tool_changed_callback(&mut self, callback: impl FnMut(ToolKind) + 'static) {
        let callback: ToolChangedCallback = Box::new(callback);
        self.bus.add_tool_changed_callback(callback);
    }

    /// Notifies callbacks and the listener that the active tool changed.
    pub fn fire_tool_changed(&mut self) {
        let kind = self.active_kind();
        self.bus.fire_tool_changed(kind);
    }

    /// True when the active tool draws on the canvas directly.
    pub fn is_drawing_tool(&self) -> bool {
        self.active_kind().is_drawing()
    }

    pub(super) fn resolve(&self, target: ToolRef) -> &Tool {
        match target {
            ToolRef::Canonical(kind) => self.registry.get(kind),
            ToolRef::Button(slot) => &self.buttons[slot.index()],
        }
    }

    pub(super) fn resolve_mut(&mut self, target: ToolRef) -> &mut Tool {
        match target {
            ToolRef::Canonical(kind) => self.registry.get_mut(kind),
            ToolRef::Button(slot) => &mut self.buttons[slot.index()],
        }
    }

    pub(super) fn button_mut(&mut self, slot: ButtonSlot) -> &mut Tool {
        &mut self.buttons[slot.index()]
    }
}
