//! Group/action broadcaster used by the UI layer to keep toolbar and menu
//! widgets in sync with tool state.
//!
//! Listeners are held weakly: dropping the last `Rc` of a listener removes it
//! from the broadcaster, and dead entries are pruned on the next fan-out.

use crate::tool::{DrawingType, EraserMode, ToolKind, ToolSize};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

/// Widget group an action belongs to. At most one action per group is
/// selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionGroup {
    Tool,
    Color,
    Size,
    EraserMode,
    EraserSize,
    PenSize,
    HighlighterSize,
    DrawingType,
}

/// UI action identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Clears the selection of a group.
    NotSelected,
    Tool(ToolKind),
    Size(ToolSize),
    PenSize(ToolSize),
    EraserSize(ToolSize),
    HighlighterSize(ToolSize),
    EraserStandard,
    EraserWhiteout,
    EraserDeleteStroke,
    DrawingType(DrawingType),
    SelectColor,
    Fill,
    LineStyle,
}

impl ActionType {
    /// Action representing `mode` in the eraser-mode group. Everything other
    /// than whiteout and delete-stroke is shown as the standard eraser.
    pub fn for_eraser_mode(mode: EraserMode) -> Self {
        match mode {
            EraserMode::DeleteStroke => ActionType::EraserDeleteStroke,
            EraserMode::Whiteout => ActionType::EraserWhiteout,
            EraserMode::Default | EraserMode::None => ActionType::EraserStandard,
        }
    }

    /// Action representing `size` in the generic size group.
    pub fn for_size(size: ToolSize) -> Self {
        if size.is_selectable() {
            ActionType::Size(size)
        } else {
            ActionType::NotSelected
        }
    }
}

/// Receives enable/disable notifications for the actions it registered for.
pub trait ActionEnabledListener {
    fn action_enabled(&self, action: ActionType, enabled: bool);
}

/// Receives selection notifications for the group it registered for.
pub trait ActionSelectionListener {
    fn action_selected(&self, group: ActionGroup, action: ActionType);
}

type EnabledEntry = Weak<dyn ActionEnabledListener>;
type SelectionEntry = Weak<dyn ActionSelectionListener>;

/// Fan-out currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InFlight {
    Enabled(ActionType),
    Selected(ActionGroup),
}

/// Fan-out hub for [`ActionEnabledListener`]s and
/// [`ActionSelectionListener`]s.
///
/// Shared through `Rc`; all methods take `&self`. A listener may fire other
/// actions or groups while being notified, but a fire for the action or group
/// already being dispatched is dropped (logged at debug) so a widget reacting
/// to its own update cannot loop.
#[derive(Default)]
pub struct ActionBroadcaster {
    enabled: RefCell<HashMap<ActionType, Vec<EnabledEntry>>>,
    selection: RefCell<HashMap<ActionGroup, Vec<SelectionEntry>>>,
    in_flight: RefCell<HashSet<InFlight>>,
}

impl ActionBroadcaster {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registers `listener` for `action`. Returns `false` if it was already
    /// registered for that action.
    pub fn add_enabled_listener(
        &self,
        action: ActionType,
        listener: &Rc<dyn ActionEnabledListener>,
    ) -> bool {
        let mut map = self.enabled.borrow_mut();
        let entries = map.entry(action).or_default();
        if entries
            .iter()
            .any(|w| w.upgrade().is_some_and(|l| Rc::ptr_eq(&l, listener)))
        {
            return false;
        }
        entries.push(Rc::downgrade(listener));
        true
    }

    /// Removes `listener` from every action. Safe to call repeatedly.
    pub fn remove_enabled_listener(&self, listener: &Rc<dyn ActionEnabledListener>) {
        let target = Rc::downgrade(listener);
        for entries in self.enabled.borrow_mut().values_mut() {
            entries.retain(|w| !Weak::ptr_eq(w, &target) && w.strong_count() > 0);
        }
    }

    /// Registers `listener` for `group`. Returns `false` if it was already
    /// registered for that group.
    pub fn add_selection_listener(
        &self,
        group: ActionGroup,
        listener: &Rc<dyn ActionSelectionListener>,
    ) -> bool {
        let mut map = self.selection.borrow_mut();
        let entries = map.entry(group).or_default();
        if entries
            .iter()
            .any(|w| w.upgrade().is_some_and(|l| Rc::ptr_eq(&l, listener)))
        {
            return false;
        }
        entries.push(Rc::downgrade(listener));
        true
    }

    /// Removes `listener` from every group. Safe to call repeatedly.
    pub fn remove_selection_listener(&self, listener: &Rc<dyn ActionSelectionListener>) {
        let target = Rc::downgrade(listener);
        for entries in self.selection.borrow_mut().values_mut() {
            entries.retain(|w| !Weak::ptr_eq(w, &target) && w.strong_count() > 0);
        }
    }

    /// Notifies the listeners registered for `action`, in registration order.
    pub fn fire_enabled(&self, action: ActionType, enabled: bool) {
        let Some(_guard) = DispatchGuard::enter(self, InFlight::Enabled(action)) else {
            return;
        };
        for listener in Self::snapshot(&self.enabled, &action) {
            listener.action_enabled(action, enabled);
        }
    }

    /// Notifies the listeners registered for `group`, in registration order.
    pub fn fire_selected(&self, group: ActionGroup, action: ActionType) {
        let Some(_guard) = DispatchGuard::enter(self, InFlight::Selected(group)) else {
            return;
        };
        for listener in Self::snapshot(&self.selection, &group) {
            listener.action_selected(group, action);
        }
    }

    /// Number of live listeners registered for `action`.
    pub fn enabled_listener_count(&self, action: ActionType) -> usize {
        self.enabled
            .borrow()
            .get(&action)
            .map_or(0, |v| v.iter().filter(|w| w.strong_count() > 0).count())
    }

    /// Number of live listeners registered for `group`.
    pub fn selection_listener_count(&self, group: ActionGroup) -> usize {
        self.selection
            .borrow()
            .get(&group)
            .map_or(0, |v| v.iter().filter(|w| w.strong_count() > 0).count())
    }

    // Upgrades the live entries for `key` and prunes the dead ones. The
    // returned list is detached from the map so listeners may register or
    // unregister while being notified.
    fn snapshot<K, L>(map: &RefCell<HashMap<K, Vec<Weak<L>>>>, key: &K) -> Vec<Rc<L>>
    where
        K: std::hash::Hash + Eq,
        L: ?Sized,
    {
        let mut map = map.borrow_mut();
        let Some(entries) = map.get_mut(key) else {
            return Vec::new();
        };
        entries.retain(|w| w.strong_count() > 0);
        entries.iter().filter_map(Weak::upgrade).collect()
    }
}

/// Marks a key as being dispatched until dropped, including on unwind.
struct DispatchGuard<'a> {
    hub: &'a ActionBroadcaster,
    key: InFlight,
}

impl<'a> DispatchGuard<'a> {
    fn enter(hub: &'a ActionBroadcaster, key: InFlight) -> Option<Self> {
        if !hub.in_flight.borrow_mut().insert(key) {
            log::debug!("Dropping nested action broadcast for {:?}", key);
            return None;
        }
        Some(Self { hub, key })
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.hub.in_flight.borrow_mut().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        enabled: RefCell<Vec<(ActionType, bool)>>,
        selected: RefCell<Vec<(ActionGroup, ActionType)>>,
    }

    impl ActionEnabledListener for Recorder {
        fn action_enabled(&self, action: ActionType, enabled: bool) {
            self.enabled.borrow_mut().push((action, enabled));
        }
    }

    impl ActionSelectionListener for Recorder {
        fn action_selected(&self, group: ActionGroup, action: ActionType) {
            self.selected.borrow_mut().push((group, action));
        }
    }

    #[test]
    fn selection_reaches_only_matching_group() {
        let hub = ActionBroadcaster::new();
        let eraser = Rc::new(Recorder::default());
        let size = Rc::new(Recorder::default());
        let eraser_dyn: Rc<dyn ActionSelectionListener> = eraser.clone();
        let size_dyn: Rc<dyn ActionSelectionListener> = size.clone();
        hub.add_selection_listener(ActionGroup::EraserMode, &eraser_dyn);
        hub.add_selection_listener(ActionGroup::Size, &size_dyn);

        hub.fire_selected(ActionGroup::EraserMode, ActionType::EraserWhiteout);

        assert_eq!(
            *eraser.selected.borrow(),
            vec![(ActionGroup::EraserMode, ActionType::EraserWhiteout)]
        );
        assert!(size.selected.borrow().is_empty());
    }

    #[test]
    fn enabled_reaches_only_matching_action() {
        let hub = ActionBroadcaster::new();
        let rec = Rc::new(Recorder::default());
        let rec_dyn: Rc<dyn ActionEnabledListener> = rec.clone();
        hub.add_enabled_listener(ActionType::Fill, &rec_dyn);

        hub.fire_enabled(ActionType::Fill, false);
        hub.fire_enabled(ActionType::SelectColor, true);

        assert_eq!(*rec.enabled.borrow(), vec![(ActionType::Fill, false)]);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let hub = ActionBroadcaster::new();
        let rec = Rc::new(Recorder::default());
        let rec_dyn: Rc<dyn ActionSelectionListener> = rec.clone();
        assert!(hub.add_selection_listener(ActionGroup::Tool, &rec_dyn));
        assert!(!hub.add_selection_listener(ActionGroup::Tool, &rec_dyn));

        hub.fire_selected(ActionGroup::Tool, ActionType::Tool(ToolKind::Pen));
        assert_eq!(rec.selected.borrow().len(), 1);
    }

    #[test]
    fn remove_is_idempotent_and_drop_unregisters() {
        let hub = ActionBroadcaster::new();
        let kept = Rc::new(Recorder::default());
        let kept_dyn: Rc<dyn ActionSelectionListener> = kept.clone();
        hub.add_selection_listener(ActionGroup::Size, &kept_dyn);
        hub.remove_selection_listener(&kept_dyn);
        hub.remove_selection_listener(&kept_dyn);
        assert_eq!(hub.selection_listener_count(ActionGroup::Size), 0);

        {
            let temp: Rc<dyn ActionSelectionListener> = Rc::new(Recorder::default());
            hub.add_selection_listener(ActionGroup::Size, &temp);
            assert_eq!(hub.selection_listener_count(ActionGroup::Size), 1);
        }
        assert_eq!(hub.selection_listener_count(ActionGroup::Size), 0);
        hub.fire_selected(ActionGroup::Size, ActionType::Size(ToolSize::Fine));
        assert!(kept.selected.borrow().is_empty());
    }

    #[test]
    fn fan_out_follows_registration_order() {
        struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);
        impl ActionSelectionListener for Tagged {
            fn action_selected(&self, _: ActionGroup, _: ActionType) {
                self.1.borrow_mut().push(self.0);
            }
        }

        let hub = ActionBroadcaster::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let listeners: Vec<Rc<dyn ActionSelectionListener>> = ["a", "b", "c"]
            .into_iter()
            .map(|tag| Rc::new(Tagged(tag, log.clone())) as Rc<dyn ActionSelectionListener>)
            .collect();
        for l in &listeners {
            hub.add_selection_listener(ActionGroup::Tool, l);
        }

        hub.fire_selected(ActionGroup::Tool, ActionType::NotSelected);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn nested_fire_is_dropped() {
        struct Echo {
            hub: Rc<ActionBroadcaster>,
            calls: Cell<u32>,
        }
        impl ActionSelectionListener for Echo {
            fn action_selected(&self, group: ActionGroup, action: ActionType) {
                self.calls.set(self.calls.get() + 1);
                self.hub.fire_selected(group, action);
            }
        }

        let hub = ActionBroadcaster::new();
        let echo = Rc::new(Echo {
            hub: hub.clone(),
            calls: Cell::new(0),
        });
        let echo_dyn: Rc<dyn ActionSelectionListener> = echo.clone();
        hub.add_selection_listener(ActionGroup::Color, &echo_dyn);

        hub.fire_selected(ActionGroup::Color, ActionType::SelectColor);
        assert_eq!(echo.calls.get(), 1);

        hub.fire_selected(ActionGroup::Color, ActionType::SelectColor);
        assert_eq!(echo.calls.get(), 2);
    }

    #[test]
    fn nested_fire_for_other_keys_is_delivered() {
        struct Cascade {
            hub: Rc<ActionBroadcaster>,
        }
        impl ActionSelectionListener for Cascade {
            fn action_selected(&self, group: ActionGroup, action: ActionType) {
                self.hub.fire_enabled(ActionType::Fill, true);
                self.hub.fire_selected(ActionGroup::Size, ActionType::Size(ToolSize::Thick));
                self.hub.fire_selected(group, action);
            }
        }

        let hub = ActionBroadcaster::new();
        let cascade: Rc<dyn ActionSelectionListener> = Rc::new(Cascade { hub: hub.clone() });
        let rec = Rc::new(Recorder::default());
        let rec_enabled: Rc<dyn ActionEnabledListener> = rec.clone();
        let rec_selected: Rc<dyn ActionSelectionListener> = rec.clone();
        hub.add_selection_listener(ActionGroup::Tool, &cascade);
        hub.add_selection_listener(ActionGroup::Tool, &rec_selected);
        hub.add_selection_listener(ActionGroup::Size, &rec_selected);
        hub.add_enabled_listener(ActionType::Fill, &rec_enabled);

        hub.fire_selected(ActionGroup::Tool, ActionType::Tool(ToolKind::Pen));

        assert_eq!(*rec.enabled.borrow(), vec![(ActionType::Fill, true)]);
        // The Tool echo is dropped; the recorder sees the original once.
        assert_eq!(
            *rec.selected.borrow(),
            vec![
                (ActionGroup::Size, ActionType::Size(ToolSize::Thick)),
                (ActionGroup::Tool, ActionType::Tool(ToolKind::Pen)),
            ]
        );
    }

    #[test]
    fn panicking_listener_does_not_wedge_the_key() {
        struct Boom;
        impl ActionEnabledListener for Boom {
            fn action_enabled(&self, _: ActionType, _: bool) {
                panic!("listener failure");
            }
        }

        let hub = ActionBroadcaster::new();
        let boom: Rc<dyn ActionEnabledListener> = Rc::new(Boom);
        hub.add_enabled_listener(ActionType::Fill, &boom);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            hub.fire_enabled(ActionType::Fill, true);
        }));
        assert!(result.is_err());

        hub.remove_enabled_listener(&boom);
        let rec = Rc::new(Recorder::default());
        let rec_dyn: Rc<dyn ActionEnabledListener> = rec.clone();
        hub.add_enabled_listener(ActionType::Fill, &rec_dyn);
        hub.fire_enabled(ActionType::Fill, false);
        assert_eq!(*rec.enabled.borrow(), vec![(ActionType::Fill, false)]);
    }

    #[test]
    fn eraser_mode_actions() {
        assert_eq!(
            ActionType::for_eraser_mode(EraserMode::DeleteStroke),
            ActionType::EraserDeleteStroke
        );
        assert_eq!(
            ActionType::for_eraser_mode(EraserMode::None),
            ActionType::EraserStandard
        );
    }
}
