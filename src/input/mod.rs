//! Tool-state machine driven by UI input.
//!
//! The [`ActiveToolTracker`] resolves which tool configuration applies to the
//! current input source: the toolbar pick, or the private tool of a stylus,
//! mouse, eraser or touch [`ButtonSlot`].

pub mod button;
pub mod tracker;

pub use button::ButtonSlot;
pub use tracker::{ActiveToolTracker, SelectedRole, SharedTracker, ToolRef, WeakTracker};
