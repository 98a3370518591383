//! Tool configuration core for drawing applications.
//!
//! Tracks which editing tool is active, the per-tool settings that apply
//! (color, size, fill, line style, eraser and drawing sub-modes), and how
//! those settings propagate between the toolbar selection and the private
//! tools of stylus, mouse, eraser and touch input. State changes are reported
//! through [`notify`] and persisted through [`config`].

pub mod config;
pub mod draw;
pub mod input;
pub mod notify;
pub mod tool;

pub use input::{ActiveToolTracker, ButtonSlot, SharedTracker};
pub use tool::{Tool, ToolKind, ToolRegistry};
