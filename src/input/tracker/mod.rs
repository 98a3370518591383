mod core;
mod persist;
mod selection;
mod settings;
mod shared;

pub use core::{ActiveToolTracker, SelectedRole, ToolRef};
pub use shared::{SharedTracker, WeakTracker};
