//! Tool model: kinds, capabilities, per-tool configuration and the canonical
//! registry.

pub mod capabilities;
pub mod enums;
pub mod registry;
pub mod types;

pub use capabilities::{ToolCapabilities, ToolCapability};
pub use enums::{DrawingType, EraserMode, ParseError, ToolKind, ToolSize};
pub use registry::{ToolRegistry, default_tool};
pub use types::{DEFAULT_FILL_ALPHA, Tool};
