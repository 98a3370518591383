//! Maps the tool registry to and from a [`SettingsStore`].
//!
//! Layout under the `tools` root:
//!
//! ```text
//! tools/current              string  toolbar-selected tool name
//! tools/<name>/color         int     tools with the color capability
//! tools/<name>/drawingType   string  every tool
//! tools/<name>/size          string  tools with the size capability
//! tools/<name>/fill          int     pen and highlighter (0/1)
//! tools/<name>/fillAlpha     int     pen and highlighter
//! tools/<name>/style         string  pen only
//! tools/<name>/type          string  eraser only
//! ```

use super::store::SettingsStore;
use crate::draw::{Color, LineStyle};
use crate::tool::{
    DrawingType, EraserMode, Tool, ToolCapability, ToolKind, ToolRegistry, ToolSize,
};
use log::warn;

pub const ROOT: &str = "tools";

const CURRENT: &str = "current";
const COLOR: &str = "color";
const DRAWING_TYPE: &str = "drawingType";
const SIZE: &str = "size";
const FILL: &str = "fill";
const FILL_ALPHA: &str = "fillAlpha";
const STYLE: &str = "style";
const ERASER_TYPE: &str = "type";

fn key(tool: &Tool, field: &str) -> String {
    format!("{ROOT}/{}/{field}", tool.name())
}

fn has_fill(kind: ToolKind) -> bool {
    matches!(kind, ToolKind::Pen | ToolKind::Highlighter)
}

/// Replaces the `tools` subtree of `store` with the registry's state.
///
/// `current` is the toolbar-selected kind. A size of `None` or `Custom` is
/// not representable in the store and is skipped.
pub fn save<S>(registry: &ToolRegistry, current: ToolKind, store: &mut S)
where
    S: SettingsStore + ?Sized,
{
    store.remove(ROOT);
    store.set_string(&format!("{ROOT}/{CURRENT}"), current.name());

    registry.for_each(|tool| {
        if tool.has_capability(ToolCapability::Color) {
            store.set_int(&key(tool, COLOR), tool.color().to_setting());
        }

        store.set_string(&key(tool, DRAWING_TYPE), tool.drawing_sub_type().name());

        if tool.has_capability(ToolCapability::Size) {
            if tool.size().is_selectable() {
                store.set_string(&key(tool, SIZE), tool.size().setting_name());
            } else {
                log::debug!(
                    "Not persisting size {} of tool '{}'",
                    tool.size(),
                    tool.name()
                );
            }
        }

        if has_fill(tool.kind()) {
            store.set_int(&key(tool, FILL), i64::from(tool.fill_enabled()));
            store.set_int(&key(tool, FILL_ALPHA), i64::from(tool.fill_alpha()));
        }

        if tool.kind() == ToolKind::Pen {
            store.set_string(&key(tool, STYLE), &tool.line_style().to_string());
        }

        if tool.kind() == ToolKind::Eraser {
            store.set_string(&key(tool, ERASER_TYPE), tool.eraser_mode().name());
        }
    });
}

/// Applies stored values to the registry and returns the stored toolbar
/// selection, if it names a known tool.
///
/// Missing keys leave the current values untouched. Unrecognized symbolic
/// values are logged and fall back to defaults without stopping the load.
pub fn load<S>(registry: &mut ToolRegistry, store: &S) -> Option<ToolKind>
where
    S: SettingsStore + ?Sized,
{
    for kind in ToolKind::ALL {
        load_tool(registry.get_mut(kind), store);
    }

    let name = store.get_string(&format!("{ROOT}/{CURRENT}"))?;
    match name.parse::<ToolKind>() {
        Ok(kind) => Some(kind),
        Err(err) => {
            warn!("Stored current tool ignored: {}", err);
            None
        }
    }
}

fn load_tool<S>(tool: &mut Tool, store: &S)
where
    S: SettingsStore + ?Sized,
{
    if tool.has_capability(ToolCapability::Color) {
        if let Some(value) = store.get_int(&key(tool, COLOR)) {
            tool.set_color(Color::from_setting(value));
        }
    }

    if let Some(value) = store.get_string(&key(tool, DRAWING_TYPE)) {
        let sub_type = value.parse::<DrawingType>().unwrap_or_else(|err| {
            warn!("Tool '{}': {}, using default", tool.name(), err);
            DrawingType::Default
        });
        tool.set_drawing_sub_type(sub_type);
    }

    if tool.has_capability(ToolCapability::Size) {
        if let Some(value) = store.get_string(&key(tool, SIZE)) {
            match value.parse::<ToolSize>() {
                Ok(size) => tool.set_size(size),
                Err(err) => warn!(
                    "Tool '{}': {}, keeping {}",
                    tool.name(),
                    err,
                    tool.size()
                ),
            }
        }
    }

    if has_fill(tool.kind()) {
        let fill = store
            .get_int(&key(tool, FILL))
            .map(|v| v != 0)
            .or_else(|| store.get_bool(&key(tool, FILL)));
        if let Some(enabled) = fill {
            tool.set_fill(enabled);
        }
        if let Some(alpha) = store.get_int(&key(tool, FILL_ALPHA)) {
            let alpha = i32::try_from(alpha).unwrap_or(if alpha < 0 { 0 } else { 255 });
            tool.set_fill_alpha(alpha);
        }
    }

    if tool.kind() == ToolKind::Pen {
        if let Some(value) = store.get_string(&key(tool, STYLE)) {
            let style = value.parse::<LineStyle>().unwrap_or_else(|err| {
                warn!("Tool '{}': {}, using plain", tool.name(), err);
                LineStyle::plain()
            });
            tool.set_line_style(style);
        }
    }

    if tool.kind() == ToolKind::Eraser {
        if let Some(value) = store.get_string(&key(tool, ERASER_TYPE)) {
            let mode = value.parse::<EraserMode>().unwrap_or_else(|err| {
                warn!("Tool '{}': {}, using default", tool.name(), err);
                EraserMode::Default
            });
            tool.set_eraser_mode(mode);
        }
    }
}
