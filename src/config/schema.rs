//! Typed view of the on-disk settings document, used to publish its JSON
//! schema and to validate hand-edited files.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of `tools.toml`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolSettingsFile {
    #[serde(default)]
    pub tools: ToolsSection,
}

/// The `[tools]` table.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolsSection {
    /// Name of the toolbar-selected tool, e.g. `pen`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    /// One `[tools.<name>]` table per tool.
    #[serde(flatten)]
    pub entries: BTreeMap<String, ToolEntry>,
}

/// Settings of a single tool. Which keys are present depends on the tool's
/// capabilities.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToolEntry {
    /// Packed `0xRRGGBB` color, `-1` for none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,

    /// Drawing sub-type, e.g. `default`, `rectangle`, `spline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing_type: Option<String>,

    /// One of VERY_FINE, FINE, MEDIUM, THICK, VERY_THICK.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Fill enabled flag (0 or 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<i64>,

    /// Fill opacity, 0-255.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_alpha: Option<i64>,

    /// Dash pattern: plain, dash, dashdot, dot or `cust: <d1> <d2> ...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Eraser mode: default, whiteout or deleteStroke.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub eraser_type: Option<String>,
}

impl ToolSettingsFile {
    /// JSON schema of the settings document.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(ToolSettingsFile)
    }
}
