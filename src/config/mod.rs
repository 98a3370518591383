//! Settings persistence for tooldeck.
//!
//! Tool settings live in a hierarchical key-value store (see [`SettingsStore`]).
//! The file-backed store keeps them in `~/.config/tooldeck/tools.toml`:
//!
//! ```toml
//! [tools]
//! current = "pen"
//!
//! [tools.pen]
//! color = 3355596
//! drawingType = "default"
//! size = "MEDIUM"
//! fill = 0
//! fillAlpha = 128
//! style = "plain"
//!
//! [tools.eraser]
//! drawingType = "default"
//! size = "MEDIUM"
//! type = "default"
//! ```
//!
//! If no settings file exists, factory defaults are used.

pub mod codec;
pub mod schema;
pub mod store;
pub mod toml_store;

pub use schema::{ToolEntry, ToolSettingsFile, ToolsSection};
pub use store::{MemoryStore, SettingsStore, Value};
pub use toml_store::{SettingsFileError, TomlStore};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns the default settings file path, `<config_dir>/tooldeck/tools.toml`.
///
/// # Errors
/// Returns an error if the config directory cannot be determined (e.g., HOME not set).
pub fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not find config directory")?
        .join("tooldeck");

    Ok(config_dir.join("tools.toml"))
}

/// Resolves `explicit` or falls back to [`settings_path`].
pub fn resolve_settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => settings_path(),
    }
}

/// Loads the store at `path`; a missing file yields an empty store.
pub fn load_store(path: &Path) -> Result<TomlStore> {
    TomlStore::load(path).with_context(|| format!("Failed to load settings {}", path.display()))
}

/// Writes `store` to `path`, creating the parent directory.
pub fn save_store(store: &TomlStore, path: &Path) -> Result<()> {
    store
        .save(path)
        .with_context(|| format!("Failed to save settings {}", path.display()))
}
