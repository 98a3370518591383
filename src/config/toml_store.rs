//! File-backed [`SettingsStore`] on top of a TOML document.

use super::store::SettingsStore;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use toml::{Table, Value};

/// Errors reading or writing a settings file.
#[derive(Debug, Error)]
pub enum SettingsFileError {
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse settings from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A TOML table addressed with `/`-separated paths.
///
/// `tools/pen/color` maps to the `color` key of the `[tools.pen]` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlStore {
    root: Table,
}

impl TomlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(root: Table) -> Self {
        Self { root }
    }

    pub fn table(&self) -> &Table {
        &self.root
    }

    /// Parses a TOML document.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        Ok(Self {
            root: toml::from_str::<Table>(text)?,
        })
    }

    /// Reads `path`, or returns an empty store if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsFileError> {
        if !path.exists() {
            info!("Settings file not found, using defaults");
            debug!("Expected settings at: {}", path.display());
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path).map_err(|source| SettingsFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(&text).map_err(|source| SettingsFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded settings from {}", path.display());
        Ok(store)
    }

    /// Writes the document to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SettingsFileError> {
        let write_err = |source| SettingsFileError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(write_err)?;

        info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsFileError> {
        Ok(toml::to_string_pretty(&self.root)?)
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let (parents, key) = split_path(path)?;
        let mut table = &self.root;
        for segment in parents {
            table = table.get(segment)?.as_table()?;
        }
        table.get(key)
    }

    // Walks to the table that holds the last segment, creating intermediate
    // tables. A non-table value in the way is replaced.
    fn parent_table_mut(&mut self, path: &str) -> Option<(&mut Table, String)> {
        let (parents, key) = split_path(path)?;
        let mut table = &mut self.root;
        for segment in parents {
            let slot = table
                .entry(segment.to_string())
                .or_insert(Value::Table(Table::new()));
            if !slot.is_table() {
                warn!(
                    "Settings path '{}': replacing non-table value at '{}'",
                    path, segment
                );
                *slot = Value::Table(Table::new());
            }
            table = slot.as_table_mut()?;
        }
        Some((table, key.to_string()))
    }

    fn insert(&mut self, path: &str, value: Value) {
        match self.parent_table_mut(path) {
            Some((table, key)) => {
                table.insert(key, value);
            }
            None => warn!("Ignoring write to invalid settings path '{}'", path),
        }
    }
}

fn split_path(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    let key = segments.pop()?;
    Some((segments, key))
}

impl SettingsStore for TomlStore {
    fn get_string(&self, path: &str) -> Option<String> {
        self.lookup(path)?.as_str().map(str::to_string)
    }

    fn get_int(&self, path: &str) -> Option<i64> {
        self.lookup(path)?.as_integer()
    }

    fn get_bool(&self, path: &str) -> Option<bool> {
        self.lookup(path)?.as_bool()
    }

    fn set_string(&mut self, path: &str, value: &str) {
        self.insert(path, Value::String(value.to_string()));
    }

    fn set_int(&mut self, path: &str, value: i64) {
        self.insert(path, Value::Integer(value));
    }

    fn set_bool(&mut self, path: &str, value: bool) {
        self.insert(path, Value::Boolean(value));
    }

    fn remove(&mut self, path: &str) {
        let Some((parents, key)) = split_path(path) else {
            return;
        };
        let mut table = &mut self.root;
        for segment in parents {
            match table.get_mut(segment).and_then(Value::as_table_mut) {
                Some(next) => table = next,
                None => return,
            }
        }
        table.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_map_to_tables() {
        let mut store = TomlStore::new();
        store.set_string("tools/current", "pen");
        store.set_int("tools/pen/color", 0x3333CC);
        store.set_bool("tools/pen/fill", true);

        let text = store.to_toml_string().unwrap();
        let reparsed = TomlStore::parse(&text).unwrap();
        assert_eq!(reparsed.get_string("tools/current").as_deref(), Some("pen"));
        assert_eq!(reparsed.get_int("tools/pen/color"), Some(0x3333CC));
        assert_eq!(reparsed.get_bool("tools/pen/fill"), Some(true));
        assert!(text.contains("[tools.pen]"));
    }

    #[test]
    fn missing_and_mistyped_values_are_none() {
        let store = TomlStore::parse("[tools]\ncurrent = 3\n").unwrap();
        assert_eq!(store.get_string("tools/current"), None);
        assert_eq!(store.get_int("tools/current"), Some(3));
        assert_eq!(store.get_int("tools/current/deeper"), None);
        assert_eq!(store.get_int("nothing/here"), None);
    }

    #[test]
    fn invalid_paths_are_ignored() {
        let mut store = TomlStore::new();
        store.set_int("", 1);
        store.set_int("tools//color", 1);
        assert!(store.table().is_empty());
        assert_eq!(store.get_int("tools//color"), None);
    }

    #[test]
    fn writing_below_a_scalar_replaces_it() {
        let mut store = TomlStore::new();
        store.set_int("tools", 5);
        store.set_string("tools/current", "eraser");
        assert_eq!(store.get_string("tools/current").as_deref(), Some("eraser"));
    }

    #[test]
    fn remove_drops_subtree() {
        let mut store = TomlStore::new();
        store.set_string("tools/current", "pen");
        store.set_int("tools/pen/color", 1);
        store.set_int("other", 2);

        store.remove("tools");
        store.remove("tools/pen/color");

        assert_eq!(store.get_int("tools/pen/color"), None);
        assert_eq!(store.get_int("other"), Some(2));
    }

    #[test]
    fn load_of_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlStore::load(&dir.path().join("absent.toml")).unwrap();
        assert!(store.table().is_empty());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[tools\n").unwrap();
        let err = TomlStore::load(&path).unwrap_err();
        assert!(matches!(err, SettingsFileError::Parse { .. }));
    }
}
