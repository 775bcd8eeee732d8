// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Saved calculator settings.
//!
//! A `Settings` value is the raw input of the calculator: the gear lists as
//! typed, the leadscrew and the include-all flag. The store keeps any number
//! of them by name in one JSON file. The search never reads the store; a
//! front end turns a `Settings` into a `GearPool` and `Leadscrew` first.

use crate::error::{Error, Result};
use crate::train::gear::{DEFAULT_GEAR_LIST_1, DEFAULT_GEAR_LIST_2};
use crate::train::{GearPool, Leadscrew};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Calculator input, as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Comma-separated gear lists, concatenated in order.
    pub gear_lists: Vec<String>,
    pub leadscrew: Leadscrew,
    /// Show four-gear trains even when two-gear trains exist.
    #[serde(default)]
    pub include_all: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gear_lists: vec![
                DEFAULT_GEAR_LIST_1.to_string(),
                DEFAULT_GEAR_LIST_2.to_string(),
                String::new(),
            ],
            leadscrew: Leadscrew::default(),
            include_all: false,
        }
    }
}

impl Settings {
    pub fn pool(&self) -> GearPool {
        GearPool::from_lists(&self.gear_lists)
    }
}

/// Named settings persisted as a single JSON file.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    entries: BTreeMap<String, Settings>,
}

impl SettingsStore {
    /// Default location: `<config dir>/change-gears/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("change-gears")
            .join("settings.json")
    }

    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "settings loaded");
        Ok(Self { path, entries })
    }

    /// Write the store back to its file, creating parent directories.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "settings saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Result<&Settings> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    /// Add or replace a named entry, returning the one it replaced.
    pub fn insert(&mut self, name: &str, settings: Settings) -> Option<Settings> {
        self.entries.insert(name.to_string(), settings)
    }

    pub fn remove(&mut self, name: &str) -> Result<Settings> {
        self.entries
            .remove(name)
            .ok_or_else(|| Error::UnknownProfile(name.to_string()))
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings_pool() {
        let settings = Settings::default();
        assert_eq!(settings.pool(), GearPool::standard());
        assert_eq!(settings.leadscrew, Leadscrew::imperial());
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::open(dir.path().join("none.json")).unwrap();
        assert_eq!(store.names().count(), 0);
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::open(&path).unwrap();
        let metric = Settings {
            gear_lists: vec!["20,30,40".into(), "60".into()],
            leadscrew: Leadscrew::Metric,
            include_all: true,
        };
        assert!(store.insert("metric", metric.clone()).is_none());
        store.insert("default", Settings::default());
        store.save().unwrap();

        let store = SettingsStore::open(&path).unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["default", "metric"]);
        assert_eq!(store.get("metric").unwrap(), &metric);
    }

    #[test]
    fn test_unknown_name() {
        let dir = TempDir::new().unwrap();
        let mut store = SettingsStore::open(dir.path().join("s.json")).unwrap();
        assert!(matches!(store.get("lathe"), Err(Error::UnknownProfile(_))));
        assert!(matches!(store.remove("lathe"), Err(Error::UnknownProfile(_))));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(SettingsStore::open(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_include_all_defaults_to_false() {
        let settings: Settings =
            serde_json::from_str(r#"{"gear_lists":["20,40"],"leadscrew":{"kind":"metric"}}"#).unwrap();
        assert!(!settings.include_all);
    }
}
