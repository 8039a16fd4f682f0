//! Durable key-value settings storage.
//!
//! One stable string key per setting, values stored as strings in a flat
//! JSON object on disk. Each key is read independently with a typed
//! fallback, so a corrupt or out-of-range value degrades to its default
//! instead of taking the whole configuration down with it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bevy::log::{error, info, warn};

/// Stored key for the grid column count.
pub const KEY_GRID_COLUMNS: &str = "grid_columns";

/// Stored key for the dynamic-columns flag ("0"/"1").
pub const KEY_DYNAMIC_COLUMNS: &str = "dynamic_columns";

/// Stored key for the horizontal gap between cells in pixels.
pub const KEY_GRID_GAP_H: &str = "grid_gap_h";

/// Stored key for the vertical gap between cells in pixels.
pub const KEY_GRID_GAP_V: &str = "grid_gap_v";

/// Stored key for the most recently loaded page file.
pub const KEY_LAST_PAGE_PATH: &str = "last_page_path";

/// Flat string-to-string store persisted as a JSON object.
///
/// Every mutation writes the whole file through to disk immediately, so
/// storage and in-memory state never diverge for longer than one write.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Open the store at `path`, reading existing values if present.
    /// A missing or corrupt file yields an empty store; per-key defaults
    /// apply on read.
    pub fn open(path: PathBuf) -> Self {
        let values = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<BTreeMap<String, String>>(&json) {
                    Ok(values) => {
                        info!("Loaded {} settings from {:?}", values.len(), path);
                        values
                    }
                    Err(e) => {
                        warn!("Failed to parse settings file, starting empty: {}", e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!("Failed to read settings file, starting empty: {}", e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Self { path, values }
    }

    /// An empty store bound to `path` without touching the filesystem.
    /// Used for resource initialization before the startup load runs.
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a key and write through to disk.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
        self.save();
    }

    /// Remove a key and write through to disk.
    pub fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.save();
        }
    }

    fn save(&self) {
        match serde_json::to_string_pretty(&self.values) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    error!("Failed to save settings to {:?}: {}", self.path, e);
                }
            }
            Err(e) => {
                error!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Integer getter: parses the stored string as a number, rounds it and
    /// clamps into `[min, max]`. Anything unparsable falls back to `default`.
    pub fn get_int_clamped(&self, key: &str, default: i64, min: i64, max: i64) -> i64 {
        match self.get(key).map(str::trim).and_then(|s| s.parse::<f64>().ok()) {
            Some(value) if value.is_finite() => (value.round() as i64).clamp(min, max),
            _ => default,
        }
    }

    /// Boolean getter: "1" is true, "0" is false, anything else falls back
    /// to `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).map(str::trim) {
            Some("1") => true,
            Some("0") => false,
            _ => default,
        }
    }

    /// Store a boolean as "0"/"1".
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, if value { "1" } else { "0" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store at a fresh temp path, removing any leftover file first.
    fn temp_store(name: &str) -> SettingsStore {
        let path = std::env::temp_dir().join(format!(
            "hearthboard_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        SettingsStore::open(path)
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let store = temp_store("missing");
        assert!(store.get(KEY_GRID_COLUMNS).is_none());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = temp_store("set_get");
        store.set(KEY_GRID_COLUMNS, "3");
        assert_eq!(store.get(KEY_GRID_COLUMNS), Some("3"));
    }

    #[test]
    fn test_roundtrip_survives_reopen() {
        let mut store = temp_store("roundtrip");
        let path = store.path.clone();
        store.set(KEY_GRID_COLUMNS, "3");
        store.set_bool(KEY_DYNAMIC_COLUMNS, false);

        let reopened = SettingsStore::open(path);
        assert_eq!(reopened.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 3);
        assert!(!reopened.get_bool(KEY_DYNAMIC_COLUMNS, true));
    }

    #[test]
    fn test_corrupt_file_yields_empty_store() {
        let mut store = temp_store("corrupt");
        let path = store.path.clone();
        store.set(KEY_GRID_COLUMNS, "3");
        std::fs::write(&path, "{ not json").unwrap();

        let reopened = SettingsStore::open(path);
        assert_eq!(reopened.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 4);
    }

    #[test]
    fn test_remove_deletes_key() {
        let mut store = temp_store("remove");
        store.set(KEY_LAST_PAGE_PATH, "/tmp/page.json");
        store.remove(KEY_LAST_PAGE_PATH);
        assert!(store.get(KEY_LAST_PAGE_PATH).is_none());
    }

    // get_int_clamped tests
    #[test]
    fn test_get_int_missing_key_uses_default() {
        let store = temp_store("int_default");
        assert_eq!(store.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 4);
    }

    #[test]
    fn test_get_int_non_numeric_uses_default() {
        let mut store = temp_store("int_garbage");
        store.set(KEY_GRID_COLUMNS, "many");
        assert_eq!(store.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 4);
    }

    #[test]
    fn test_get_int_out_of_range_is_clamped() {
        let mut store = temp_store("int_clamp");
        store.set(KEY_GRID_COLUMNS, "12");
        assert_eq!(store.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 5);
        store.set(KEY_GRID_COLUMNS, "-2");
        assert_eq!(store.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 1);
    }

    #[test]
    fn test_get_int_fractional_is_rounded() {
        let mut store = temp_store("int_round");
        store.set(KEY_GRID_COLUMNS, "2.6");
        assert_eq!(store.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 3);
    }

    #[test]
    fn test_get_int_tolerates_whitespace() {
        let mut store = temp_store("int_ws");
        store.set(KEY_GRID_COLUMNS, " 2 ");
        assert_eq!(store.get_int_clamped(KEY_GRID_COLUMNS, 4, 1, 5), 2);
    }

    // get_bool tests
    #[test]
    fn test_get_bool_zero_one() {
        let mut store = temp_store("bool");
        store.set(KEY_DYNAMIC_COLUMNS, "1");
        assert!(store.get_bool(KEY_DYNAMIC_COLUMNS, false));
        store.set(KEY_DYNAMIC_COLUMNS, "0");
        assert!(!store.get_bool(KEY_DYNAMIC_COLUMNS, true));
    }

    #[test]
    fn test_get_bool_garbage_uses_default() {
        let mut store = temp_store("bool_garbage");
        store.set(KEY_DYNAMIC_COLUMNS, "yes");
        assert!(store.get_bool(KEY_DYNAMIC_COLUMNS, true));
        assert!(!store.get_bool(KEY_DYNAMIC_COLUMNS, false));
    }
}
