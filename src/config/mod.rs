mod storage;

pub use storage::{
    SettingsStore, KEY_DYNAMIC_COLUMNS, KEY_GRID_COLUMNS, KEY_GRID_GAP_H, KEY_GRID_GAP_V,
    KEY_LAST_PAGE_PATH,
};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_GRID_COLUMNS, DEFAULT_GRID_GAP, MAX_GRID_COLUMNS, MIN_GRID_COLUMNS,
};
use crate::layout::normalize_user_columns;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Canonical grid configuration, backed by the settings store.
///
/// Owned by the page context and mutated only through the setters below;
/// every setter normalizes its input and writes through to storage before
/// updating the in-memory value.
#[derive(Resource)]
pub struct GridConfig {
    /// User-chosen column count, always within [1, 5].
    pub columns: usize,
    /// When true, the effective column count is capped by the
    /// viewport-width suggestion.
    pub dynamic_columns: bool,
    /// Horizontal gap between cells in pixels (rendering-only).
    pub gap_h: u32,
    /// Vertical gap between cells in pixels (rendering-only).
    pub gap_v: u32,
    /// Most recently loaded page file, remembered for the next launch.
    pub last_page_path: Option<PathBuf>,
    store: SettingsStore,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            dynamic_columns: true,
            gap_h: DEFAULT_GRID_GAP,
            gap_v: DEFAULT_GRID_GAP,
            last_page_path: None,
            store: SettingsStore::empty(crate::paths::settings_file()),
        }
    }
}

impl GridConfig {
    /// Build a config by reading each key independently with its typed
    /// fallback. Never errors; bad values become defaults.
    pub fn from_store(store: SettingsStore) -> Self {
        let columns = store.get_int_clamped(
            KEY_GRID_COLUMNS,
            DEFAULT_GRID_COLUMNS as i64,
            MIN_GRID_COLUMNS as i64,
            MAX_GRID_COLUMNS as i64,
        ) as usize;
        let dynamic_columns = store.get_bool(KEY_DYNAMIC_COLUMNS, true);
        let gap_h =
            store.get_int_clamped(KEY_GRID_GAP_H, DEFAULT_GRID_GAP as i64, 0, u32::MAX as i64)
                as u32;
        let gap_v =
            store.get_int_clamped(KEY_GRID_GAP_V, DEFAULT_GRID_GAP as i64, 0, u32::MAX as i64)
                as u32;
        let last_page_path = store.get(KEY_LAST_PAGE_PATH).map(PathBuf::from);

        Self {
            columns,
            dynamic_columns,
            gap_h,
            gap_v,
            last_page_path,
            store,
        }
    }

    /// Set the column count. The raw value is rounded and clamped into
    /// [1, 5] before it is stored.
    pub fn set_columns(&mut self, raw: f64) {
        let columns = normalize_user_columns(raw);
        self.store.set(KEY_GRID_COLUMNS, columns.to_string());
        self.columns = columns;
    }

    pub fn set_dynamic_columns(&mut self, enabled: bool) {
        self.store.set_bool(KEY_DYNAMIC_COLUMNS, enabled);
        self.dynamic_columns = enabled;
    }

    pub fn set_gaps(&mut self, horizontal: u32, vertical: u32) {
        self.store.set(KEY_GRID_GAP_H, horizontal.to_string());
        self.store.set(KEY_GRID_GAP_V, vertical.to_string());
        self.gap_h = horizontal;
        self.gap_v = vertical;
    }

    pub fn set_last_page_path(&mut self, path: Option<PathBuf>) {
        match &path {
            Some(p) => self
                .store
                .set(KEY_LAST_PAGE_PATH, p.to_string_lossy().to_string()),
            None => self.store.remove(KEY_LAST_PAGE_PATH),
        }
        self.last_page_path = path;
    }
}

/// Message to set the grid column count
#[derive(Message)]
pub struct SetGridColumnsRequest {
    pub columns: f64,
}

/// Message to toggle dynamic columns
#[derive(Message)]
pub struct SetDynamicColumnsRequest {
    pub enabled: bool,
}

/// Message to set both cell gaps
#[derive(Message)]
pub struct SetGridGapRequest {
    pub horizontal: u32,
    pub vertical: u32,
}

/// Startup system to load stored settings into the existing resource
fn load_config_system(mut config: ResMut<GridConfig>) {
    if let Err(e) = crate::paths::ensure_directories() {
        warn!("Failed to create application directories: {}", e);
    }

    *config = GridConfig::from_store(SettingsStore::open(crate::paths::settings_file()));
    info!(
        "Grid configuration loaded: {} columns (dynamic: {}), gaps {}x{}",
        config.columns, config.dynamic_columns, config.gap_h, config.gap_v
    );
}

/// System to apply column count changes
fn set_grid_columns_system(
    mut events: MessageReader<SetGridColumnsRequest>,
    mut config: ResMut<GridConfig>,
) {
    for event in events.read() {
        config.set_columns(event.columns);
        info!("Grid columns set to {}", config.columns);
    }
}

/// System to apply dynamic-columns toggles
fn set_dynamic_columns_system(
    mut events: MessageReader<SetDynamicColumnsRequest>,
    mut config: ResMut<GridConfig>,
) {
    for event in events.read() {
        config.set_dynamic_columns(event.enabled);
        info!("Dynamic columns set to {}", config.dynamic_columns);
    }
}

/// System to apply gap changes
fn set_grid_gap_system(
    mut events: MessageReader<SetGridGapRequest>,
    mut config: ResMut<GridConfig>,
) {
    for event in events.read() {
        config.set_gaps(event.horizontal, event.vertical);
        info!("Grid gaps set to {}x{}", config.gap_h, config.gap_v);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridConfig>()
            .add_message::<SetGridColumnsRequest>()
            .add_message::<SetDynamicColumnsRequest>()
            .add_message::<SetGridGapRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_grid_columns_system.run_if(on_message::<SetGridColumnsRequest>),
                    set_dynamic_columns_system.run_if(on_message::<SetDynamicColumnsRequest>),
                    set_grid_gap_system.run_if(on_message::<SetGridGapRequest>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SettingsStore {
        let path = std::env::temp_dir().join(format!(
            "hearthboard_config_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        SettingsStore::open(path)
    }

    #[test]
    fn test_defaults_when_store_is_empty() {
        let config = GridConfig::from_store(temp_store("defaults"));
        assert_eq!(config.columns, DEFAULT_GRID_COLUMNS);
        assert!(config.dynamic_columns);
        assert_eq!(config.gap_h, DEFAULT_GRID_GAP);
        assert_eq!(config.gap_v, DEFAULT_GRID_GAP);
        assert!(config.last_page_path.is_none());
    }

    #[test]
    fn test_setters_write_through_and_survive_reload() {
        let mut store = temp_store("write_through");
        let path = std::env::temp_dir().join(format!(
            "hearthboard_config_write_through_{}.json",
            std::process::id()
        ));
        store.set(KEY_GRID_COLUMNS, "4");

        let mut config = GridConfig::from_store(store);
        config.set_columns(2.0);
        config.set_dynamic_columns(false);
        config.set_gaps(8, 12);

        let reloaded = GridConfig::from_store(SettingsStore::open(path));
        assert_eq!(reloaded.columns, 2);
        assert!(!reloaded.dynamic_columns);
        assert_eq!(reloaded.gap_h, 8);
        assert_eq!(reloaded.gap_v, 12);
    }

    #[test]
    fn test_set_columns_normalizes_input() {
        let mut config = GridConfig::from_store(temp_store("normalize"));
        config.set_columns(9.0);
        assert_eq!(config.columns, MAX_GRID_COLUMNS);
        config.set_columns(0.2);
        assert_eq!(config.columns, MIN_GRID_COLUMNS);
        config.set_columns(2.5);
        assert_eq!(config.columns, 3);
    }

    #[test]
    fn test_invalid_stored_columns_reads_as_default() {
        let mut store = temp_store("invalid_columns");
        store.set(KEY_GRID_COLUMNS, "lots");
        let config = GridConfig::from_store(store);
        assert_eq!(config.columns, DEFAULT_GRID_COLUMNS);
    }

    #[test]
    fn test_out_of_range_stored_columns_is_clamped() {
        let mut store = temp_store("clamped_columns");
        store.set(KEY_GRID_COLUMNS, "11");
        let config = GridConfig::from_store(store);
        assert_eq!(config.columns, MAX_GRID_COLUMNS);
    }

    #[test]
    fn test_negative_stored_gap_reads_as_zero() {
        let mut store = temp_store("negative_gap");
        store.set(KEY_GRID_GAP_H, "-5");
        let config = GridConfig::from_store(store);
        assert_eq!(config.gap_h, 0);
    }

    #[test]
    fn test_last_page_path_roundtrip() {
        let mut store = temp_store("last_page");
        let path = std::env::temp_dir().join(format!(
            "hearthboard_config_last_page_{}.json",
            std::process::id()
        ));
        store.set(KEY_GRID_COLUMNS, "4");

        let mut config = GridConfig::from_store(store);
        config.set_last_page_path(Some(PathBuf::from("/tmp/livingroom.json")));

        let reloaded = GridConfig::from_store(SettingsStore::open(path.clone()));
        assert_eq!(
            reloaded.last_page_path,
            Some(PathBuf::from("/tmp/livingroom.json"))
        );

        let mut config = reloaded;
        config.set_last_page_path(None);
        let reloaded = GridConfig::from_store(SettingsStore::open(path));
        assert!(reloaded.last_page_path.is_none());
    }
}
