//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels (also the viewport width before the first resize)
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest allowed grid column count
pub const MIN_GRID_COLUMNS: usize = 1;

/// Largest allowed grid column count
pub const MAX_GRID_COLUMNS: usize = 5;

/// Column count used when nothing is stored yet
pub const DEFAULT_GRID_COLUMNS: usize = 4;

/// Default horizontal/vertical gap between grid cells in pixels
pub const DEFAULT_GRID_GAP: u32 = 20;

/// Below this width the dashboard is in mobile mode (hard ceiling of 2 columns)
pub const MOBILE_BREAKPOINT: f32 = 640.0;

/// Upper edge of the compact-cards band; widths in
/// [`MOBILE_BREAKPOINT`, `COMPACT_CARDS_BREAKPOINT`) use denser card styling
pub const COMPACT_CARDS_BREAKPOINT: f32 = 860.0;

/// Height of a single grid row in pixels when rendering cards
pub const CARD_ROW_HEIGHT: f32 = 120.0;

/// Row height used inside the compact-cards band
pub const CARD_ROW_HEIGHT_COMPACT: f32 = 96.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_bounds_ordered() {
        assert!(MIN_GRID_COLUMNS <= DEFAULT_GRID_COLUMNS);
        assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    }

    #[test]
    fn test_compact_band_wider_than_mobile() {
        assert!(MOBILE_BREAKPOINT < COMPACT_CARDS_BREAKPOINT);
    }
}
