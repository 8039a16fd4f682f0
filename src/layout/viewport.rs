use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::GridConfig;
use crate::constants::{
    COMPACT_CARDS_BREAKPOINT, DEFAULT_GRID_COLUMNS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MOBILE_BREAKPOINT,
};

use super::columns::resolve_columns;

/// Current viewport geometry and everything derived from it.
///
/// Refreshed from the primary window every frame, but only written when a
/// value actually changed, so resource change detection doubles as resize
/// coalescing: a burst of resize events collapses into at most one layout
/// recompute per frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Effective column count after user preference and responsive clamping.
    pub columns: usize,
    /// Width below the mobile breakpoint.
    pub is_mobile: bool,
    /// Width inside the band that uses denser card styling.
    pub is_compact_cards: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        derive_viewport(
            DEFAULT_WINDOW_WIDTH,
            DEFAULT_WINDOW_HEIGHT,
            DEFAULT_GRID_COLUMNS,
            true,
        )
    }
}

/// Pure derivation of viewport state from raw inputs. Safe to call on every
/// resize tick; it accumulates nothing.
pub fn derive_viewport(
    width: f32,
    height: f32,
    user_columns: usize,
    dynamic_columns: bool,
) -> Viewport {
    Viewport {
        width,
        height,
        columns: resolve_columns(user_columns, dynamic_columns, width),
        is_mobile: width < MOBILE_BREAKPOINT,
        is_compact_cards: (MOBILE_BREAKPOINT..COMPACT_CARDS_BREAKPOINT).contains(&width),
    }
}

/// Refresh the viewport from the primary window and the grid configuration.
pub fn update_viewport(
    window_query: Query<&Window, With<PrimaryWindow>>,
    config: Res<GridConfig>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let next = derive_viewport(
        window.width(),
        window.height(),
        config.columns,
        config.dynamic_columns,
    );

    if *viewport != next {
        debug!(
            "viewport: {:.0}x{:.0} -> {} columns (mobile: {}, compact: {})",
            next.width, next.height, next.columns, next.is_mobile, next.is_compact_cards
        );
        *viewport = next;
    }
}
