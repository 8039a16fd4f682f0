//! Responsive column resolution.
//!
//! Maps the current viewport width and the user's column preference to the
//! effective column count used by the placement solver. Breakpoint boundaries
//! always belong to the wider bucket (strict `<` comparisons).

use crate::constants::{MAX_GRID_COLUMNS, MIN_GRID_COLUMNS, MOBILE_BREAKPOINT};

/// Hard ceiling on how many columns the viewport can support, regardless of
/// what the user asked for.
pub fn max_columns_for_width(width: f32) -> usize {
    if width < MOBILE_BREAKPOINT {
        2
    } else if width < 768.0 {
        3
    } else if width < 1024.0 {
        4
    } else {
        MAX_GRID_COLUMNS
    }
}

/// The "auto" column recommendation for a viewport width, independent of the
/// hard ceiling. Applied only when dynamic columns are enabled.
pub fn suggested_columns_for_width(width: f32) -> usize {
    if width < 420.0 {
        1
    } else if width < MOBILE_BREAKPOINT {
        2
    } else if width < 1100.0 {
        3
    } else {
        4
    }
}

/// Normalize a raw user column preference: round, then clamp into
/// [`MIN_GRID_COLUMNS`, `MAX_GRID_COLUMNS`]. Non-finite input falls back to
/// the minimum.
pub fn normalize_user_columns(raw: f64) -> usize {
    let rounded = raw.round();
    if !rounded.is_finite() || rounded < MIN_GRID_COLUMNS as f64 {
        return MIN_GRID_COLUMNS;
    }
    (rounded as usize).clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
}

/// Effective column count for a viewport width.
///
/// With dynamic columns enabled the user preference is capped by the
/// viewport suggestion; either way the result is clamped into
/// [`MIN_GRID_COLUMNS`, [`max_columns_for_width`]].
pub fn resolve_columns(user_columns: usize, dynamic_columns: bool, width: f32) -> usize {
    let user = user_columns.clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS);
    let base = if dynamic_columns {
        user.min(suggested_columns_for_width(width))
    } else {
        user
    };
    base.clamp(MIN_GRID_COLUMNS, max_columns_for_width(width))
}
