mod columns;
mod solver;
mod viewport;

pub use columns::{
    max_columns_for_width, normalize_user_columns, resolve_columns, suggested_columns_for_width,
};
pub use solver::{solve, CardPlacement};
pub use viewport::{derive_viewport, Viewport};

use bevy::prelude::*;

use crate::cards::{DashboardPage, Footprint};

/// The solved placement map for the active page.
///
/// Replaced wholesale on every recompute; placements are stored in page
/// order so iteration is deterministic.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct GridPlacements {
    /// Column count this solve ran against.
    pub columns: usize,
    pub placements: Vec<CardPlacement>,
}

impl GridPlacements {
    /// Number of grid rows the placements extend over.
    pub fn row_count(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.row + p.row_span - 1)
            .max()
            .unwrap_or(0)
    }

    pub fn get(&self, card_id: &str) -> Option<&CardPlacement> {
        self.placements.iter().find(|p| p.card_id == card_id)
    }
}

/// Re-solve the grid whenever the viewport (which folds in the column
/// configuration) or the card list changed this frame. Every solve is a
/// fresh deterministic pass over the full page; gap changes do not re-solve
/// because gaps are rendering-only.
fn recompute_layout(
    viewport: Res<Viewport>,
    page: Res<DashboardPage>,
    mut placements: ResMut<GridPlacements>,
) {
    if !viewport.is_changed() && !page.is_changed() {
        return;
    }

    let cards: Vec<(String, Footprint)> = page
        .cards
        .iter()
        .map(|card| (card.id.clone(), card.footprint()))
        .collect();

    let solved = solve(&cards, viewport.columns);
    debug!(
        "layout: {} cards over {} columns",
        solved.len(),
        viewport.columns
    );

    *placements = GridPlacements {
        columns: viewport.columns,
        placements: solved,
    };
}

pub struct LayoutPlugin;

impl Plugin for LayoutPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .init_resource::<GridPlacements>()
            .add_systems(
                Update,
                (viewport::update_viewport, recompute_layout).chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(id: &str, row: usize, col: usize, row_span: usize, col_span: usize) -> CardPlacement {
        CardPlacement {
            card_id: id.to_string(),
            row,
            col,
            row_span,
            col_span,
        }
    }

    #[test]
    fn test_row_count_empty() {
        assert_eq!(GridPlacements::default().row_count(), 0);
    }

    #[test]
    fn test_row_count_includes_spans() {
        let placements = GridPlacements {
            columns: 2,
            placements: vec![placement("a", 1, 1, 1, 1), placement("b", 2, 1, 4, 1)],
        };
        assert_eq!(placements.row_count(), 5);
    }

    #[test]
    fn test_get_finds_by_id() {
        let placements = GridPlacements {
            columns: 2,
            placements: vec![placement("a", 1, 1, 1, 1), placement("b", 1, 2, 1, 1)],
        };
        assert_eq!(placements.get("b").map(|p| p.col), Some(2));
        assert!(placements.get("missing").is_none());
    }

    #[test]
    fn test_sample_page_solves_cleanly_at_every_column_count() {
        // End-to-end sanity over the classifier + solver pipeline
        let page = crate::cards::sample_page();
        let cards: Vec<(String, Footprint)> = page
            .cards
            .iter()
            .map(|card| (card.id.clone(), card.footprint()))
            .collect();

        for columns in 1..=5 {
            let solved = solve(&cards, columns);
            assert_eq!(solved.len(), cards.len());
            for (i, a) in solved.iter().enumerate() {
                assert!(a.col_span <= columns, "col_span exceeds {} columns", columns);
                for b in &solved[i + 1..] {
                    assert!(!a.overlaps(b));
                }
            }
        }
    }
}
