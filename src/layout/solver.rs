//! First-fit grid placement.
//!
//! Packs an ordered list of cards into a fixed-width grid with unbounded
//! rows. Each card is placed at the first free rectangle found in a
//! row-major scan starting from the top-left corner, so gaps left behind by
//! wide or tall cards are back-filled by later small ones. The scan order is
//! fixed; identical inputs always produce identical placements, which is what
//! keeps a page's layout stable across reloads.

use bevy::log::trace;

use crate::cards::Footprint;
use crate::constants::MIN_GRID_COLUMNS;

/// Solved grid position for one card. Coordinates are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPlacement {
    pub card_id: String,
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl CardPlacement {
    /// Whether two placements occupy intersecting cell rectangles.
    pub fn overlaps(&self, other: &CardPlacement) -> bool {
        self.row < other.row + other.row_span
            && other.row < self.row + self.row_span
            && self.col < other.col + other.col_span
            && other.col < self.col + self.col_span
    }
}

/// Cell occupancy over a fixed column count. Rows grow lazily as cards land.
struct Occupancy {
    columns: usize,
    cells: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            cells: Vec::new(),
        }
    }

    fn ensure_rows(&mut self, row_end: usize) {
        while self.cells.len() < row_end {
            self.cells.push(vec![false; self.columns]);
        }
    }

    /// Check a rectangle with 0-based top-left (row, col). Rows past the
    /// current growth are free by definition.
    fn is_free(&self, row: usize, col: usize, row_span: usize, col_span: usize) -> bool {
        for r in row..row + row_span {
            let Some(cells_row) = self.cells.get(r) else {
                // This row and everything below it has never been touched.
                return true;
            };
            for c in col..col + col_span {
                if cells_row[c] {
                    return false;
                }
            }
        }
        true
    }

    fn mark(&mut self, row: usize, col: usize, row_span: usize, col_span: usize) {
        self.ensure_rows(row + row_span);
        for r in row..row + row_span {
            for c in col..col + col_span {
                self.cells[r][c] = true;
            }
        }
    }
}

/// Scan candidate top-left cells in row-major order and return the first
/// position whose full rectangle is unoccupied. Rows are unbounded, so a
/// position always exists once the column span fits the grid width.
fn find_first_fit(occupancy: &Occupancy, row_span: usize, col_span: usize) -> (usize, usize) {
    let last_col = occupancy.columns - col_span;
    let mut row = 0;
    loop {
        for col in 0..=last_col {
            if occupancy.is_free(row, col, row_span, col_span) {
                return (row, col);
            }
        }
        row += 1;
    }
}

/// Place every card in page order.
///
/// Footprints with non-positive spans are corrected to 1 and a column span
/// wider than the grid is clamped to it, so the solve always terminates and
/// every card receives exactly one placement. Duplicate card ids are a
/// caller error; the solver places them as distinct cards.
pub fn solve(cards: &[(String, Footprint)], columns: usize) -> Vec<CardPlacement> {
    let columns = columns.max(MIN_GRID_COLUMNS);
    let mut occupancy = Occupancy::new(columns);
    let mut placements = Vec::with_capacity(cards.len());

    for (card_id, footprint) in cards {
        let footprint = footprint.normalized();
        let col_span = footprint.col_span.min(columns);
        let row_span = footprint.row_span;

        let (row, col) = find_first_fit(&occupancy, row_span, col_span);
        occupancy.mark(row, col, row_span, col_span);

        trace!(
            "placed {} at ({}, {}) span {}x{}",
            card_id,
            row + 1,
            col + 1,
            row_span,
            col_span
        );

        let placement = CardPlacement {
            card_id: card_id.clone(),
            row: row + 1,
            col: col + 1,
            row_span,
            col_span,
        };
        debug_assert!(placements.iter().all(|prior| !prior.overlaps(&placement)));
        placements.push(placement);
    }

    placements
}
