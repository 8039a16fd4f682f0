use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::cards::{CardDef, DashboardPage};
use crate::config::GridConfig;
use crate::constants::{CARD_ROW_HEIGHT, CARD_ROW_HEIGHT_COMPACT};
use crate::layout::{GridPlacements, Viewport};
use crate::theme;

/// Renders the card grid.
///
/// This view only consumes solved placements; it makes no layout decisions
/// of its own beyond translating grid cells into pixels with the configured
/// gaps.
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    page: Res<DashboardPage>,
    placements: Res<GridPlacements>,
    config: Res<GridConfig>,
    viewport: Res<Viewport>,
) -> Result {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::default()
                .fill(theme::DASHBOARD_BACKGROUND)
                .inner_margin(egui::Margin::same(16)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            if placements.placements.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("This page has no cards.").weak());
                });
                return;
            }

            let columns = placements.columns.max(1);
            let gap_h = config.gap_h as f32;
            let gap_v = config.gap_v as f32;
            let row_height = if viewport.is_compact_cards {
                CARD_ROW_HEIGHT_COMPACT
            } else {
                CARD_ROW_HEIGHT
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                let avail = ui.available_width();
                let cell_width =
                    ((avail - gap_h * (columns - 1) as f32) / columns as f32).max(48.0);

                let total_rows = placements.row_count();
                let total_height = total_rows as f32 * row_height
                    + total_rows.saturating_sub(1) as f32 * gap_v;

                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(avail, total_height), egui::Sense::hover());
                let origin = rect.min;
                let painter = ui.painter();

                for card in &page.cards {
                    let Some(placement) = placements.get(&card.id) else {
                        continue;
                    };

                    let x = origin.x + (placement.col - 1) as f32 * (cell_width + gap_h);
                    let y = origin.y + (placement.row - 1) as f32 * (row_height + gap_v);
                    let w = placement.col_span as f32 * cell_width
                        + (placement.col_span - 1) as f32 * gap_h;
                    let h = placement.row_span as f32 * row_height
                        + (placement.row_span - 1) as f32 * gap_v;

                    let card_rect =
                        egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h));
                    draw_card_tile(painter, card_rect, card, viewport.is_compact_cards);
                }
            });
        });

    Ok(())
}

/// Draw one placeholder tile: base fill, accent strip, title and kind label.
fn draw_card_tile(painter: &egui::Painter, rect: egui::Rect, card: &CardDef, compact: bool) {
    painter.rect_filled(rect, 8.0, theme::CARD_FILL);

    let accent = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), 4.0));
    painter.rect_filled(accent, 2.0, card.kind.accent_color());

    let title_size = if compact { 13.0 } else { 15.0 };
    painter.text(
        rect.min + egui::vec2(12.0, 14.0),
        egui::Align2::LEFT_TOP,
        &card.title,
        egui::FontId::proportional(title_size),
        theme::CARD_TITLE,
    );
    painter.text(
        egui::pos2(rect.min.x + 12.0, rect.max.y - 10.0),
        egui::Align2::LEFT_BOTTOM,
        card.kind.display_name(),
        egui::FontId::proportional(11.0),
        theme::CARD_SUBTLE,
    );
}
