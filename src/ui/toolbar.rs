use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::cards::DashboardPage;
use crate::config::GridConfig;
use crate::layout::Viewport;

use super::file_menu::FileMenuState;
use super::settings_dialog::SettingsDialogState;

/// Main toolbar showing the page name, the current grid state and the
/// entry points for settings and page import/export.
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    page: Res<DashboardPage>,
    viewport: Res<Viewport>,
    config: Res<GridConfig>,
    mut settings: ResMut<SettingsDialogState>,
    mut menu_state: ResMut<FileMenuState>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                ui.label(egui::RichText::new(&page.name).size(16.0).strong());
                ui.label(
                    egui::RichText::new(format!("{} cards", page.cards.len()))
                        .weak()
                        .small(),
                );

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let mode = if viewport.is_mobile {
                    "mobile"
                } else if viewport.is_compact_cards {
                    "compact"
                } else {
                    "wide"
                };
                ui.label(
                    egui::RichText::new(format!(
                        "{} columns · {:.0} px · {}",
                        viewport.columns, viewport.width, mode
                    ))
                    .weak(),
                );

                // Right-aligned actions
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new("Settings").min_size(egui::vec2(0.0, 24.0)))
                        .clicked()
                    {
                        settings.load_from_config(&config);
                        settings.is_open = true;
                    }

                    if ui.button("Export…").clicked() {
                        menu_state.export_requested = true;
                    }

                    if ui.button("Import…").clicked() {
                        menu_state.import_requested = true;
                    }
                });
            });
        });

    Ok(())
}
