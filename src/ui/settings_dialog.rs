use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{
    GridConfig, SetDynamicColumnsRequest, SetGridColumnsRequest, SetGridGapRequest,
};
use crate::constants::{MAX_GRID_COLUMNS, MIN_GRID_COLUMNS};
use crate::layout::{resolve_columns, Viewport};

/// State for the settings dialog
#[derive(Resource, Default)]
pub struct SettingsDialogState {
    /// Whether the dialog is open
    pub is_open: bool,
    /// Edited column count
    pub columns: usize,
    /// Edited dynamic-columns flag
    pub dynamic_columns: bool,
    /// Edited horizontal gap in pixels
    pub gap_h: u32,
    /// Edited vertical gap in pixels
    pub gap_v: u32,
    /// Whether changes have been made
    pub has_changes: bool,
}

impl SettingsDialogState {
    /// Initialize the dialog state from current config
    pub fn load_from_config(&mut self, config: &GridConfig) {
        self.columns = config.columns;
        self.dynamic_columns = config.dynamic_columns;
        self.gap_h = config.gap_h;
        self.gap_v = config.gap_v;
        self.has_changes = false;
    }
}

/// Renders the settings dialog
pub fn settings_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog_state: ResMut<SettingsDialogState>,
    config: Res<GridConfig>,
    viewport: Res<Viewport>,
    mut column_events: MessageWriter<SetGridColumnsRequest>,
    mut dynamic_events: MessageWriter<SetDynamicColumnsRequest>,
    mut gap_events: MessageWriter<SetGridGapRequest>,
) -> Result {
    if !dialog_state.is_open {
        return Ok(());
    }

    let mut should_close = false;
    let mut should_save = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .min_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.heading("Grid Settings");
            ui.add_space(12.0);

            // Columns section
            ui.group(|ui| {
                ui.label(egui::RichText::new("Columns").strong());
                ui.add_space(8.0);

                let response = ui.add(
                    egui::Slider::new(
                        &mut dialog_state.columns,
                        MIN_GRID_COLUMNS..=MAX_GRID_COLUMNS,
                    )
                    .text("columns"),
                );
                if response.changed() {
                    dialog_state.has_changes = true;
                }

                ui.add_space(4.0);

                if ui
                    .checkbox(&mut dialog_state.dynamic_columns, "Dynamic columns")
                    .changed()
                {
                    dialog_state.has_changes = true;
                }
                ui.label(
                    egui::RichText::new(
                        "Caps the column count by what the current window width suggests.",
                    )
                    .weak()
                    .small(),
                );

                ui.add_space(4.0);

                let effective = resolve_columns(
                    dialog_state.columns,
                    dialog_state.dynamic_columns,
                    viewport.width,
                );
                ui.label(
                    egui::RichText::new(format!(
                        "Effective right now: {} columns at {:.0} px",
                        effective, viewport.width
                    ))
                    .weak()
                    .small(),
                );
            });

            ui.add_space(12.0);

            // Gaps section
            ui.group(|ui| {
                ui.label(egui::RichText::new("Cell Gaps").strong());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label("Horizontal:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut dialog_state.gap_h)
                                .speed(1)
                                .range(0..=64)
                                .suffix(" px"),
                        )
                        .changed()
                    {
                        dialog_state.has_changes = true;
                    }

                    ui.add_space(12.0);

                    ui.label("Vertical:");
                    if ui
                        .add(
                            egui::DragValue::new(&mut dialog_state.gap_v)
                                .speed(1)
                                .range(0..=64)
                                .suffix(" px"),
                        )
                        .changed()
                    {
                        dialog_state.has_changes = true;
                    }
                });
            });

            ui.add_space(16.0);

            // Action buttons
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(dialog_state.has_changes, egui::Button::new("Save"))
                    .clicked()
                {
                    should_save = true;
                }

                if ui.button("Cancel").clicked() {
                    should_close = true;
                }
            });
        });

    // Handle save
    if should_save {
        if dialog_state.columns != config.columns {
            column_events.write(SetGridColumnsRequest {
                columns: dialog_state.columns as f64,
            });
        }
        if dialog_state.dynamic_columns != config.dynamic_columns {
            dynamic_events.write(SetDynamicColumnsRequest {
                enabled: dialog_state.dynamic_columns,
            });
        }
        if dialog_state.gap_h != config.gap_h || dialog_state.gap_v != config.gap_v {
            gap_events.write(SetGridGapRequest {
                horizontal: dialog_state.gap_h,
                vertical: dialog_state.gap_v,
            });
        }

        dialog_state.has_changes = false;
        should_close = true;
    }

    // Handle close
    if should_close {
        dialog_state.is_open = false;
        dialog_state.load_from_config(&config);
    }

    Ok(())
}
