use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use bevy_egui::{egui, EguiContexts};
use futures_lite::future;
use std::path::PathBuf;

use crate::cards::{
    DashboardPage, LoadPageRequest, MissingPageWarning, PageLoadError, PageSaveError,
    SavePageRequest,
};
use crate::config::GridConfig;

/// State for page import/export, including the pending async file dialogs
#[derive(Resource, Default)]
pub struct FileMenuState {
    /// Set by the toolbar to open an import dialog
    pub import_requested: bool,
    /// Set by the toolbar to open an export dialog
    pub export_requested: bool,
    /// Pending async open-file dialog
    pub pending_import: Option<Task<Option<PathBuf>>>,
    /// Pending async save-file dialog
    pub pending_export: Option<Task<Option<PathBuf>>>,
}

/// Spawns and polls the async file dialogs for page import/export.
pub fn handle_page_dialogs(
    mut menu_state: ResMut<FileMenuState>,
    page: Res<DashboardPage>,
    mut load_events: MessageWriter<LoadPageRequest>,
    mut save_events: MessageWriter<SavePageRequest>,
) {
    // Poll pending import dialog
    if let Some(ref mut task) = menu_state.pending_import
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        menu_state.pending_import = None;
        if let Some(path) = result {
            load_events.write(LoadPageRequest { path });
        }
    }

    // Poll pending export dialog
    if let Some(ref mut task) = menu_state.pending_export
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        menu_state.pending_export = None;
        if let Some(path) = result {
            save_events.write(SavePageRequest { path });
        }
    }

    // Spawn import dialog on request
    if menu_state.import_requested {
        menu_state.import_requested = false;
        if menu_state.pending_import.is_none() {
            let task_pool = AsyncComputeTaskPool::get();
            menu_state.pending_import = Some(task_pool.spawn(async {
                rfd::AsyncFileDialog::new()
                    .set_title("Import Dashboard Page")
                    .add_filter("JSON", &["json"])
                    .pick_file()
                    .await
                    .map(|h| h.path().to_path_buf())
            }));
        }
    }

    // Spawn export dialog on request
    if menu_state.export_requested {
        menu_state.export_requested = false;
        if menu_state.pending_export.is_none() {
            let file_name = format!("{}.json", sanitize_filename(&page.name));
            let task_pool = AsyncComputeTaskPool::get();
            menu_state.pending_export = Some(task_pool.spawn(async move {
                rfd::AsyncFileDialog::new()
                    .set_title("Export Dashboard Page")
                    .set_directory(crate::paths::pages_dir())
                    .set_file_name(file_name)
                    .add_filter("JSON", &["json"])
                    .save_file()
                    .await
                    .map(|h| h.path().to_path_buf())
            }));
        }
    }
}

/// Renders the page load/save error dialogs
pub fn page_error_dialogs_ui(
    mut contexts: EguiContexts,
    mut load_error: ResMut<PageLoadError>,
    mut save_error: ResMut<PageSaveError>,
) -> Result {
    if let Some(error) = load_error.message.clone() {
        egui::Window::new("Import Failed")
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.colored_label(egui::Color32::RED, &error);
                });
                if ui.button("OK").clicked() {
                    load_error.message = None;
                }
            });
    }

    if let Some(error) = save_error.message.clone() {
        egui::Window::new("Export Failed")
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.colored_label(egui::Color32::RED, &error);
                });
                if ui.button("OK").clicked() {
                    save_error.message = None;
                }
            });
    }

    Ok(())
}

/// Renders the missing page warning dialog (shown at startup if the
/// remembered page file doesn't exist)
pub fn missing_page_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<MissingPageWarning>,
    mut config: ResMut<GridConfig>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    egui::Window::new("Page Not Found")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The last opened page file no longer exists:");

            if let Some(ref path) = warning.path {
                ui.add_space(5.0);
                let path_str = path.to_string_lossy();
                let display_path = if path_str.len() > 50 {
                    format!("...{}", &path_str[path_str.len() - 47..])
                } else {
                    path_str.to_string()
                };
                ui.label(egui::RichText::new(display_path).weak())
                    .on_hover_text(path_str.as_ref());
                ui.add_space(10.0);
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    warning.show = false;
                }

                if ui.button("Clear from history").clicked() {
                    config.set_last_page_path(None);
                    warning.show = false;
                }
            });
        });

    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_keeps_safe_characters() {
        assert_eq!(sanitize_filename("Living Room"), "Living Room");
        assert_eq!(sanitize_filename("page_v2-final"), "page_v2-final");
    }

    #[test]
    fn test_sanitize_filename_replaces_separators() {
        assert_eq!(sanitize_filename("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_filename("home: main"), "home_ main");
    }

    #[test]
    fn test_sanitize_filename_trims_whitespace() {
        assert_eq!(sanitize_filename("  page  "), "page");
    }
}
