mod dashboard;
mod file_menu;
mod settings_dialog;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<file_menu::FileMenuState>()
            .init_resource::<settings_dialog::SettingsDialogState>()
            // Top panel must render before the central panel so the grid
            // fits underneath it; dialogs/overlays come last
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    dashboard::dashboard_ui,
                    file_menu::page_error_dialogs_ui,
                    file_menu::missing_page_warning_ui,
                    settings_dialog::settings_dialog_ui,
                )
                    .chain(),
            )
            .add_systems(Update, file_menu::handle_page_dialogs);
    }
}
