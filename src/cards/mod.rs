mod card;
mod page;

pub use card::{footprint_for, CardDef, CardKind, Footprint, SizeToken};
pub use page::{load_page, sample_page, save_page, DashboardPage};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::config::{ConfigLoaded, GridConfig};

/// Message to load a page from a JSON file
#[derive(Message)]
pub struct LoadPageRequest {
    pub path: PathBuf,
}

/// Message to save the active page to a JSON file
#[derive(Message)]
pub struct SavePageRequest {
    pub path: PathBuf,
}

/// Resource holding the last page load failure, shown as a dialog
#[derive(Resource, Default)]
pub struct PageLoadError {
    pub message: Option<String>,
}

/// Resource holding the last page save failure, shown as a dialog
#[derive(Resource, Default)]
pub struct PageSaveError {
    pub message: Option<String>,
}

/// Resource for the "page file missing" warning dialog
#[derive(Resource, Default)]
pub struct MissingPageWarning {
    pub show: bool,
    pub path: Option<PathBuf>,
}

/// Startup system: restore the page remembered in the settings, falling
/// back to the built-in sample page when it is gone.
fn restore_last_page(
    config: Res<GridConfig>,
    mut page: ResMut<DashboardPage>,
    mut warning: ResMut<MissingPageWarning>,
) {
    let Some(ref path) = config.last_page_path else {
        return;
    };

    if !path.exists() {
        warning.show = true;
        warning.path = Some(path.clone());
        info!("Last opened page no longer exists: {:?}", path);
        return;
    }

    match load_page(path) {
        Ok(loaded) => {
            info!("Restored page \"{}\" from {:?}", loaded.name, path);
            *page = loaded;
        }
        Err(e) => {
            warn!("Failed to restore last page: {}", e);
            warning.show = true;
            warning.path = Some(path.clone());
        }
    }
}

/// System to load a page when requested
fn load_page_system(
    mut events: MessageReader<LoadPageRequest>,
    mut page: ResMut<DashboardPage>,
    mut config: ResMut<GridConfig>,
    mut load_error: ResMut<PageLoadError>,
) {
    for event in events.read() {
        match load_page(&event.path) {
            Ok(loaded) => {
                info!("Loaded page \"{}\" from {:?}", loaded.name, event.path);
                *page = loaded;
                config.set_last_page_path(Some(event.path.clone()));
            }
            Err(e) => {
                warn!("{}", e);
                load_error.message = Some(e);
            }
        }
    }
}

/// System to save the active page when requested
fn save_page_system(
    mut events: MessageReader<SavePageRequest>,
    page: Res<DashboardPage>,
    mut config: ResMut<GridConfig>,
    mut save_error: ResMut<PageSaveError>,
) {
    for event in events.read() {
        match save_page(&page, &event.path) {
            Ok(()) => {
                info!("Saved page \"{}\" to {:?}", page.name, event.path);
                config.set_last_page_path(Some(event.path.clone()));
            }
            Err(e) => {
                error!("{}", e);
                save_error.message = Some(e);
            }
        }
    }
}

pub struct CardsPlugin;

impl Plugin for CardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DashboardPage>()
            .init_resource::<PageLoadError>()
            .init_resource::<PageSaveError>()
            .init_resource::<MissingPageWarning>()
            .add_message::<LoadPageRequest>()
            .add_message::<SavePageRequest>()
            .add_systems(Startup, restore_last_page.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    load_page_system.run_if(on_message::<LoadPageRequest>),
                    save_page_system.run_if(on_message::<SavePageRequest>),
                ),
            );
    }
}
