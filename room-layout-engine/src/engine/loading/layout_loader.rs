use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::room::DEFAULT_LAYOUT_NAME;
use layout_store::{AppData, Layout, RoomDimensions};

use crate::engine::assets::layout_library::LayoutLibrary;
use crate::engine::core::config::EditorConfig;
use crate::tools::furniture_editor::state::LoadLayoutEvent;

#[derive(Resource, Default)]
pub struct LayoutLibraryLoader {
    handle: Option<Handle<LayoutLibrary>>,
    initial_layout_sent: bool,
}

impl LayoutLibraryLoader {
    pub fn initial_layout_sent(&self) -> bool {
        self.initial_layout_sent
    }
}

// Start the loading process
pub fn start_loading(
    mut loader: ResMut<LayoutLibraryLoader>,
    asset_server: Res<AssetServer>,
    config: Res<EditorConfig>,
) {
    println!("Loading layout library from: {}", config.data_path);
    loader.handle = Some(asset_server.load(config.data_path.clone()));
}

/// Wait for the library, then queue the layout to open. A library that
/// fails to load still opens an empty default room.
pub fn select_initial_layout(
    mut loader: ResMut<LayoutLibraryLoader>,
    asset_server: Res<AssetServer>,
    libraries: Res<Assets<LayoutLibrary>>,
    config: Res<EditorConfig>,
    mut load_events: EventWriter<LoadLayoutEvent>,
) {
    if loader.initial_layout_sent {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    let layout = if let Some(library) = libraries.get(handle) {
        println!("✓ Layout library loaded ({} layouts)", library.data().layouts.len());
        choose_layout(library.data(), &config)
    } else if let LoadState::Failed(err) = asset_server.load_state(handle) {
        error!("Failed to load layout library '{}': {}", config.data_path, err);
        empty_layout(&config.user_id)
    } else {
        return;
    };

    load_events.write(LoadLayoutEvent { layout });
    loader.initial_layout_sent = true;
}

/// The configured layout if it exists, otherwise the user's first layout,
/// otherwise an empty room.
pub fn choose_layout(data: &AppData, config: &EditorConfig) -> Layout {
    if let Some(id) = config.layout_id.as_deref() {
        match data.find_layout(id) {
            Some(layout) => return layout.clone(),
            None => warn!("Layout '{}' not found, falling back to user layouts", id),
        }
    }

    match data.layouts_for_user(&config.user_id).next() {
        Some(layout) => layout.clone(),
        None => {
            warn!(
                "No layouts for user '{}', opening an empty room",
                config.user_id
            );
            empty_layout(&config.user_id)
        }
    }
}

/// Unsaved layout with the default room. Its empty id marks it as new.
pub fn empty_layout(user_id: &str) -> Layout {
    Layout {
        id: String::new(),
        user_id: user_id.to_string(),
        name: DEFAULT_LAYOUT_NAME.to_string(),
        timestamp: 0,
        room_dimensions: RoomDimensions::default(),
        furnitures: Vec::new(),
    }
}
