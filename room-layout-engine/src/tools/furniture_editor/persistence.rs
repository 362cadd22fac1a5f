use bevy::prelude::*;
use layout_store::{Layout, LayoutPatch, LayoutStore, StoreError};

/// Write the layout back to the store. Layouts that were never saved, or
/// that have since disappeared from the file, are created afresh with a
/// new id.
pub fn save_layout(store: &LayoutStore, layout: &Layout) -> Result<Layout, StoreError> {
    let patch = LayoutPatch::from(layout);
    if layout.id.is_empty() {
        return store.create_layout(patch);
    }

    match store.update_layout(&layout.id, patch.clone()) {
        Err(StoreError::LayoutNotFound(id)) => {
            warn!("Layout '{}' no longer in store, saving as new", id);
            store.create_layout(patch)
        }
        other => other,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::save_on_shortcut;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::save_layout;
    use crate::engine::core::config::EditorConfig;
    use crate::layout::LayoutSession;
    use bevy::asset::io::file::FileAssetReader;
    use bevy::prelude::*;
    use constants::paths::ENGINE_ASSET_DIR;
    use layout_store::LayoutStore;

    /// Ctrl+S: persist the session's layout, dragged positions and room size included.
    pub fn save_on_shortcut(
        keyboard: Res<ButtonInput<KeyCode>>,
        mut session: ResMut<LayoutSession>,
        config: Res<EditorConfig>,
    ) {
        let ctrl = keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        if !ctrl || !keyboard.just_pressed(KeyCode::KeyS) {
            return;
        }

        let Some(snapshot) = session.snapshot() else {
            warn!("No layout loaded, nothing to save");
            return;
        };

        let path = FileAssetReader::new(ENGINE_ASSET_DIR)
            .root_path()
            .join(&config.data_path);
        let store = LayoutStore::new(path).with_reporter(report_store_notice);

        match save_layout(&store, &snapshot) {
            Ok(saved) => {
                info!(
                    "Saved layout '{}' ({}) to {}",
                    saved.name,
                    saved.id,
                    store.path().display()
                );
                session.adopt_saved(&saved);
            }
            Err(err) => error!("Failed to save layout '{}': {}", snapshot.id, err),
        }
    }

    fn report_store_notice(message: &str) {
        warn!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_store::RoomDimensions;
    use std::fs;

    fn temp_store(name: &str) -> LayoutStore {
        let dir = std::env::temp_dir().join(format!(
            "room-layout-engine-save-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        LayoutStore::new(dir.join("layout_data.json"))
    }

    fn unsaved(user: &str) -> Layout {
        Layout {
            id: String::new(),
            user_id: user.to_string(),
            name: "Study".to_string(),
            timestamp: 0,
            room_dimensions: RoomDimensions::default(),
            furnitures: Vec::new(),
        }
    }

    #[test]
    fn unsaved_layout_is_created() {
        let store = temp_store("create");
        let saved = save_layout(&store, &unsaved("user456")).unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(store.get_layout(&saved.id).unwrap().name, "Study");
    }

    #[test]
    fn existing_layout_is_updated_in_place() {
        let store = temp_store("update");
        let mut layout = save_layout(&store, &unsaved("user456")).unwrap();

        layout.name = "Renamed".to_string();
        layout.room_dimensions.width = 12.0;
        let saved = save_layout(&store, &layout).unwrap();

        assert_eq!(saved.id, layout.id);
        assert_eq!(store.list_layouts(None).unwrap().len(), 1);
        let stored = store.get_layout(&layout.id).unwrap();
        assert_eq!(stored.name, "Renamed");
        assert_eq!(stored.room_dimensions.width, 12.0);
    }

    #[test]
    fn vanished_layout_is_recreated() {
        let store = temp_store("vanished");
        let mut layout = unsaved("user456");
        layout.id = "layout-gone".to_string();

        let saved = save_layout(&store, &layout).unwrap();
        assert_ne!(saved.id, "layout-gone");
        assert_eq!(store.list_layouts(Some("user456")).unwrap().len(), 1);
    }
}
