use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use layout_store::RoomDimensions;

// Crate engine modules
use crate::engine::assets::layout_library::LayoutLibrary;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller, spawn_orbit_camera};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::config::EditorConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::layout_loader::{
    LayoutLibraryLoader, select_initial_layout, start_loading,
};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::room::{spawn_room, sync_room_dimensions};
use crate::engine::systems::fps_tracking::fps_notification_system;
// Crate tools and RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::furniture_editor::FurnitureEditorPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app(config: EditorConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MeshPickingPlugin)
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the layout library as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<LayoutLibrary>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(FurnitureEditorPlugin);

    app.insert_resource(config)
        .init_resource::<LayoutLibraryLoader>()
        .init_resource::<OrbitCamera>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (select_initial_layout, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (fps_notification_system, camera_controller, sync_room_dimensions)
                .run_if(in_state(AppState::Running)),
        );

    // FPS overlay text only exists on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic scene initialisation
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    orbit: Res<OrbitCamera>,
) {
    let room = RoomDimensions::default();
    spawn_lighting(&mut commands, room);
    spawn_room(&mut commands, &mut meshes, &mut materials, room);
    spawn_orbit_camera(&mut commands, &orbit);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
