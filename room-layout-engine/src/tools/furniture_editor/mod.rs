//! Furniture editor: spawns one mesh per piece of the loaded layout, relays
//! pointer drags into the layout session and paints the alert colour onto
//! the piece under manipulation when it overlaps another.
//!
//! ## Frame Flow
//!
//! ```text
//! LoadLayoutEvent ──> apply_layout_loads      (despawn, reset session, respawn)
//! RoomResizeEvent ──> apply_room_resizes
//! Pointer<Drag*>  ──> observers on each piece  (drag start/end, move on plane)
//!                     sync_furniture_transforms
//!                     apply_frame_highlights   (detect, resolve, paint)
//! ```
//!
//! Pieces are kept in a flat list inside [`LayoutSession`]; entities only
//! carry a [`state::FurnitureId`] and [`state::FurnitureEntities`] maps ids
//! back to entities.
//!
//! On native builds Ctrl+S saves the layout and a status overlay lists the
//! current collisions.

/// Highlight tick applying resolved colours to materials.
pub mod highlight;

/// Pointer drag observers and horizontal-plane movement.
pub mod manipulation;

/// Writing the session's layout back to the data file.
pub mod persistence;

/// Mesh spawning on layout load and transform sync.
pub mod placement;

/// Events, components and resources shared by the editor systems.
pub mod state;

/// Status overlay (native only).
pub mod ui;

use bevy::prelude::*;

use crate::layout::LayoutSession;
use highlight::apply_frame_highlights;
use placement::{apply_layout_loads, apply_room_resizes, sync_furniture_transforms};
use state::{DragGrab, FrameCollisions, FurnitureEntities, LoadLayoutEvent, RoomResizeEvent};

pub struct FurnitureEditorPlugin;

impl Plugin for FurnitureEditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutSession>()
            .init_resource::<FurnitureEntities>()
            .init_resource::<DragGrab>()
            .init_resource::<FrameCollisions>()
            .add_event::<LoadLayoutEvent>()
            .add_event::<RoomResizeEvent>()
            .add_systems(
                Update,
                (
                    apply_layout_loads,
                    apply_room_resizes,
                    sync_furniture_transforms,
                    apply_frame_highlights,
                )
                    .chain(),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            use persistence::save_on_shortcut;
            use ui::{spawn_status_overlay, update_status_overlay};

            app.add_systems(Startup, spawn_status_overlay).add_systems(
                Update,
                (
                    save_on_shortcut.before(apply_layout_loads),
                    update_status_overlay.after(apply_frame_highlights),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::furniture::tests::{layout, record};
    use crate::rpc::web_rpc::WebRpcInterface;
    use constants::render_settings::ALERT_COLOUR;
    use layout_store::{Layout, ShapeKind};
    use state::DisplayedColour;

    fn editor_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<LayoutSession>()
            .init_resource::<FurnitureEntities>()
            .init_resource::<DragGrab>()
            .init_resource::<FrameCollisions>()
            .init_resource::<WebRpcInterface>()
            .add_event::<LoadLayoutEvent>()
            .add_event::<RoomResizeEvent>()
            .add_systems(
                Update,
                (
                    apply_layout_loads,
                    apply_room_resizes,
                    sync_furniture_transforms,
                    apply_frame_highlights,
                )
                    .chain(),
            );
        app
    }

    fn overlapping() -> Layout {
        layout(
            "overlap",
            vec![
                record("A", ShapeKind::Box, [-3.0, 0.0, 0.0], [5.0, 1.0, 5.0]),
                record("B", ShapeKind::Box, [-2.0, 0.0, 0.0], [5.0, 1.0, 5.0]),
            ],
        )
    }

    fn load(app: &mut App, layout: Layout) {
        app.world_mut().send_event(LoadLayoutEvent { layout });
        app.update();
    }

    fn spawned(app: &App) -> Vec<Entity> {
        app.world().resource::<FurnitureEntities>().entities().collect()
    }

    /// (material base colour, displayed colour) of a furniture entity.
    fn colours_of(app: &App, entity: Entity) -> (Color, Color) {
        let world = app.world();
        let material = world
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .expect("material handle");
        let base = world
            .resource::<Assets<StandardMaterial>>()
            .get(&material.0)
            .expect("material asset")
            .base_color;
        let displayed = world.get::<DisplayedColour>(entity).expect("displayed");
        (base, displayed.0)
    }

    fn own_colour(app: &App, index: usize) -> Color {
        app.world().resource::<LayoutSession>().items()[index].colour()
    }

    #[test]
    fn alert_colour_follows_the_dragged_piece() {
        let mut app = editor_app();
        load(&mut app, overlapping());

        let entities = spawned(&app);
        assert_eq!(entities.len(), 2);
        let own_a = own_colour(&app, 0);
        assert_eq!(colours_of(&app, entities[0]), (own_a, own_a));
        assert!(app.world().resource::<FrameCollisions>().report.contains("A", "B"));

        app.world_mut()
            .resource_mut::<LayoutSession>()
            .drag_start("A");
        app.update();
        assert_eq!(colours_of(&app, entities[0]), (ALERT_COLOUR, ALERT_COLOUR));
        let own_b = own_colour(&app, 1);
        assert_eq!(colours_of(&app, entities[1]), (own_b, own_b));

        app.world_mut()
            .resource_mut::<LayoutSession>()
            .move_item(1, Vec3::new(3.0, 0.0, 0.0));
        app.update();
        assert_eq!(colours_of(&app, entities[0]), (own_a, own_a));
        assert_eq!(own_colour(&app, 0), own_a);
        assert!(app.world().resource::<FrameCollisions>().report.is_empty());

        let moved = app.world().get::<Transform>(entities[1]).expect("transform");
        assert_eq!(moved.translation, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn reloading_replaces_every_entity() {
        let mut app = editor_app();
        load(&mut app, overlapping());
        let old = spawned(&app);

        app.world_mut()
            .resource_mut::<LayoutSession>()
            .drag_start("A");
        load(
            &mut app,
            layout(
                "single",
                vec![record("A", ShapeKind::Cylinder, [0.0; 3], [1.0; 3])],
            ),
        );

        for entity in old {
            assert!(app.world().get_entity(entity).is_err());
        }
        let fresh = spawned(&app);
        assert_eq!(fresh.len(), 1);

        let mut ids = app.world_mut().query::<&state::FurnitureId>();
        let ids: Vec<String> = ids.iter(app.world()).map(|id| id.0.clone()).collect();
        assert_eq!(ids, ["A"]);

        let own = own_colour(&app, 0);
        assert_eq!(colours_of(&app, fresh[0]), (own, own));
        assert!(!app.world().resource::<LayoutSession>().drag_state().is_dragging());
    }
}
