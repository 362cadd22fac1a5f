use bevy::math::primitives::InfinitePlane3d;
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use super::state::{DragGrab, FurnitureEntities, FurnitureId};
use crate::layout::{DragState, LayoutSession};
use crate::rpc::web_rpc::WebRpcInterface;

// Only primary-button drags move furniture; the secondary button orbits the camera.

pub fn on_drag_start(
    trigger: Trigger<Pointer<DragStart>>,
    furniture: Query<&FurnitureId>,
    furniture_entities: Res<FurnitureEntities>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut session: ResMut<LayoutSession>,
    mut grab: ResMut<DragGrab>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let event = trigger.event();
    if event.button != PointerButton::Primary {
        return;
    }
    let entity = trigger.target();
    let Ok(FurnitureId(id)) = furniture.get(entity) else {
        return;
    };
    let Some(index) = furniture_entities.index_of(entity) else {
        return;
    };

    session.drag_start(id);

    let centre = session
        .items()
        .get(index)
        .map(|item| item.position)
        .unwrap_or_default();
    let offset = pointer_on_plane(&cameras, event.pointer_location.position, centre.y)
        .map(|hit| centre - hit)
        .unwrap_or(Vec3::ZERO);
    *grab = DragGrab {
        entity: Some(entity),
        plane_height: centre.y,
        offset,
    };

    notify_drag_state(&mut rpc_interface, session.drag_state());
}

pub fn on_drag(
    trigger: Trigger<Pointer<Drag>>,
    furniture_entities: Res<FurnitureEntities>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut session: ResMut<LayoutSession>,
    grab: Res<DragGrab>,
) {
    let event = trigger.event();
    if event.button != PointerButton::Primary {
        return;
    }
    let entity = trigger.target();
    if grab.entity != Some(entity) {
        return;
    }
    let Some(index) = furniture_entities.index_of(entity) else {
        return;
    };
    let Some(hit) = pointer_on_plane(&cameras, event.pointer_location.position, grab.plane_height)
    else {
        return;
    };

    session.move_item(index, hit + grab.offset);
}

pub fn on_drag_end(
    trigger: Trigger<Pointer<DragEnd>>,
    furniture: Query<&FurnitureId>,
    mut session: ResMut<LayoutSession>,
    mut grab: ResMut<DragGrab>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let entity = trigger.target();
    let Ok(FurnitureId(id)) = furniture.get(entity) else {
        return;
    };

    session.drag_end(id);
    if grab.entity == Some(entity) {
        *grab = DragGrab::default();
    }

    notify_drag_state(&mut rpc_interface, session.drag_state());
}

fn notify_drag_state(rpc_interface: &mut WebRpcInterface, drag: &DragState) {
    rpc_interface.send_notification(
        "drag_state_changed",
        serde_json::json!({
            "active": drag.active_drag_id(),
            "last_dragged": drag.last_dragged_id(),
        }),
    );
}

fn pointer_on_plane(
    cameras: &Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    cursor_pos: Vec2,
    plane_height: f32,
) -> Option<Vec3> {
    let (camera, camera_transform) = cameras.single().ok()?;
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
    ray_on_horizontal_plane(ray, plane_height)
}

/// Where the ray crosses the horizontal plane `y = plane_height`, if it does
/// so in front of its origin.
pub fn ray_on_horizontal_plane(ray: Ray3d, plane_height: f32) -> Option<Vec3> {
    let distance = ray.intersect_plane(
        Vec3::new(0.0, plane_height, 0.0),
        InfinitePlane3d::new(Vec3::Y),
    )?;
    Some(ray.get_point(distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_ray_hits_plane_below_origin() {
        let ray = Ray3d::new(Vec3::new(1.0, 5.0, 2.0), Dir3::NEG_Y);
        let hit = ray_on_horizontal_plane(ray, 0.5).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(1.0, 0.5, 2.0), 1e-5));
    }

    #[test]
    fn slanted_ray_keeps_grab_offset_meaningful() {
        let direction = Dir3::new(Vec3::new(1.0, -1.0, 0.0)).unwrap();
        let ray = Ray3d::new(Vec3::new(0.0, 4.0, 0.0), direction);
        let hit = ray_on_horizontal_plane(ray, 1.0).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(3.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn parallel_or_receding_rays_miss() {
        let flat = Ray3d::new(Vec3::new(0.0, 2.0, 0.0), Dir3::X);
        assert!(ray_on_horizontal_plane(flat, 0.0).is_none());

        let upward = Ray3d::new(Vec3::new(0.0, 2.0, 0.0), Dir3::Y);
        assert!(ray_on_horizontal_plane(upward, 0.0).is_none());
    }
}
