use bevy::prelude::*;
use constants::render_settings::MIN_MESH_EXTENT;
use layout_store::ShapeKind;

use super::manipulation::{on_drag, on_drag_end, on_drag_start};
use super::state::*;
use crate::layout::{LayoutSession, PlacedFurniture};
use crate::rpc::web_rpc::WebRpcInterface;

/// Swap the whole scene for the most recent requested layout: old meshes go,
/// the session and drag grab reset, one mesh per piece is spawned.
pub fn apply_layout_loads(
    mut events: EventReader<LoadLayoutEvent>,
    mut session: ResMut<LayoutSession>,
    mut furniture_entities: ResMut<FurnitureEntities>,
    mut grab: ResMut<DragGrab>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for (_, entity) in furniture_entities.take() {
        commands.entity(entity).despawn();
    }
    *grab = DragGrab::default();
    session.load_layout(&event.layout);

    for item in session.items() {
        let entity = spawn_furniture(&mut commands, &mut meshes, &mut materials, item);
        furniture_entities.push(item.id(), entity);
    }

    rpc_interface.send_notification(
        "layout_loaded",
        serde_json::json!({
            "id": event.layout.id,
            "name": event.layout.name,
            "furniture_count": session.items().len(),
        }),
    );
}

pub fn apply_room_resizes(
    mut events: EventReader<RoomResizeEvent>,
    mut session: ResMut<LayoutSession>,
) {
    if let Some(event) = events.read().last() {
        session.set_room_dimensions(event.room);
    }
}

/// Copy piece positions from the session onto their mesh transforms.
pub fn sync_furniture_transforms(
    session: Res<LayoutSession>,
    furniture_entities: Res<FurnitureEntities>,
    mut transforms: Query<&mut Transform, With<FurnitureId>>,
) {
    if !session.is_changed() {
        return;
    }

    for (item, entity) in session.items().iter().zip(furniture_entities.entities()) {
        let Ok(mut transform) = transforms.get_mut(entity) else {
            continue;
        };
        let translation = display_translation(item.position);
        if transform.translation != translation {
            transform.translation = translation;
        }
    }
}

fn spawn_furniture(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    item: &PlacedFurniture,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(furniture_mesh(item))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: item.colour(),
                perceptual_roughness: 0.8,
                ..default()
            })),
            Transform::from_translation(display_translation(item.position))
                .with_rotation(item.rotation()),
            FurnitureId(item.id().to_string()),
            DisplayedColour(item.colour()),
            Name::new(format!("furniture_{}", item.id())),
        ))
        .observe(on_drag_start)
        .observe(on_drag)
        .observe(on_drag_end)
        .id()
}

fn furniture_mesh(item: &PlacedFurniture) -> Mesh {
    let size = mesh_size(item.size());
    match item.kind() {
        ShapeKind::Cylinder => Cylinder::new(size.x / 2.0, size.y).into(),
        _ => Cuboid::from_size(size).into(),
    }
}

/// Mesh dimensions for a raw size. Degenerate components shrink to a sliver
/// so the piece stays visible and pickable.
pub fn mesh_size(size: Vec3) -> Vec3 {
    let clamp = |v: f32| if v.is_finite() { v.max(MIN_MESH_EXTENT) } else { MIN_MESH_EXTENT };
    Vec3::new(clamp(size.x), clamp(size.y), clamp(size.z))
}

fn display_translation(position: Vec3) -> Vec3 {
    if position.is_finite() { position } else { Vec3::ZERO }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_size_keeps_valid_extents() {
        assert_eq!(mesh_size(Vec3::new(2.0, 3.0, 4.0)), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn mesh_size_clamps_degenerate_extents() {
        let size = mesh_size(Vec3::new(0.0, -1.0, f32::NAN));
        assert_eq!(size, Vec3::splat(MIN_MESH_EXTENT));
    }

    #[test]
    fn non_finite_positions_render_at_origin() {
        assert_eq!(display_translation(Vec3::new(f32::INFINITY, 0.0, 0.0)), Vec3::ZERO);
        assert_eq!(display_translation(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }
}
