use bevy::asset::RenderAssetUsages;
use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::render_settings::{MIN_MESH_EXTENT, ROOM_EDGE_COLOUR, ROOM_FILL_COLOUR};
use layout_store::RoomDimensions;

use super::lighting::{RoomAccentLight, accent_light_position};
use crate::layout::LayoutSession;

#[derive(Component)]
pub struct RoomVolume;

#[derive(Component)]
pub struct RoomEdges;

/// Spawn the room volume and its outline at the given size. Neither takes
/// part in picking, so drags always land on furniture.
pub fn spawn_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    room: RoomDimensions,
) {
    commands.spawn((
        Mesh3d(meshes.add(room_volume_mesh(room))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ROOM_FILL_COLOUR,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        Transform::IDENTITY,
        Pickable::IGNORE,
        RoomVolume,
        Name::new("room_volume"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(room_edge_mesh(room))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ROOM_EDGE_COLOUR,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        Pickable::IGNORE,
        RoomEdges,
        Name::new("room_edges"),
    ));
}

/// Rebuild the room meshes and move the accent light when the session's
/// room size changes. Furniture is never clamped to the new size.
pub fn sync_room_dimensions(
    session: Res<LayoutSession>,
    mut applied: Local<Option<RoomDimensions>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut volumes: Query<&mut Mesh3d, (With<RoomVolume>, Without<RoomEdges>)>,
    mut edges: Query<&mut Mesh3d, (With<RoomEdges>, Without<RoomVolume>)>,
    mut lights: Query<&mut Transform, With<RoomAccentLight>>,
) {
    let room = session.room();
    if *applied == Some(room) {
        return;
    }

    for mut mesh in &mut volumes {
        mesh.0 = meshes.add(room_volume_mesh(room));
    }
    for mut mesh in &mut edges {
        mesh.0 = meshes.add(room_edge_mesh(room));
    }
    for mut transform in &mut lights {
        transform.translation = accent_light_position(room);
    }

    debug!(
        "Room resized to {} x {} x {}",
        room.width, room.height, room.depth
    );
    *applied = Some(room);
}

fn room_extents(room: RoomDimensions) -> Vec3 {
    Vec3::new(room.width, room.height, room.depth).max(Vec3::splat(MIN_MESH_EXTENT))
}

fn room_volume_mesh(room: RoomDimensions) -> Mesh {
    Cuboid::from_size(room_extents(room)).into()
}

fn room_edge_mesh(room: RoomDimensions) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, box_edge_vertices(room_extents(room) / 2.0));
    mesh
}

/// The 12 edges of a centred box as 24 line-list vertices.
pub fn box_edge_vertices(half: Vec3) -> Vec<[f32; 3]> {
    let corner = |x: f32, y: f32, z: f32| [x * half.x, y * half.y, z * half.z];
    let mut vertices = Vec::with_capacity(24);

    for &y in &[-1.0, 1.0] {
        for &z in &[-1.0, 1.0] {
            vertices.push(corner(-1.0, y, z));
            vertices.push(corner(1.0, y, z));
        }
    }
    for &x in &[-1.0, 1.0] {
        for &z in &[-1.0, 1.0] {
            vertices.push(corner(x, -1.0, z));
            vertices.push(corner(x, 1.0, z));
        }
    }
    for &x in &[-1.0, 1.0] {
        for &y in &[-1.0, 1.0] {
            vertices.push(corner(x, y, -1.0));
            vertices.push(corner(x, y, 1.0));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_cover_every_box_edge_once() {
        let half = Vec3::new(5.0, 4.0, 3.0);
        let vertices = box_edge_vertices(half);
        assert_eq!(vertices.len(), 24);

        let mut lengths: Vec<f32> = vertices
            .chunks(2)
            .map(|pair| Vec3::from_array(pair[0]).distance(Vec3::from_array(pair[1])))
            .collect();
        lengths.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(lengths, [6.0, 6.0, 6.0, 6.0, 8.0, 8.0, 8.0, 8.0, 10.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn degenerate_room_still_builds_a_mesh() {
        let room = RoomDimensions {
            width: 0.0,
            height: -2.0,
            depth: 4.0,
        };
        assert_eq!(room_extents(room), Vec3::new(MIN_MESH_EXTENT, MIN_MESH_EXTENT, 4.0));
    }
}
