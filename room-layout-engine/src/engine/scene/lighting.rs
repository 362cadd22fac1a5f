use bevy::prelude::*;
use constants::render_settings::{
    ACCENT_LIGHT_INTENSITY, AMBIENT_LIGHT_BRIGHTNESS, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION,
    ROOM_ACCENT_LIGHT_COLOUR,
};
use layout_store::RoomDimensions;

const LIGHT_RANGE: f32 = 60.0;

/// Warm light that sits in the room's upper back-left corner.
#[derive(Component)]
pub struct RoomAccentLight;

pub fn spawn_lighting(commands: &mut Commands, room: RoomDimensions) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_LIGHT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: KEY_LIGHT_INTENSITY,
            range: LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(KEY_LIGHT_POSITION)),
    ));

    commands.spawn((
        PointLight {
            intensity: ACCENT_LIGHT_INTENSITY,
            color: ROOM_ACCENT_LIGHT_COLOUR,
            range: LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(accent_light_position(room)),
        RoomAccentLight,
    ));
}

pub fn accent_light_position(room: RoomDimensions) -> Vec3 {
    Vec3::new(-room.width / 2.0, room.height / 2.0, -room.depth / 2.0)
}
