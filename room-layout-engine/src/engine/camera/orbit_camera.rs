use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION, ORBIT_MAX_RADIUS,
    ORBIT_MIN_RADIUS, ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
};
use std::f32::consts::FRAC_PI_2;

use crate::layout::LayoutSession;

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.05;
const ZOOM_STEP: f32 = 0.1;
const PIXELS_PER_LINE: f32 = 100.0;

/// Spherical camera placement around a focus point.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length().clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
        let pitch = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .asin()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let yaw = offset.x.atan2(offset.z);

        Self {
            focus,
            radius,
            yaw,
            pitch,
        }
    }

    /// Mouse motion in pixels. Moving right swings the camera left around the focus.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_YAW_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_PITCH_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Positive `lines` moves closer.
    pub fn zoom(&mut self, lines: f32) {
        let factor = (1.0 - lines * ZOOM_STEP).max(0.1);
        self.radius = (self.radius * factor).clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
    }

    pub fn position(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.focus + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.focus, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(Vec3::from_array(CAMERA_START_POSITION), Vec3::ZERO)
    }
}

pub fn spawn_orbit_camera(commands: &mut Commands, orbit: &OrbitCamera) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
    ));
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    session: Res<LayoutSession>,
) {
    if session.drag_state().is_dragging() {
        mouse_motion.clear();
        scroll_events.clear();
        return;
    }

    let mut changed = false;

    let motion: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if mouse_button.pressed(MouseButton::Right) && motion != Vec2::ZERO {
        orbit.orbit(motion);
        changed = true;
    }

    for event in scroll_events.read() {
        let lines = match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_LINE,
        };
        orbit.zoom(lines);
        changed = true;
    }

    if !changed {
        return;
    }

    for mut transform in &mut camera_query {
        *transform = orbit.transform();
    }
}
