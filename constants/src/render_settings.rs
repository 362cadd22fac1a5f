use bevy::color::Color;

/// Colour applied to the furniture piece the user is manipulating while it overlaps another piece.
pub const ALERT_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Used when a furniture record carries a colour string that does not parse.
pub const FALLBACK_FURNITURE_COLOUR: Color = Color::srgb(0.6, 0.6, 0.6);

/// Translucent room volume (#2080ff at 10% opacity).
pub const ROOM_FILL_COLOUR: Color = Color::srgba(0.125, 0.502, 1.0, 0.1);

/// Room edge lines (#0040a0).
pub const ROOM_EDGE_COLOUR: Color = Color::srgb(0.0, 0.251, 0.627);

pub const ROOM_ACCENT_LIGHT_COLOUR: Color = Color::srgb(1.0, 0.6, 0.0);
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;
pub const KEY_LIGHT_INTENSITY: f32 = 2_000_000.0;
pub const ACCENT_LIGHT_INTENSITY: f32 = 600_000.0;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

pub const CAMERA_START_POSITION: [f32; 3] = [-4.0, 3.0, 6.0];
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

/// Orbit sensitivities in radians per pixel of mouse motion.
pub const ORBIT_YAW_SENSITIVITY: f32 = 0.0035;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.0030;
pub const ORBIT_MIN_RADIUS: f32 = 1.0;
pub const ORBIT_MAX_RADIUS: f32 = 150.0;

/// Smallest extent used when building a mesh for a degenerate furniture size.
pub const MIN_MESH_EXTENT: f32 = 0.001;
