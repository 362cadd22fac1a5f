/// Room size used when a layout is created without explicit dimensions.
pub const DEFAULT_ROOM_WIDTH: f32 = 10.0;
pub const DEFAULT_ROOM_HEIGHT: f32 = 8.0;
pub const DEFAULT_ROOM_DEPTH: f32 = 10.0;

pub const DEFAULT_LAYOUT_NAME: &str = "New Layout";

/// Prefix of generated layout ids, followed by the creation time in milliseconds.
pub const LAYOUT_ID_PREFIX: &str = "layout";
