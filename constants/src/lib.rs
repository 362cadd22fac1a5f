//! Shared constants for the room layout workspace.

pub mod paths;
pub mod render_settings;
pub mod room;
