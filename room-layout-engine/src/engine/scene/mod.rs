//! Static scene around the furniture: the translucent room volume with its
//! edge lines, and the lights.

/// Scene lighting, including the accent light pinned to a room corner.
pub mod lighting;

/// Room volume and edge meshes, rebuilt when the room is resized.
pub mod room;
