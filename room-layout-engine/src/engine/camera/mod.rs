//! Orbit camera around the room centre.
//!
//! Right-drag orbits, the wheel zooms. Input is ignored while a furniture
//! piece is being dragged so the two gestures never fight.

/// Orbit camera resource, spawn helper and controller system.
pub mod orbit_camera;
