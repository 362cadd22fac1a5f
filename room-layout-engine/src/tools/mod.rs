//! Interactive tools layered over the room scene.
//!
//! ## Furniture Editor
//!
//! - **Drag**: primary-button drag on a piece slides it across the horizontal
//!   plane through its centre, keeping the grab offset
//! - **Collisions**: every frame all pieces are tested pairwise; the dragged
//!   piece (or the last one released) turns red while it overlaps anything
//! - **Save**: `Ctrl+S` (native) writes the current arrangement to the data file
//!
//! ### WASM Builds
//! - Layouts and room sizes arrive over JSON-RPC from the host page
//! - No status overlay; collision and drag changes are sent as notifications

/// Furniture placement, drag relay and collision highlighting.
pub mod furniture_editor;
