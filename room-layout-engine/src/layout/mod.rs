//! Rendering-independent core of the layout editor.
//!
//! Holds the furniture pieces of the loaded layout, derives world-space
//! bounds for them, finds overlapping pairs and decides which piece is
//! shown in the alert colour. Nothing here touches entities or assets;
//! the `tools::furniture_editor` systems feed pointer events in and
//! apply the resulting colours.
//!
//! ```text
//! Layout ──load──> FurnitureModel ──bounds_of──> Aabb3d
//!                        │                          │
//!                        │                  detect (all pairs)
//!                        │                          │
//! DragStart/DragEnd ──> DragState ──resolve──> Highlight per piece
//! ```

/// Per-piece world-space AABB including rotation.
pub mod bounds;

/// Pairwise overlap detection, rebuilt every frame.
pub mod collision;

/// Active and last-released drag tracking.
pub mod drag_state;

/// Flat list of placed pieces for the loaded layout.
pub mod furniture;

/// Alert colour policy for the piece under manipulation.
pub mod highlight;

/// Per-frame driver tying the pieces together.
pub mod session;

pub use collision::CollisionReport;
pub use drag_state::DragState;
pub use furniture::PlacedFurniture;
pub use session::LayoutSession;
