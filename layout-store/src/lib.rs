//! Room layout records and the JSON file that persists them.
//!
//! The data file holds one [`model::AppData`] document. [`store::LayoutStore`]
//! reads and rewrites it wholesale on every operation; there is no locking
//! and no partial update.

/// Error type shared by all store operations.
pub mod error;

/// Serde data model mirroring the layout JSON document.
pub mod model;

/// File-backed create/read/update/delete of layouts.
pub mod store;

pub use error::StoreError;
pub use model::{AppData, Furniture, FurnitureType, Layout, LayoutPatch, RoomDimensions, ShapeKind, User};
pub use store::LayoutStore;
