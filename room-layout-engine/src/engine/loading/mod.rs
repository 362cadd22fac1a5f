//! Startup loading of the layout library.
//!
//! Requests the library through the asset server, picks the layout to open
//! and hands it to the editor as a `LoadLayoutEvent`.

/// Layout library request and initial layout selection.
pub mod layout_loader;
