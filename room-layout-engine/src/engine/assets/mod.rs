//! Asset types loaded through the bevy asset server.

/// Layout library document registered as a JSON asset.
///
/// Wraps the persisted `AppData` so the engine can load it like any other asset.
pub mod layout_library;
