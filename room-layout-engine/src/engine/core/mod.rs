//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, command line
//! configuration, state transitions and plugin initialisation for both
//! native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with picking, JSON asset loading, the furniture
/// editor and platform-specific overlays.
pub mod app_setup;

/// Application state machine: `Loading` until the first layout is chosen, then `Running`.
pub mod app_state;

/// Editor configuration parsed from command line flags.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
