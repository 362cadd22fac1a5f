//! JSON-RPC 2.0 communication layer for the web host page.
//!
//! Implements bidirectional messaging between the Bevy engine and the host page via
//! iframe postMessage, supporting both request-response and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Host (Parent Window)   <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Methods
//!
//! ### Layout
//! - `load_layout { layout }`: Replace the scene with a layout record in the persisted JSON shape
//! - `set_room_dimensions { width, height, depth }`: Resize the room; furniture is not moved
//! - `get_layout_snapshot`: Loaded layout with current (dragged) positions, or `null`
//! - `get_collisions`: Colliding pairs of the latest frame as `[[a, b], ...]`
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ## Notifications
//!
//! - `layout_loaded { id, name, furniture_count }`
//! - `collision_state_changed { pairs }`: Sent only when the pair set changes
//! - `drag_state_changed { active, last_dragged }`
//! - `fps_update { fps }`: Twice a second

/// JSON-RPC 2.0 bidirectional communication system for the host page.
///
/// Handles request-response patterns, notifications and the WASM message listener.
pub mod web_rpc;
