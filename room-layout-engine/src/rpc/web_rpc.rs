use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use layout_store::{Layout, RoomDimensions};
use serde::{Deserialize, Serialize};

use crate::engine::systems::fps_tracking::smoothed_fps;
use crate::layout::LayoutSession;
use crate::tools::furniture_editor::highlight::pairs_json;
use crate::tools::furniture_editor::state::{FrameCollisions, LoadLayoutEvent, RoomResizeEvent};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Outgoing queues drained to the host page once per frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Cheap filter; full parsing happens on the Bevy side.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, RPC listener not registered");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Hand ownership of the closure to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    session: Res<LayoutSession>,
    frame: Res<FrameCollisions>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut load_events: EventWriter<LoadLayoutEvent>,
    mut resize_events: EventWriter<RoomResizeEvent>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);

                let result = match request.method.as_str() {
                    "load_layout" => handle_load_layout(&request.params, &mut load_events),
                    "set_room_dimensions" => {
                        handle_set_room_dimensions(&request.params, &mut resize_events)
                    }
                    "get_layout_snapshot" => handle_get_layout_snapshot(&session),
                    "get_collisions" => Ok(serde_json::json!({
                        "pairs": pairs_json(&frame.report)
                    })),
                    "get_fps" => Ok(serde_json::json!({
                        "fps": smoothed_fps(&diagnostics).unwrap_or(0.0) as f32
                    })),
                    _ => Err(RpcError::method_not_found(&request.method)),
                };

                if let Some(response) = build_response(request.id, result) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Failed to parse RPC message: {}", parse_error);
            }
        }
    }
}

/// Replace the scene with the layout sent by the host page.
fn handle_load_layout(
    params: &serde_json::Value,
    load_events: &mut EventWriter<LoadLayoutEvent>,
) -> Result<serde_json::Value, RpcError> {
    let layout = parse_layout_params(params)?;
    info!("Layout '{}' requested over RPC", layout.id);

    let response = serde_json::json!({
        "success": true,
        "id": layout.id,
        "furniture_count": layout.furnitures.len(),
    });
    load_events.write(LoadLayoutEvent { layout });
    Ok(response)
}

fn handle_set_room_dimensions(
    params: &serde_json::Value,
    resize_events: &mut EventWriter<RoomResizeEvent>,
) -> Result<serde_json::Value, RpcError> {
    let room = parse_room_params(params)?;
    resize_events.write(RoomResizeEvent { room });

    Ok(serde_json::json!({
        "success": true,
        "room_dimensions": room,
    }))
}

fn handle_get_layout_snapshot(session: &LayoutSession) -> Result<serde_json::Value, RpcError> {
    let Some(snapshot) = session.snapshot() else {
        return Ok(serde_json::json!({ "layout": null }));
    };
    let layout = serde_json::to_value(&snapshot)
        .map_err(|e| RpcError::internal_error(&format!("Failed to serialise layout: {}", e)))?;
    Ok(serde_json::json!({ "layout": layout }))
}

pub fn parse_layout_params(params: &serde_json::Value) -> Result<Layout, RpcError> {
    #[derive(Deserialize)]
    struct LoadLayoutParams {
        layout: Layout,
    }

    serde_json::from_value::<LoadLayoutParams>(params.clone())
        .map(|p| p.layout)
        .map_err(|e| RpcError::invalid_params(&format!("Expected 'layout' object: {}", e)))
}

/// Room sizes must be finite and strictly positive.
pub fn parse_room_params(params: &serde_json::Value) -> Result<RoomDimensions, RpcError> {
    let room = serde_json::from_value::<RoomDimensions>(params.clone()).map_err(|_| {
        RpcError::invalid_params("Expected 'width', 'height' and 'depth' parameters")
    })?;

    let valid = [room.width, room.height, room.depth]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
    if !valid {
        return Err(RpcError::invalid_params("Room dimensions must be positive"));
    }

    Ok(room)
}

/// Notifications (no id) never get a response.
fn build_response(
    id: Option<serde_json::Value>,
    result: Result<serde_json::Value, RpcError>,
) -> Option<RpcResponse> {
    let id = id?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds have no host page.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_params_parses() {
        let request: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_collisions","id":7}"#).unwrap();
        assert_eq!(request.method, "get_collisions");
        assert!(request.params.is_null());
        assert_eq!(request.id, Some(json!(7)));
    }

    #[test]
    fn layout_params_use_persisted_shape() {
        let params = json!({
            "layout": {
                "id": "layout1",
                "userId": "user456",
                "name": "Living Room",
                "timestamp": 1700000000000u64,
                "roomDimensions": { "width": 10, "height": 8, "depth": 10 },
                "furnitures": [
                    { "id": "sofa", "type": "box", "position": [-3, 0, 0], "size": [5, 1, 5], "color": "#6a4c93" }
                ]
            }
        });
        let layout = parse_layout_params(&params).unwrap();
        assert_eq!(layout.id, "layout1");
        assert_eq!(layout.furnitures.len(), 1);
        assert_eq!(layout.furnitures[0].size, [5.0, 1.0, 5.0]);

        let err = parse_layout_params(&json!({ "id": "layout1" })).unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn malformed_furniture_still_loads() {
        let params = json!({
            "layout": {
                "id": "layout1",
                "furnitures": [
                    { "id": "rug", "type": "box", "position": null, "size": [2, 0.1], "color": "#aa0000" },
                    { "id": "sofa", "type": "box", "position": [0, 0, 0], "size": [2, 1, 1], "color": "#6a4c93" }
                ]
            }
        });
        let layout = parse_layout_params(&params).unwrap();
        assert_eq!(layout.furnitures.len(), 2);
        assert_eq!(layout.furnitures[0].position, [0.0; 3]);
        assert_eq!(layout.furnitures[0].size, [2.0, 0.1, 0.0]);
    }

    #[test]
    fn room_params_must_be_positive() {
        let room = parse_room_params(&json!({ "width": 12, "height": 8, "depth": 6 })).unwrap();
        assert_eq!(room.width, 12.0);

        assert_eq!(
            parse_room_params(&json!({ "width": 0, "height": 8, "depth": 6 }))
                .unwrap_err()
                .code,
            -32602
        );
        assert_eq!(
            parse_room_params(&json!({ "width": 3 })).unwrap_err().code,
            -32602
        );
    }

    #[test]
    fn notifications_get_no_response() {
        assert!(build_response(None, Ok(json!({}))).is_none());

        let response = build_response(Some(json!(3)), Err(RpcError::method_not_found("fly"))).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.data, Some(json!({ "method": "fly" })));
        assert!(response.result.is_none());
    }
}
