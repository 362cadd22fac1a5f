use constants::room::{DEFAULT_ROOM_DEPTH, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// -- Furniture -----------------------------------------------------

/// Mesh family of a furniture piece.
///
/// Unknown kind strings are kept verbatim so a record survives a
/// load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShapeKind {
    #[default]
    Box,
    Cylinder,
    Other(String),
}

impl From<String> for ShapeKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "box" => ShapeKind::Box,
            "cylinder" => ShapeKind::Cylinder,
            _ => ShapeKind::Other(value),
        }
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Box => "box".to_string(),
            ShapeKind::Cylinder => "cylinder".to_string(),
            ShapeKind::Other(raw) => raw,
        }
    }
}

/// One placed item. `size` is (width, height, depth) for boxes and
/// (diameter, height, diameter) for cylinders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: ShapeKind,
    #[serde(default, deserialize_with = "lenient_vec3")]
    pub position: [f32; 3],
    #[serde(
        default,
        deserialize_with = "lenient_rotation",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation: Option<[f32; 3]>,
    #[serde(default, deserialize_with = "lenient_vec3")]
    pub size: [f32; 3],
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: String,
}

// Furniture records are taken as they come: a malformed field degrades to a
// zero component or an empty string instead of rejecting the whole document.
// A zero size component makes the piece degenerate, so it never collides.

fn vec3_from_value(value: &Value) -> [f32; 3] {
    let mut out = [0.0; 3];
    if let Value::Array(items) = value {
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = item.as_f64().map(|v| v as f32).unwrap_or(0.0);
        }
    }
    out
}

fn lenient_vec3<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[f32; 3], D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(vec3_from_value(&value))
}

fn lenient_rotation<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<[f32; 3]>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(_) => Some(vec3_from_value(&value)),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ShapeKind, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => ShapeKind::from(text),
        Value::Null => ShapeKind::default(),
        other => ShapeKind::Other(other.to_string()),
    })
}

// -- Layout --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            height: DEFAULT_ROOM_HEIGHT,
            depth: DEFAULT_ROOM_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    /// Milliseconds since the Unix epoch of the last write.
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub room_dimensions: RoomDimensions,
    #[serde(default)]
    pub furnitures: Vec<Furniture>,
}

impl Layout {
    /// Overwrite every field present in `patch`. The id is never changed.
    pub fn apply_patch(&mut self, patch: LayoutPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(room) = patch.room_dimensions {
            self.room_dimensions = room;
        }
        if let Some(furnitures) = patch.furnitures {
            self.furnitures = furnitures;
        }
    }
}

/// Partial layout body used for creation and wholesale updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_dimensions: Option<RoomDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnitures: Option<Vec<Furniture>>,
}

impl From<&Layout> for LayoutPatch {
    fn from(layout: &Layout) -> Self {
        Self {
            user_id: Some(layout.user_id.clone()),
            name: Some(layout.name.clone()),
            room_dimensions: Some(layout.room_dimensions),
            furnitures: Some(layout.furnitures.clone()),
        }
    }
}

// -- Library document ----------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub layout_ids: Vec<String>,
}

/// Catalogue entry describing a furniture template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureType {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default_size: [f32; 3],
    #[serde(default)]
    pub default_color: String,
    #[serde(rename = "type", default)]
    pub kind: ShapeKind,
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub layouts: Vec<Layout>,
    #[serde(default)]
    pub furniture_types: Vec<FurnitureType>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl AppData {
    pub fn find_layout(&self, id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == id)
    }

    /// Layouts owned by `user_id`, in stored order.
    pub fn layouts_for_user<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Layout> + 'a {
        self.layouts.iter().filter(move |l| l.user_id == user_id)
    }
}
