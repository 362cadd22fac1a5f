use bevy::prelude::*;
use layout_store::{Layout, RoomDimensions};

use super::collision::{CollisionReport, detect};
use super::drag_state::DragState;
use super::furniture::{FurnitureModel, PlacedFurniture};
use super::highlight::{Highlight, resolve};

/// Display colour decided for one piece this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColour {
    pub id: String,
    pub colour: Color,
    pub highlight: Highlight,
}

/// Everything one frame tick decides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    pub report: CollisionReport,
    pub colours: Vec<ResolvedColour>,
}

impl FrameOutcome {
    pub fn colour_of(&self, id: &str) -> Option<Color> {
        self.colours.iter().find(|c| c.id == id).map(|c| c.colour)
    }
}

/// Session state of the editor: the loaded layout, its pieces and the
/// drag tracker. Loading a layout discards all of it at once.
#[derive(Resource, Debug, Default)]
pub struct LayoutSession {
    loaded: Option<Layout>,
    room: RoomDimensions,
    model: FurnitureModel,
    drag: DragState,
}

impl LayoutSession {
    pub fn load_layout(&mut self, layout: &Layout) {
        self.model.load_from_layout(layout);
        self.drag.clear();
        self.room = layout.room_dimensions;
        self.loaded = Some(Layout {
            furnitures: Vec::new(),
            ..layout.clone()
        });

        info!(
            "Loaded layout '{}' ({}) with {} furniture pieces",
            layout.name,
            layout.id,
            self.model.len()
        );
    }

    pub fn drag_start(&mut self, id: &str) {
        debug!("Drag start: {}", id);
        self.drag.on_drag_start(id);
    }

    pub fn drag_end(&mut self, id: &str) {
        debug!("Drag end: {}", id);
        self.drag.on_drag_end(id);
    }

    /// Move the piece at `index` in layout order.
    pub fn move_item(&mut self, index: usize, position: Vec3) -> bool {
        self.model.set_position(index, position)
    }

    pub fn set_room_dimensions(&mut self, room: RoomDimensions) {
        self.room = room;
    }

    /// Detect collisions over the current pieces and pick each piece's colour.
    pub fn tick(&self) -> FrameOutcome {
        let items = self.model.current_items();
        let report = detect(items);
        let colours = items
            .iter()
            .map(|item| resolve_colour(item, &report, &self.drag))
            .collect();

        FrameOutcome { report, colours }
    }

    pub fn items(&self) -> &[PlacedFurniture] {
        self.model.current_items()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn room(&self) -> RoomDimensions {
        self.room
    }

    pub fn layout_id(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.id.as_str())
    }

    pub fn layout_name(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.name.as_str())
    }

    /// Take over the id and timestamp the store assigned on save. Pieces,
    /// drag state and room size are left alone.
    pub fn adopt_saved(&mut self, saved: &Layout) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.id = saved.id.clone();
            loaded.timestamp = saved.timestamp;
        }
    }

    /// The loaded layout with current positions and room size, ready to persist.
    pub fn snapshot(&self) -> Option<Layout> {
        let loaded = self.loaded.as_ref()?;
        Some(Layout {
            room_dimensions: self.room,
            furnitures: self.model.snapshot(),
            ..loaded.clone()
        })
    }
}

fn resolve_colour(item: &PlacedFurniture, report: &CollisionReport, drag: &DragState) -> ResolvedColour {
    let highlight = resolve(item.id(), report, drag);
    ResolvedColour {
        id: item.id().to_string(),
        colour: highlight.colour(item),
        highlight,
    }
}
