use std::collections::HashSet;

use bevy::prelude::*;
use constants::render_settings::FALLBACK_FURNITURE_COLOUR;
use layout_store::{Furniture, Layout, ShapeKind};

/// One furniture record in the live scene.
///
/// The record is kept as loaded; only `position` changes while the user
/// drags the piece around.
#[derive(Debug, Clone)]
pub struct PlacedFurniture {
    record: Furniture,
    pub position: Vec3,
    colour: Color,
}

impl PlacedFurniture {
    pub fn from_record(record: Furniture) -> Self {
        let colour = parse_colour(&record.color).unwrap_or_else(|| {
            warn!(
                "Furniture '{}' has unparsable colour '{}', using fallback",
                record.id, record.color
            );
            FALLBACK_FURNITURE_COLOUR
        });

        Self {
            position: Vec3::from_array(record.position),
            record,
            colour,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.record.kind
    }

    /// Raw size as stored: (width, height, depth) or (diameter, height, diameter).
    pub fn size(&self) -> Vec3 {
        Vec3::from_array(self.record.size)
    }

    /// Full extents of the box enclosing the piece in its local frame.
    /// Cylinders only use diameter and height.
    pub fn extents(&self) -> Vec3 {
        let [a, b, c] = self.record.size;
        match self.record.kind {
            ShapeKind::Cylinder => Vec3::new(a, b, a),
            _ => Vec3::new(a, b, c),
        }
    }

    /// Euler angles in radians, applied in XYZ order. Zero when absent.
    pub fn rotation(&self) -> Quat {
        let [x, y, z] = self.record.rotation.unwrap_or([0.0; 3]);
        Quat::from_euler(EulerRot::XYZ, x, y, z)
    }

    /// The piece's own colour, shown whenever it is not highlighted.
    pub fn colour(&self) -> Color {
        self.colour
    }

    /// Record with the current position written back.
    pub fn to_record(&self) -> Furniture {
        Furniture {
            position: self.position.to_array(),
            ..self.record.clone()
        }
    }
}

/// Parse a `#rrggbb` / `#rgb` (optionally with alpha) colour string.
pub fn parse_colour(raw: &str) -> Option<Color> {
    Srgba::hex(raw.trim()).ok().map(Color::from)
}

/// Authoritative list of pieces for the loaded layout, in layout order.
#[derive(Debug, Clone, Default)]
pub struct FurnitureModel {
    items: Vec<PlacedFurniture>,
}

impl FurnitureModel {
    /// Replace every piece with the layout's furniture records.
    pub fn load_from_layout(&mut self, layout: &Layout) {
        self.items = layout
            .furnitures
            .iter()
            .cloned()
            .map(PlacedFurniture::from_record)
            .collect();

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id()) {
                warn!(
                    "Layout '{}' contains duplicate furniture id '{}'",
                    layout.id,
                    item.id()
                );
            }
        }
    }

    pub fn current_items(&self) -> &[PlacedFurniture] {
        &self.items
    }

    /// Move the piece at `index` in layout order. Pieces are addressed by
    /// index because ids may repeat. Returns false when out of range.
    pub fn set_position(&mut self, index: usize, position: Vec3) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.position = position;
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> Vec<Furniture> {
        self.items.iter().map(PlacedFurniture::to_record).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
