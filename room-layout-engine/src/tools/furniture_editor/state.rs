use bevy::prelude::*;
use layout_store::{Layout, RoomDimensions};

use crate::layout::CollisionReport;

// Events

/// Replace the whole scene with this layout.
#[derive(Event, Debug, Clone)]
pub struct LoadLayoutEvent {
    pub layout: Layout,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct RoomResizeEvent {
    pub room: RoomDimensions,
}

// Components

/// The only link from a mesh entity back to its furniture record.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct FurnitureId(pub String);

/// Colour currently written into the entity's material.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DisplayedColour(pub Color);

// Resources

/// Furniture id to mesh entity, in the same order as the session's pieces.
///
/// Rebuilt on every layout load.
#[derive(Resource, Debug, Default)]
pub struct FurnitureEntities {
    entries: Vec<(String, Entity)>,
}

impl FurnitureEntities {
    pub fn push(&mut self, id: &str, entity: Entity) {
        self.entries.push((id.to_string(), entity));
    }

    /// Position of `entity` in piece order.
    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.entries.iter().position(|(_, e)| *e == entity)
    }

    /// Entities in piece order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().map(|(_, entity)| *entity)
    }

    pub fn take(&mut self) -> Vec<(String, Entity)> {
        std::mem::take(&mut self.entries)
    }
}

/// Grab made at drag start: the dragged entity, the height of the horizontal
/// plane it slides on, and the offset from the pointer hit to its centre.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct DragGrab {
    pub entity: Option<Entity>,
    pub plane_height: f32,
    pub offset: Vec3,
}

/// Colliding pairs of the latest frame, for RPC queries and the overlay.
#[derive(Resource, Debug, Default)]
pub struct FrameCollisions {
    pub report: CollisionReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_keep_one_entry_per_piece() {
        let mut entities = FurnitureEntities::default();
        entities.push("chair", Entity::from_raw(1));
        entities.push("chair", Entity::from_raw(2));
        entities.push("desk", Entity::from_raw(3));

        let order: Vec<Entity> = entities.entities().collect();
        assert_eq!(
            order,
            [Entity::from_raw(1), Entity::from_raw(2), Entity::from_raw(3)]
        );

        assert_eq!(entities.index_of(Entity::from_raw(2)), Some(1));
        assert_eq!(entities.index_of(Entity::from_raw(9)), None);

        let taken = entities.take();
        assert_eq!(taken.len(), 3);
        assert_eq!(entities.entities().count(), 0);
    }
}
