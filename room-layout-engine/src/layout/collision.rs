use std::collections::BTreeSet;

use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use super::bounds::bounds_of;
use super::furniture::PlacedFurniture;

/// Unordered pair of furniture ids, stored with the lexicographically
/// smaller id first so either argument order finds it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollidingPair {
    first: String,
    second: String,
}

impl CollidingPair {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn names(&self, id: &str) -> bool {
        self.first == id || self.second == id
    }
}

/// Overlapping pairs for one frame. Always rebuilt from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pairs: BTreeSet<CollidingPair>,
}

impl CollisionReport {
    pub fn has_any_collision(&self) -> bool {
        !self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = &CollidingPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.contains(&CollidingPair::new(a, b))
    }

    /// True when any pair names `id`.
    pub fn involves(&self, id: &str) -> bool {
        self.pairs.iter().any(|pair| pair.names(id))
    }
}

/// Inclusive overlap: boxes that merely touch on a face, edge or corner collide.
pub fn boxes_overlap(a: &Aabb3d, b: &Aabb3d) -> bool {
    a.intersects(b)
}

/// Test every unordered pair of pieces for AABB overlap.
///
/// Quadratic in the number of pieces, which stays in the tens for a room.
pub fn detect(items: &[PlacedFurniture]) -> CollisionReport {
    let bounds: Vec<Option<Aabb3d>> = items.iter().map(bounds_of).collect();
    let mut pairs = BTreeSet::new();

    for (i, a) in bounds.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in bounds.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            if boxes_overlap(a, b) {
                pairs.insert(CollidingPair::new(items[i].id(), items[j].id()));
            }
        }
    }

    CollisionReport { pairs }
}
