//! Axis-aligned bounding boxes for sprite collision
//!
//! Every entity in the game is a rectangle: 70x70 ship and alien sprites and
//! thin laser bolts. Overlap testing is the only collision primitive needed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box, defined by its top-left corner and size.
///
/// Screen coordinates: +x right, +y down, origin at the arena's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width/height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box for a square sprite anchored at `pos`
    pub fn sprite(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Overlap test (touching edges do not count as overlap)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    /// Whether a point lies inside the box (inclusive of the min edge)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}
