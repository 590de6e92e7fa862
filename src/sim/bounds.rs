//! Axis-aligned bounding boxes
//!
//! Every cell on the board collides through one primitive: AABB overlap.
//! Boxes are derived from a top-left position and a fixed square size, so
//! they are a pure function of current cell state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in board-pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build a square box from a top-left position and side length
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: f32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::splat(size),
        }
    }

    /// Strict overlap test. Boxes that merely share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Box center
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Side lengths
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
