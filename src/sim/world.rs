//! World bounds, gravity, and the deterministic hut layout
//!
//! The world is a long horizontal strip: reflective edges on all four
//! sides, with a ground band along the bottom that entities walk on. It
//! owns no entities; it only answers geometry questions and says where
//! huts belong.

use crate::consts::*;

use super::vec2::Vec2;

/// Immutable world parameters. Cheap to copy; the tick loop copies it once
/// per step to keep borrows simple.
#[derive(Debug, Clone, Copy)]
pub struct World {
    gravity: Vec2,
}

impl World {
    pub fn new(gravity: Vec2) -> Self {
        Self { gravity }
    }

    /// Gravity acceleration applied each tick (positive y is down)
    #[inline]
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        0.0
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        WORLD_MAX_X
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        0.0
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        WORLD_MAX_Y
    }

    /// Thickness of the ground band at the bottom of the world
    #[inline]
    pub fn ground_height(&self) -> f32 {
        GROUND_HEIGHT
    }

    /// The y coordinate of the walkable ground line
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.max_y() - self.ground_height()
    }

    /// Hut centers: one every `HUT_SPACING` units along x starting at
    /// `min_x`, all resting on the ground line. Fully deterministic.
    pub fn obstacle_positions(&self) -> Vec<Vec2> {
        let count = ((self.max_x() - self.min_x()) / HUT_SPACING).ceil() as usize;
        let floor = self.floor_y();
        (0..count)
            .map(|i| Vec2::new(self.min_x() + i as f32 * HUT_SPACING, floor))
            .collect()
    }
}
