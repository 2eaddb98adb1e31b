//! Collision shapes and pairwise intersection
//!
//! Shapes are pure extent: a circle radius or a rect width/height. They do
//! not store a position. Every query takes the owning entity's position as
//! an argument, so the entity is always the source of truth and a stale
//! shape position cannot exist.
//!
//! All boundary tests are inclusive: touching counts as intersecting.

use super::vec2::Vec2;

/// Closed set of collision shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned rectangle, extents measured from the center
    Rect { width: f32, height: f32 },
}

impl Shape {
    /// Full horizontal extent (circle: diameter)
    #[inline]
    pub fn width(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => radius * 2.0,
            Shape::Rect { width, .. } => width,
        }
    }

    /// Full vertical extent (circle: diameter)
    #[inline]
    pub fn height(&self) -> f32 {
        match *self {
            Shape::Circle { radius } => radius * 2.0,
            Shape::Rect { height, .. } => height,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width() / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height() / 2.0
    }

    /// Distance from center to boundary along a unit direction.
    ///
    /// Circle: the radius, any direction. Rect: slab distance, the nearer of
    /// the two axis walls the ray would exit through. Used by collision
    /// resolution to measure penetration along the center-to-center line.
    /// `dir` must be unit length.
    pub fn extent_along(&self, dir: Vec2) -> f32 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Rect { width, height } => {
                let tx = if dir.x != 0.0 {
                    (width / 2.0 / dir.x).abs()
                } else {
                    f32::INFINITY
                };
                let ty = if dir.y != 0.0 {
                    (height / 2.0 / dir.y).abs()
                } else {
                    f32::INFINITY
                };
                tx.min(ty)
            }
        }
    }

    /// Do two shapes at the given centers overlap or touch?
    ///
    /// Exhaustive over the four ordered pairs; the mixed case is normalized
    /// to circle-vs-rect once so the math exists in one place.
    pub fn intersects(&self, pos: Vec2, other: &Shape, other_pos: Vec2) -> bool {
        match (*self, *other) {
            (Shape::Circle { radius: r1 }, Shape::Circle { radius: r2 }) => {
                (pos - other_pos).length() <= r1 + r2
            }
            (
                Shape::Rect {
                    width: w1,
                    height: h1,
                },
                Shape::Rect {
                    width: w2,
                    height: h2,
                },
            ) => {
                let dx = (pos.x - other_pos.x).abs();
                let dy = (pos.y - other_pos.y).abs();
                dx <= (w1 + w2) / 2.0 && dy <= (h1 + h2) / 2.0
            }
            (Shape::Circle { radius }, Shape::Rect { width, height }) => {
                circle_rect_overlap(pos, radius, other_pos, width / 2.0, height / 2.0)
            }
            (Shape::Rect { width, height }, Shape::Circle { radius }) => {
                circle_rect_overlap(other_pos, radius, pos, width / 2.0, height / 2.0)
            }
        }
    }
}

/// Circle-vs-axis-aligned-rect overlap, centers given, half extents for the
/// rect. Per-axis reject first, then the cheap face tests, then the corner.
fn circle_rect_overlap(circle_pos: Vec2, radius: f32, rect_pos: Vec2, hw: f32, hh: f32) -> bool {
    let dx = (circle_pos.x - rect_pos.x).abs();
    let dy = (circle_pos.y - rect_pos.y).abs();

    if dx > hw + radius || dy > hh + radius {
        return false;
    }
    if dx <= hw || dy <= hh {
        return true;
    }

    // Corner region: squared distance from the nearest rect corner
    let corner_sq = (dx - hw) * (dx - hw) + (dy - hh) * (dy - hh);
    corner_sq <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_circle() {
        let a = Shape::Circle { radius: 5.0 };
        let b = Shape::Circle { radius: 3.0 };
        assert!(a.intersects(Vec2::ZERO, &b, Vec2::new(7.0, 0.0)));
        assert!(!a.intersects(Vec2::ZERO, &b, Vec2::new(8.1, 0.0)));
    }

    #[test]
    fn test_circle_circle_touching_counts() {
        // Exactly radius sum apart
        let a = Shape::Circle { radius: 5.0 };
        let b = Shape::Circle { radius: 3.0 };
        assert!(a.intersects(Vec2::ZERO, &b, Vec2::new(8.0, 0.0)));
    }

    #[test]
    fn test_rect_rect() {
        let a = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        let b = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        // Centers 20 apart: separated
        assert!(!a.intersects(Vec2::ZERO, &b, Vec2::new(20.0, 0.0)));
        // Centers 9 apart: overlapping
        assert!(a.intersects(Vec2::ZERO, &b, Vec2::new(9.0, 0.0)));
        // Touching edges (10 apart) counts
        assert!(a.intersects(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
        // Overlap on x, separated on y
        assert!(!a.intersects(Vec2::ZERO, &b, Vec2::new(3.0, 15.0)));
    }

    #[test]
    fn test_circle_rect_axis_reject() {
        let circle = Shape::Circle { radius: 2.0 };
        let rect = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        // Far on x even though aligned on y
        assert!(!circle.intersects(Vec2::new(10.0, 0.0), &rect, Vec2::ZERO));
    }

    #[test]
    fn test_circle_rect_face_overlap() {
        let circle = Shape::Circle { radius: 2.0 };
        let rect = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        // Circle center within the rect's horizontal half-extent
        assert!(circle.intersects(Vec2::new(3.0, 6.5), &rect, Vec2::ZERO));
    }

    #[test]
    fn test_circle_rect_corner() {
        let circle = Shape::Circle { radius: 2.0 };
        let rect = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        // Corner at (5, 5): center (6, 6) is sqrt(2) from it, inside r=2
        assert!(circle.intersects(Vec2::new(6.0, 6.0), &rect, Vec2::ZERO));
        // Center (7, 7) is sqrt(8) ≈ 2.83 from the corner, outside r=2
        assert!(!circle.intersects(Vec2::new(7.0, 7.0), &rect, Vec2::ZERO));
    }

    #[test]
    fn test_circle_rect_symmetric_dispatch() {
        let circle = Shape::Circle { radius: 2.0 };
        let rect = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        let c_pos = Vec2::new(6.0, 6.0);
        assert_eq!(
            circle.intersects(c_pos, &rect, Vec2::ZERO),
            rect.intersects(Vec2::ZERO, &circle, c_pos)
        );
    }

    #[test]
    fn test_extent_along() {
        let circle = Shape::Circle { radius: 16.0 };
        let dir = Vec2::new(0.6, 0.8);
        assert!((circle.extent_along(dir) - 16.0).abs() < 0.001);

        let rect = Shape::Rect {
            width: 10.0,
            height: 10.0,
        };
        assert!((rect.extent_along(Vec2::new(1.0, 0.0)) - 5.0).abs() < 0.001);
        assert!((rect.extent_along(Vec2::new(0.0, -1.0)) - 5.0).abs() < 0.001);
        // Diagonal exits through a corner: 5 / cos(45°)
        let diag = Vec2::new(1.0, 1.0).normalized().unwrap();
        assert!((rect.extent_along(diag) - 7.071).abs() < 0.01);
    }

    #[test]
    fn test_extent_accessors() {
        let circle = Shape::Circle { radius: 16.0 };
        assert_eq!(circle.width(), 32.0);
        assert_eq!(circle.half_height(), 16.0);

        let rect = Shape::Rect {
            width: 18.0,
            height: 38.0,
        };
        assert_eq!(rect.half_width(), 9.0);
        assert_eq!(rect.height(), 38.0);
    }
}
