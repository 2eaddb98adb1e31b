//! 2D vector value type
//!
//! Screen-style coordinates: +x is right, +y is down. Gravity is therefore
//! a positive-y vector and jump thrust a negative-y one.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Plain `f32` 2D vector, `Copy` everywhere
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length (no sqrt, for threshold comparisons)
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in this direction.
    ///
    /// A zero-length vector has no direction; normalizing one is reported as
    /// [`SimError::DegenerateVector`] instead of leaking NaN into the state.
    pub fn normalized(&self) -> Result<Vec2, SimError> {
        let len = self.length();
        if len == 0.0 {
            return Err(SimError::DegenerateVector);
        }
        Ok(Vec2::new(self.x / len, self.y / len))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_ops() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(-1.0, 2.0);
        assert_eq!(a + b, Vec2::new(2.0, 6.0));
        assert_eq!(a - b, Vec2::new(4.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
        assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
    }

    #[test]
    fn test_length() {
        // 3-4-5 triangle
        assert!((Vec2::new(3.0, 4.0).length() - 5.0).abs() < 0.001);
        assert_eq!(Vec2::ZERO.length(), 0.0);
        assert!((Vec2::new(3.0, 4.0).length_squared() - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_dot() {
        // Perpendicular unit vectors
        assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(0.0, 1.0)), 0.0);
        // Parallel
        assert!((Vec2::new(2.0, 0.0).dot(Vec2::new(3.0, 0.0)) - 6.0).abs() < 0.001);
        // Opposed
        assert!(Vec2::new(1.0, 1.0).dot(Vec2::new(-1.0, -1.0)) < 0.0);
    }

    #[test]
    fn test_normalized() {
        let n = Vec2::new(0.0, 7.0).normalized().unwrap();
        assert!((n.length() - 1.0).abs() < 0.001);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_normalized_zero_is_degenerate() {
        assert_eq!(Vec2::ZERO.normalized(), Err(SimError::DegenerateVector));
    }

    proptest! {
        #[test]
        fn prop_sum_with_negation_vanishes(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let v = Vec2::new(x, y);
            prop_assert!((v + v * -1.0).length() < 0.001);
        }

        #[test]
        fn prop_normalized_has_unit_length(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 0.001);
            let n = v.normalized().unwrap();
            prop_assert!((n.length() - 1.0).abs() < 0.001);
        }

        #[test]
        fn prop_dot_with_perpendicular_is_zero(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let v = Vec2::new(x, y);
            prop_assume!(v.length() > 0.001);
            let n = v.normalized().unwrap();
            let perp = Vec2::new(-n.y, n.x);
            prop_assert!(n.dot(perp).abs() < 0.001);
        }
    }
}
