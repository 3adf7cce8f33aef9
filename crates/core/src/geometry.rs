//! Geometry module - integer board vectors and quarter-turn rotations
//!
//! Coordinates follow the board: x grows to the right, y grows downward.
//! Rotations are about the origin, which for piece offsets is the pivot.

use std::ops::Add;

use crate::types::RotationDirection;

/// Integer 2D vector (board position or pivot-relative offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    #[inline]
    pub const fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Quarter turn clockwise: (x, y) -> (-y, x)
    #[inline]
    pub const fn rotate_cw(self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// Quarter turn counter-clockwise: (x, y) -> (y, -x)
    #[inline]
    pub const fn rotate_ccw(self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    #[inline]
    pub fn rotate(self, direction: RotationDirection) -> Vec2 {
        match direction {
            RotationDirection::Cw => self.rotate_cw(),
            RotationDirection::Ccw => self.rotate_ccw(),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2 { x, y }
    }
}

/// Rotate every offset of a piece about its pivot
pub fn rotate_offsets(offsets: &[Vec2; 4], direction: RotationDirection) -> [Vec2; 4] {
    offsets.map(|offset| offset.rotate(direction))
}
