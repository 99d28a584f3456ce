//! Screen-space geometry helpers: headings, bounding boxes, and wrap.
//!
//! Vector arithmetic itself comes from [`bevy::math::Vec2`]; this module only
//! adds the conventions the game relies on (degrees, +Y down, rotated sprite
//! bounds).

use crate::constants::{HEIGHT, WIDTH};
use bevy::prelude::*;

/// Vector of length `magnitude` pointing along `rotation_deg`.
///
/// A rotation of 0° points up the screen (−Y).  Positive angles turn
/// counter-clockwise as seen on screen, so 90° points left (−X).
pub fn heading(rotation_deg: f32, magnitude: f32) -> Vec2 {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    Vec2::new(-magnitude * sin, -magnitude * cos)
}

/// Wrap an angle into `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    wrap_coordinate(angle, 360.0)
}

/// Wrap a single coordinate toroidally into `[0, extent)`.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let v = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to exactly `extent`.
    if v >= extent {
        0.0
    } else {
        v
    }
}

/// Wrap a point into the playfield, each axis independently.
#[inline]
pub fn wrap_to_screen(pos: Vec2) -> Vec2 {
    Vec2::new(wrap_coordinate(pos.x, WIDTH), wrap_coordinate(pos.y, HEIGHT))
}

/// Convert a screen-space position (top-left origin, +Y down) into Bevy world
/// space (centre origin, +Y up).
#[inline]
pub fn screen_to_world(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x - WIDTH / 2.0, HEIGHT / 2.0 - pos.y)
}

/// Axis-aligned bounding box in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
        }
    }

    /// Bounding box of a `size` rectangle centred on `center` and rotated by
    /// `rotation_deg`.  This is the rect a rotated sprite occupies.
    pub fn from_rotated_rect(center: Vec2, size: Vec2, rotation_deg: f32) -> Self {
        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let rotated = Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos);
        Self::new(center, rotated)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
