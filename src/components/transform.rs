//! World-space placement and size of an entity.
//!
//! [`Transform`] stores a top-left position (`x`, `y`) and an integer size
//! fixed at construction. The axis-aligned bounding box is derived from those
//! four values each time it is requested, so it can never go stale.

use bevy_ecs::prelude::Component;
use raylib::prelude::Rectangle;

use crate::components::collider::Collider;

/// Position (top-left origin) plus size with a derived bounding box.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    x: f32,
    y: f32,
    width: u32,
    height: u32,
}

impl Transform {
    /// Create a transform at `(x, y)` with the given pixel size.
    pub fn new(x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bottom edge in world space.
    pub fn bottom(&self) -> f32 {
        self.y + self.height as f32
    }

    /// Right edge in world space.
    pub fn right(&self) -> f32 {
        self.x + self.width as f32
    }

    /// Teleport to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Translate by an already dt-scaled displacement.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

impl Collider for Transform {
    fn aabb(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}
