//! Static level geometry.

use raylib::prelude::Rectangle;

use crate::components::collider::Collider;

/// Immutable solid block. Built once at level load and owned by the
/// [`Level`](crate::resources::level::Level) that loaded it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Tile {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl Collider for Tile {
    fn aabb(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}
