//! Friends waiting to be rescued inside a level.

use raylib::prelude::Rectangle;

use crate::components::collider::Collider;

/// Every friend that can be rescued during a run, in display order.
pub const FRIENDS: [&str; 4] = ["butter", "cheese", "dried_meat", "milk"];

/// A named NPC collider. Touching it rescues the friend and removes it
/// from the level.
#[derive(Debug, Clone, PartialEq)]
pub struct Rescuable {
    pub name: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rescuable {
    pub fn new(name: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }
}

impl Collider for Rescuable {
    fn aabb(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}
