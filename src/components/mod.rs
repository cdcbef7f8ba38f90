//! ECS components and plain collider types.
//!
//! Submodules overview:
//! - [`collider`] – collision capability trait and AABB overlap test
//! - [`movement`] – velocity, gravity and charge-jump impulse
//! - [`player`] – charge-jump and air-control state of the potato
//! - [`rescuable`] – named friends that can be rescued inside a level
//! - [`tile`] – static solid blocks of a level
//! - [`transform`] – top-left position and size with a derived AABB

pub mod collider;
pub mod movement;
pub mod player;
pub mod rescuable;
pub mod tile;
pub mod transform;
