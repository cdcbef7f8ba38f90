//! Potato Quest library.
//!
//! Platformer physics and level transitions for a vertical climb through a
//! stack of single-screen levels. Exposes the ECS components, resources,
//! systems and events for the binary and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
