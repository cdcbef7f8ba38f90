//! Game systems.
//!
//! Submodules overview
//! - [`collision`] – tile collision resolution, ground probe and screen bounds
//! - [`gamestate`] – check for pending state transitions and run conditions
//! - [`input`] – read hardware input and turn key presses into actions
//! - [`player`] – per-frame player update and event emission
//! - [`render`] – draw level, player, HUD and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod collision;
pub mod gamestate;
pub mod input;
pub mod player;
pub mod render;
pub mod time;
