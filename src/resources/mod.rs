//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and read by systems and
//! observers. Nothing here is a global: every consumer receives it through
//! its system parameters.
//!
//! Overview
//! - `debugmode` – presence toggles the debug walk and overlays
//! - `endgame` – rescue summary shown once the game is won
//! - `gameconfig` – window settings and gameplay tunables from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state with press/release edges
//! - `level` – the resident level: tiles and friends still waiting
//! - `levelslider` – level sequence, rescued friends and end-of-game flag
//! - `levelsource` – level file format and loaders
//! - `screensize` – playfield dimensions in pixels
//! - `systemsstore` – registry of state hook systems by name
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod endgame;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod levelslider;
pub mod levelsource;
pub mod screensize;
pub mod systemsstore;
pub mod worldtime;
