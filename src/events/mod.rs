//! Event types and observers.
//!
//! Events are the observer bus of the game: the player system emits them and
//! observers registered on the world react within the same frame, in
//! registration order.
//!
//! Submodules:
//! - [`boundary`] – player left the screen vertically; drives level transitions
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`gamewon`] – the last level was cleared; builds the end screen summary
//! - [`rescue`] – a friend was touched and rescued
//! - [`switchdebug`] – toggle debug walking and overlays on/off
pub mod boundary;
pub mod gamestate;
pub mod gamewon;
pub mod rescue;
pub mod switchdebug;
