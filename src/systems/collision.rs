//! Tile collision resolution, ground probing and screen-boundary checks.
//!
//! These are plain functions over a [`Transform`], a [`Movement`] and the
//! tiles of the resident level; the player system calls them in order every
//! frame:
//!
//! 1. [`handle_collisions`] moves the body and pushes it out of tiles.
//! 2. [`check_on_ground`] probes one pixel below the resolved box.
//! 3. [`check_bounds`] clamps the sides and reports top/bottom exits.
//!
//! Axes are resolved one after the other: the horizontal move is fully
//! settled before the vertical move starts. Approaching a corner diagonally
//! can therefore stop the body on the side of a tile where a simultaneous
//! solve would have landed it on top. That asymmetry is expected.
//!
//! There is no sub-stepping, so a very large `dt` can carry a body through a
//! thin tile in a single frame.

use raylib::prelude::Rectangle;

use crate::components::collider::{Collider, overlaps};
use crate::components::movement::Movement;
use crate::components::tile::Tile;
use crate::components::transform::Transform;
use crate::events::boundary::BoundarySide;

/// Which axes were stopped by a tile during [`handle_collisions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionOutcome {
    pub hit_horizontal: bool,
    pub hit_vertical: bool,
}

/// Move by `(vx, vy) * dt` and resolve overlaps against `tiles`, one axis at a time.
///
/// On a horizontal hit the box is clamped flush against the tile side it
/// moved into and `vx` is zeroed. On a vertical hit a falling box lands on
/// the tile top, a rising one is stopped under the tile bottom, and `vy` is
/// zeroed.
pub fn handle_collisions(
    transform: &mut Transform,
    movement: &mut Movement,
    tiles: &[Tile],
    dt: f32,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    let dx = movement.vx * dt;
    transform.move_by(dx, 0.0);
    if dx != 0.0 {
        for tile in tiles {
            if !overlaps(&transform.aabb(), &tile.aabb()) {
                continue;
            }
            if dx > 0.0 {
                transform.set_x(tile.left() - transform.width() as f32);
            } else {
                transform.set_x(tile.right());
            }
            movement.vx = 0.0;
            outcome.hit_horizontal = true;
        }
    }

    let dy = movement.vy * dt;
    transform.move_by(0.0, dy);
    if dy != 0.0 {
        for tile in tiles {
            if !overlaps(&transform.aabb(), &tile.aabb()) {
                continue;
            }
            if dy > 0.0 {
                transform.set_y(tile.top() - transform.height() as f32);
            } else {
                transform.set_y(tile.bottom());
            }
            movement.vy = 0.0;
            outcome.hit_vertical = true;
        }
    }

    outcome
}

/// One-pixel-tall probe spanning the full width, directly under the box.
pub fn ground_probe(transform: &Transform) -> Rectangle {
    Rectangle {
        x: transform.x(),
        y: transform.bottom(),
        width: transform.width() as f32,
        height: 1.0,
    }
}

/// True when the ground probe overlaps any tile.
///
/// Must run after [`handle_collisions`] so it sees the resolved position.
/// Velocity plays no part in the answer.
pub fn check_on_ground(transform: &Transform, tiles: &[Tile]) -> bool {
    let probe = ground_probe(transform);
    tiles.iter().any(|tile| overlaps(&probe, &tile.aabb()))
}

/// Clamp the box inside the side walls and report a top/bottom exit.
///
/// Side walls clamp `x` into `[0, window_width - width]` and zero `vx`; they
/// never start a level transition. Top and bottom exits are only reported:
/// repositioning is up to the level slider.
pub fn check_bounds(
    transform: &mut Transform,
    movement: &mut Movement,
    window_width: i32,
    window_height: i32,
) -> Option<BoundarySide> {
    let boundary = if transform.y() < 0.0 {
        Some(BoundarySide::Top)
    } else if transform.bottom() > window_height as f32 {
        Some(BoundarySide::Bottom)
    } else {
        None
    };

    let max_x = (window_width - transform.width() as i32).max(0) as f32;
    if transform.x() < 0.0 {
        transform.set_x(0.0);
        movement.vx = 0.0;
    } else if transform.x() > max_x {
        transform.set_x(max_x);
        movement.vx = 0.0;
    }

    boundary
}
