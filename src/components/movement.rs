//! Platformer kinematics: velocity, gravity and jump impulse.
//!
//! [`Movement`] stores velocity in pixels per second together with the
//! tunables that drive it. Under normal control `vx` is always one of
//! `-speed`, `0` or `+speed`; [`Movement::set_horizontal_velocity`] is the
//! only place that writes it from player intent.
//!
//! Jumps are charge-based: the impulse is `jump_velocity * multiplier` with the
//! multiplier produced by [`charge_multiplier`].

use bevy_ecs::prelude::Component;

use crate::components::transform::Transform;

/// Jump multiplier for an uncharged jump.
pub const MIN_CHARGE_MULTIPLIER: f32 = 0.3;
/// Jump multiplier for a fully charged jump.
pub const MAX_CHARGE_MULTIPLIER: f32 = 2.0;

/// Kinematic state of a platformer body.
///
/// # Fields
/// - `vx`, `vy` - velocity in pixels per second (y grows downward)
/// - `speed` - horizontal walking speed
/// - `gravity` - downward acceleration applied while airborne
/// - `jump_velocity` - base jump impulse, negative means upward
/// - `is_on_ground` - set by ground probing after collision resolution
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Movement {
    pub vx: f32,
    pub vy: f32,
    pub speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub is_on_ground: bool,
}

impl Movement {
    /// Create an airborne body at rest with the given tunables.
    pub fn new(speed: f32, gravity: f32, jump_velocity: f32) -> Self {
        Self {
            vx: 0.0,
            vy: 0.0,
            speed,
            gravity,
            jump_velocity,
            is_on_ground: false,
        }
    }

    /// Set `vx` from a direction of -1 (left), 0 (stop) or 1 (right).
    ///
    /// # Panics
    /// Any other direction is a caller bug and panics; it is never clamped.
    pub fn set_horizontal_velocity(&mut self, direction: f32) {
        assert!(
            direction == -1.0 || direction == 0.0 || direction == 1.0,
            "horizontal direction must be -1, 0 or 1, got {direction}"
        );
        self.vx = direction * self.speed;
    }

    /// Integrate gravity into `vy`. No-op while grounded.
    pub fn apply_gravity(&mut self, dt: f32) {
        if !self.is_on_ground {
            self.vy += self.gravity * dt;
        }
    }

    /// Launch with `jump_velocity * multiplier`. Returns false when airborne.
    pub fn jump(&mut self, multiplier: f32) -> bool {
        if !self.is_on_ground {
            return false;
        }
        self.vy = self.jump_velocity * multiplier;
        self.is_on_ground = false;
        true
    }

    /// Move `transform` by the current velocity, without collision.
    pub fn update_position(&self, transform: &mut Transform, dt: f32) {
        transform.move_by(self.vx * dt, self.vy * dt);
    }
}

/// Jump multiplier for a charge held `charge_time` seconds out of `max_charge_time`.
///
/// Linear from [`MIN_CHARGE_MULTIPLIER`] at zero charge to
/// [`MAX_CHARGE_MULTIPLIER`] at full charge, clamped at both ends. A
/// non-positive `max_charge_time` disables charging.
pub fn charge_multiplier(charge_time: f32, max_charge_time: f32) -> f32 {
    if max_charge_time <= 0.0 {
        return MIN_CHARGE_MULTIPLIER;
    }
    let ratio = (charge_time / max_charge_time).clamp(0.0, 1.0);
    MIN_CHARGE_MULTIPLIER + (MAX_CHARGE_MULTIPLIER - MIN_CHARGE_MULTIPLIER) * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn horizontal_velocity_follows_direction() {
        let mut m = Movement::new(400.0, 2000.0, -800.0);
        m.set_horizontal_velocity(1.0);
        assert_eq!(m.vx, 400.0);
        m.set_horizontal_velocity(-1.0);
        assert_eq!(m.vx, -400.0);
        m.set_horizontal_velocity(0.0);
        assert_eq!(m.vx, 0.0);
    }

    #[test]
    #[should_panic(expected = "horizontal direction")]
    fn horizontal_velocity_rejects_other_values() {
        let mut m = Movement::new(400.0, 2000.0, -800.0);
        m.set_horizontal_velocity(0.5);
    }

    #[test]
    #[should_panic]
    fn horizontal_velocity_rejects_large_values() {
        let mut m = Movement::new(400.0, 2000.0, -800.0);
        m.set_horizontal_velocity(2.0);
    }

    #[test]
    fn gravity_only_while_airborne() {
        let mut m = Movement::new(400.0, 2000.0, -800.0);
        m.apply_gravity(0.5);
        assert!(approx_eq(m.vy, 1000.0));

        m.is_on_ground = true;
        m.apply_gravity(0.5);
        assert!(approx_eq(m.vy, 1000.0));
    }

    #[test]
    fn jump_requires_ground() {
        let mut m = Movement::new(400.0, 2000.0, -800.0);
        assert!(!m.jump(1.0));
        assert_eq!(m.vy, 0.0);

        m.is_on_ground = true;
        assert!(m.jump(2.0));
        assert!(approx_eq(m.vy, -1600.0));
        assert!(!m.is_on_ground);
    }

    #[test]
    fn update_position_scales_by_dt() {
        let mut m = Movement::new(400.0, 2000.0, -800.0);
        m.vx = 100.0;
        m.vy = -50.0;
        let mut t = Transform::new(0.0, 0.0, 10, 10);
        m.update_position(&mut t, 0.5);
        assert!(approx_eq(t.x(), 50.0));
        assert!(approx_eq(t.y(), -25.0));
    }

    #[test]
    fn charge_multiplier_endpoints() {
        assert!(approx_eq(charge_multiplier(0.0, 1.0), 0.3));
        assert!(approx_eq(charge_multiplier(1.0, 1.0), 2.0));
        assert!(approx_eq(charge_multiplier(0.5, 1.0), 1.15));
    }

    #[test]
    fn charge_multiplier_is_clamped() {
        assert!(approx_eq(charge_multiplier(5.0, 1.0), 2.0));
        assert!(approx_eq(charge_multiplier(-1.0, 1.0), 0.3));
        assert!(approx_eq(charge_multiplier(0.2, 0.0), 0.3));
    }

    #[test]
    fn charge_multiplier_is_monotonic() {
        let mut previous = charge_multiplier(0.0, 0.8);
        for step in 1..=100 {
            let current = charge_multiplier(step as f32 * 0.01, 0.8);
            assert!(current >= previous);
            assert!((MIN_CHARGE_MULTIPLIER..=MAX_CHARGE_MULTIPLIER).contains(&current));
            previous = current;
        }
    }
}
