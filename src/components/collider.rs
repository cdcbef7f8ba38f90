//! Axis-aligned collision capability.
//!
//! Anything that takes part in collision tests implements [`Collider`] and
//! exposes its world-space box. Collision checks are free functions over two
//! boxes instead of per-type dispatch.

use raylib::prelude::Rectangle;

/// Capability for entities with an axis-aligned bounding box.
pub trait Collider {
    /// World-space AABB.
    fn aabb(&self) -> Rectangle;
}

/// AABB vs AABB overlap. Boxes that only touch along an edge do not overlap.
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Overlap test between two colliders.
pub fn colliders_overlap(a: &impl Collider, b: &impl Collider) -> bool {
    overlaps(&a.aabb(), &b.aabb())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle {
            x,
            y,
            width: w,
            height: h,
        }
    }

    #[test]
    fn overlapping_boxes() {
        assert!(overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 5.0, 10.0, 10.0)));
        assert!(overlaps(&rect(5.0, 5.0, 10.0, 10.0), &rect(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn separated_boxes() {
        assert!(!overlaps(&rect(0.0, 0.0, 10.0, 10.0), &rect(50.0, 50.0, 1.0, 1.0)));
    }

    #[test]
    fn contained_box_overlaps() {
        assert!(overlaps(&rect(0.0, 0.0, 100.0, 100.0), &rect(40.0, 40.0, 2.0, 2.0)));
    }
}
