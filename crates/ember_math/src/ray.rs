//! Ray type for path tracing.

use crate::Vec3;

/// A ray with origin, direction, and time.
///
/// The direction is not necessarily normalized. The `time` value is the
/// instant the ray samples, used by primitives that move over the shutter
/// interval. Rays are immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub time: f32,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    /// Create a ray at time 0.
    #[inline]
    pub fn new_simple(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, 0.0)
    }

    /// Point along the ray at parameter t: origin + t * direction.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
