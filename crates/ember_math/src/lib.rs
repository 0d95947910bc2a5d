//! Math primitives shared by the ember path tracer.
//!
//! Vector arithmetic comes from glam and is re-exported here so downstream
//! crates only depend on one math surface.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_reexport() {
        let v = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v, Vec3::new(5.0, 7.0, 9.0));
    }
}
