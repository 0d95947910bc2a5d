use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box, one interval per axis.
///
/// Boxes are produced by primitives and combined with [`Aabb::surrounding`],
/// whose result is the smallest box containing both inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Smallest box containing both `box0` and `box1`.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Slab-method ray-box intersection test within `ray_t`.
    pub fn hit(&self, ray: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let adinv = 1.0 / ray.direction[axis];

            let t0 = (slab.min - ray.origin[axis]) * adinv;
            let t1 = (slab.max - ray.origin[axis]) * adinv;
            let (near, far) = if t0 < t1 { (t0, t1) } else { (t1, t0) };

            ray_t.min = near.max(ray_t.min);
            ray_t.max = far.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }

    /// Pad near-zero axes so flat geometry still has a usable box.
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    /// A box containing nothing.
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_any_order() {
        let aabb = Aabb::from_points(Vec3::new(4.0, 1.0, -1.0), Vec3::new(2.0, -1.0, 1.0));

        assert_eq!(aabb.x.min, 2.0);
        assert_eq!(aabb.x.max, 4.0);
        assert_eq!(aabb.y.min, -1.0);
        assert_eq!(aabb.z.max, 1.0);
    }

    #[test]
    fn test_surrounding_is_exact_union() {
        let box0 = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));
        let box1 = Aabb::from_points(Vec3::new(2.0, -1.0, -1.0), Vec3::new(4.0, 1.0, 1.0));
        let union = Aabb::surrounding(&box0, &box1);

        assert_eq!(union.x.min, -1.0);
        assert_eq!(union.x.max, 4.0);
        assert_eq!(union.y.min, -1.0);
        assert_eq!(union.y.max, 1.0);
        assert_eq!(union.z.min, -1.0);
        assert_eq!(union.z.max, 1.0);
    }

    #[test]
    fn test_slab_hit() {
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));

        let toward = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&toward, Interval::new(0.0, 100.0)));

        let away = Ray::new_simple(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&away, Interval::new(0.0, 100.0)));

        let offset = Ray::new_simple(Vec3::new(5.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(!aabb.hit(&offset, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_pad_flat_axis() {
        let flat = Aabb::from_points(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 1.0));
        assert!(flat.y.size() > 0.0);
    }
}
