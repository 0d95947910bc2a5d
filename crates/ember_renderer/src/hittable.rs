//! Hittable trait, hit records, and the composite intersection tester.

use crate::{Material, Ray};
use ember_math::{Aabb, Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Holds a non-owning reference to the struck material; the scene builder
/// that constructs primitives, materials, and textures keeps them alive for
/// the whole render.
#[derive(Clone, Copy)]
pub struct HitRecord<'m> {
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal, always pointing against the ray
    pub normal: Vec3,
    /// Ray parameter at the intersection
    pub t: f32,
    /// Surface parametric coordinates
    pub u: f32,
    pub v: f32,
    /// Whether the ray struck the front (outside) face
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'m dyn Material,
}

impl<'m> HitRecord<'m> {
    /// Build a record from an outward normal, orienting the stored normal
    /// against the ray and noting which face was struck.
    pub fn new(
        ray: &Ray,
        t: f32,
        p: Vec3,
        outward_normal: Vec3,
        u: f32,
        v: f32,
        material: &'m dyn Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            t,
            u,
            v,
            front_face,
            material,
        }
    }
}

/// Anything testable for ray intersection and boundable by an axis-aligned
/// box.
pub trait Hittable: Send + Sync {
    /// Nearest intersection of `ray` with parameter inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;

    /// Finite bounds of the object over the time range, or `None` for
    /// unbounded geometry. Callers must treat `None` as "assume unbounded",
    /// never as a fault.
    fn bounding_box(&self, time0: f32, time1: f32) -> Option<Aabb>;
}

/// An ordered, non-owning collection of primitives that is itself a
/// primitive, so groups compose recursively.
///
/// Intersection is a linear scan; any acceleration structure would implement
/// the same trait and replace the scan with sub-linear traversal.
pub struct HittableList<'a> {
    objects: Vec<&'a dyn Hittable>,
}

impl<'a> HittableList<'a> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Append an object. Order only matters for tie-breaks between members
    /// reporting the exact same `t`; the earlier member wins.
    pub fn add(&mut self, object: &'a dyn Hittable) {
        self.objects.push(object);
    }

    /// Number of member objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList<'_> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            // Each query's upper bound is the best t so far, so farther hits
            // are excluded by construction.
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Option<Aabb> {
        // A single unbounded member makes the aggregate box meaningless.
        let (first, rest) = self.objects.split_first()?;
        let mut bounds = first.bounding_box(time0, time1)?;

        for object in rest {
            let member = object.bounding_box(time0, time1)?;
            bounds = Aabb::surrounding(&bounds, &member);
        }

        Some(bounds)
    }
}
