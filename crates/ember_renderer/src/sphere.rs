//! Sphere primitives, static and moving.

use std::f32::consts::PI;

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use ember_math::{Aabb, Interval, Vec3};

/// Surface coordinates for a point on the unit sphere.
///
/// theta is the angle down from +Y, phi the angle around Y from +X.
fn sphere_uv(p: Vec3) -> (f32, f32) {
    let theta = (-p.y).acos();
    let phi = (-p.z).atan2(p.x) + PI;

    (phi / (2.0 * PI), theta / PI)
}

/// Quadratic ray-sphere intersection, returning the nearest root strictly
/// inside `ray_t`.
///
/// Strict bounds pin the tie-break rule: a hit exactly at the current
/// closest-so-far is rejected, so the earlier member of a collection keeps
/// an equal-distance hit.
fn nearest_root(center: Vec3, radius: f32, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let oc = center - ray.origin;
    let a = ray.direction.length_squared();
    let h = ray.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();

    let mut root = (h - sqrtd) / a;
    if !ray_t.surrounds(root) {
        root = (h + sqrtd) / a;
        if !ray_t.surrounds(root) {
            return None;
        }
    }

    Some(root)
}

/// A static sphere.
pub struct Sphere<M: Material> {
    center: Vec3,
    radius: f32,
    material: M,
}

impl<M: Material> Sphere<M> {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: M) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl<M: Material> Hittable for Sphere<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let t = nearest_root(self.center, self.radius, ray, ray_t)?;
        let p = ray.at(t);
        let outward_normal = (p - self.center) / self.radius;
        let (u, v) = sphere_uv(outward_normal);

        Some(HitRecord::new(ray, t, p, outward_normal, u, v, &self.material))
    }

    fn bounding_box(&self, _time0: f32, _time1: f32) -> Option<Aabb> {
        let rvec = Vec3::splat(self.radius);
        Some(Aabb::from_points(self.center - rvec, self.center + rvec))
    }
}

/// A sphere whose center moves linearly between two points over a time
/// interval, sampled by `ray.time`.
pub struct MovingSphere<M: Material> {
    center0: Vec3,
    center1: Vec3,
    time0: f32,
    time1: f32,
    radius: f32,
    material: M,
}

impl<M: Material> MovingSphere<M> {
    /// Create a sphere moving from `center0` at `time0` to `center1` at
    /// `time1`.
    pub fn new(
        center0: Vec3,
        center1: Vec3,
        time0: f32,
        time1: f32,
        radius: f32,
        material: M,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Center position at the given time.
    pub fn center(&self, time: f32) -> Vec3 {
        let s = (time - self.time0) / (self.time1 - self.time0);
        self.center0 + s * (self.center1 - self.center0)
    }
}

impl<M: Material> Hittable for MovingSphere<M> {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let center = self.center(ray.time);
        let t = nearest_root(center, self.radius, ray, ray_t)?;
        let p = ray.at(t);
        let outward_normal = (p - center) / self.radius;
        let (u, v) = sphere_uv(outward_normal);

        Some(HitRecord::new(ray, t, p, outward_normal, u, v, &self.material))
    }

    fn bounding_box(&self, time0: f32, time1: f32) -> Option<Aabb> {
        let rvec = Vec3::splat(self.radius);
        let box0 = Aabb::from_points(self.center(time0) - rvec, self.center(time0) + rvec);
        let box1 = Aabb::from_points(self.center(time1) - rvec, self.center(time1) + rvec);

        Some(Aabb::surrounding(&box0, &box1))
    }
}
