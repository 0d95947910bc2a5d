//! Camera for ray generation.

use crate::gen_f32;
use ember_math::{Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Configure with the builder methods, then call [`Camera::initialize`]
/// before requesting rays.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,          // Vertical field of view in degrees
    defocus_angle: f32, // Variation angle of rays through each pixel
    focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Shutter interval for motion sampling
    time0: f32,
    time1: f32,

    // Cached computed values (set by initialize())
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 450,
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 1.0,
            time0: 0.0,
            time1: 0.0,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
        }
    }

    /// Set the output resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position and orientation.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens parameters: field of view (degrees), defocus angle
    /// (degrees), and focus distance.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the shutter open/close times for motion sampling.
    pub fn with_shutter(mut self, time0: f32, time1: f32) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    /// Compute the cached viewport frame from the current settings.
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width =
            viewport_height * (self.image_width as f32 / self.image_height as f32);

        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        let viewport_upper_left =
            self.center - self.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = u * defocus_radius;
        self.defocus_disk_v = v * defocus_radius;
    }

    /// Generate a ray through pixel (x, y) with sub-pixel jitter, a lens
    /// offset when defocus is enabled, and a time inside the shutter
    /// interval.
    pub fn get_ray(&self, x: u32, y: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + (x as f32 + offset.x) * self.pixel_delta_u
            + (y as f32 + offset.y) * self.pixel_delta_v;

        let origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            let p = random_in_unit_disk(rng);
            self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
        };

        let time = self.time0 + gen_f32(rng) * (self.time1 - self.time0);
        Ray::new(origin, pixel_sample - origin, time)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Random offset in the [-0.5, 0.5) unit square.
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}

/// Rejection-sample a point inside the unit disk.
fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ray_points_into_scene() {
        let mut camera = Camera::new()
            .with_resolution(100, 100)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(9);
        let ray = camera.get_ray(50, 50, &mut rng);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn test_ray_time_inside_shutter() {
        let mut camera = Camera::new()
            .with_resolution(10, 10)
            .with_shutter(0.25, 0.75);
        camera.initialize();

        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..100 {
            let ray = camera.get_ray(5, 5, &mut rng);
            assert!((0.25..0.75).contains(&ray.time));
        }
    }

    #[test]
    fn test_unit_disk_samples() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let p = random_in_unit_disk(&mut rng);
            assert!(p.length_squared() < 1.0);
            assert_eq!(p.z, 0.0);
        }
    }
}
