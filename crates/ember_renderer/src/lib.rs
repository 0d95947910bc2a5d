//! ember renderer - CPU path tracing
//!
//! A Monte Carlo path tracer built around two pieces: a composite
//! intersection tester that finds the nearest hit of a ray against a flat
//! collection of primitives, and a family of surface-scattering materials
//! that decide how a ray continues after striking a surface.
//!
//! Everything on the hot path is allocation-free and reports failure-like
//! states through `Option` or tagged enums rather than panics.

mod camera;
mod hittable;
mod material;
mod renderer;
mod sphere;
mod texture;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{
    random_in_unit_sphere, reflect, refract, schlick, Color, Dielectric, DiffuseLight, Lambertian,
    Material, Metal, Scatter,
};
pub use renderer::{
    color_to_rgba, linear_to_gamma, ray_color, render, render_parallel, render_pixel, ImageBuffer,
    RenderConfig,
};
pub use sphere::{MovingSphere, Sphere};
pub use texture::{Checker, ImageTexture, SolidColor, Texture, TextureError};

/// Re-export the math types from ember_math
pub use ember_math::{Aabb, Interval, Ray, Vec3};

use rand::{Rng, RngCore};

/// Draw a uniform f32 in [0, 1) from the random stream.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_gen_f32_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(gen_f32(&mut a), gen_f32(&mut b));
        }
    }
}
