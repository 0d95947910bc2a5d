//! Core path tracing driver.
//!
//! The integrator owns the recursion depth policy: the scattering core only
//! reports tagged outcomes, and this module decides when a path stops.

use crate::{Camera, Color, Hittable, Ray, Scatter};
use ember_math::Interval;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color when a ray escapes the scene
    pub background: Color,
    /// Whether to use a sky gradient instead of the solid background
    pub use_sky_gradient: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            use_sky_gradient: false,
        }
    }
}

/// Compute the color seen along a ray.
///
/// Shoots the ray into the world, asks the struck material for an outcome,
/// and recurses on `Scattered` until the depth limit is reached.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    // t_min of 0.001 avoids immediate re-hits of the surface just left.
    let Some(rec) = world.hit(ray, Interval::new(0.001, f32::INFINITY)) else {
        if config.use_sky_gradient {
            return sky_gradient(ray);
        }
        return config.background;
    };

    match rec.material.scatter(ray, &rec, rng) {
        Scatter::Scattered { attenuation, ray: scattered } => {
            attenuation * ray_color(&scattered, world, depth - 1, config, rng)
        }
        Scatter::Emitted { radiance } => radiance,
        Scatter::Absorbed => Color::ZERO,
    }
}

/// Blue-to-white gradient used as a simple sky.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, config, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the entire scene single-threaded with a caller-provided stream.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    image
}

/// Render rows in parallel with rayon.
///
/// Every row owns a private stream seeded from `seed` plus the row index,
/// so the output is bit-for-bit reproducible for a fixed seed regardless of
/// scheduling.
pub fn render_parallel(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    seed: u64,
) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height;

    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(y as u64));
            (0..width)
                .map(|x| render_pixel(camera, world, x, y, config, &mut rng))
                .collect()
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, color) in row.into_iter().enumerate() {
            image.set(x as u32, y as u32, color);
        }
    }

    log::info!(
        "rendered {}x{} at {} spp, depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );

    image
}
