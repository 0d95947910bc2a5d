//! Texture capability: color as a function of surface coordinates and
//! position.

use std::path::Path;

use crate::Color;
use ember_math::Vec3;
use thiserror::Error;

/// Errors that can occur while loading image textures.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to load texture: {0}")]
    Load(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Trait for textures sampled by surface coordinates and hit position.
pub trait Texture: Send + Sync {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color;
}

/// Constant-color texture.
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Texture for SolidColor {
    fn value(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.color
    }
}

/// Checker pattern alternating between two nested textures by position.
pub struct Checker<'a> {
    scale: f32,
    even: &'a dyn Texture,
    odd: &'a dyn Texture,
}

impl<'a> Checker<'a> {
    pub fn new(scale: f32, even: &'a dyn Texture, odd: &'a dyn Texture) -> Self {
        Self { scale, even, odd }
    }
}

impl Texture for Checker<'_> {
    fn value(&self, u: f32, v: f32, p: Vec3) -> Color {
        let sines =
            (self.scale * p.x).sin() * (self.scale * p.y).sin() * (self.scale * p.z).sin();
        if sines < 0.0 {
            self.odd.value(u, v, p)
        } else {
            self.even.value(u, v, p)
        }
    }
}

/// Image-backed texture sampled by (u, v).
///
/// Pixels are stored as linear RGB floats; sRGB decoding happens at load
/// time.
pub struct ImageTexture {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
}

impl ImageTexture {
    /// Load an image texture from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| TextureError::Load(format!("{}: {}", path.display(), e)))?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| {
                [
                    srgb_to_linear(p[0]),
                    srgb_to_linear(p[1]),
                    srgb_to_linear(p[2]),
                ]
            })
            .collect();

        log::debug!("loaded texture {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a texture from raw linear pixels, row-major.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[f32; 3]>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, u: f32, v: f32, _p: Vec3) -> Color {
        let u = u.clamp(0.0, 1.0);
        // Flip V: image rows run top to bottom.
        let v = 1.0 - v.clamp(0.0, 1.0);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);
        let px = self.pixels[(y * self.width + x) as usize];

        Color::new(px[0], px[1], px[2])
    }
}

/// Convert an sRGB byte value to a linear float.
fn srgb_to_linear(value: u8) -> f32 {
    let v = value as f32 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
