//! Material trait, scatter outcomes, and shared scattering math.

use crate::{gen_f32, texture::Texture, HitRecord, Ray};
use ember_math::Vec3;
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a scatter query.
///
/// A single tagged result instead of output parameters, so the absorbed and
/// emitted paths carry no half-initialized state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scatter {
    /// The path terminates and contributes nothing further.
    Absorbed,
    /// Continue tracing with `ray`, multiplying accumulated radiance by
    /// `attenuation`.
    Scattered { attenuation: Color, ray: Ray },
    /// The surface is a light source; add `radiance` and terminate.
    Emitted { radiance: Color },
}

/// A surface-scattering policy.
///
/// Stateless across calls except for the random stream, which is private to
/// each parallel execution unit and advanced in place by every draw.
pub trait Material: Send + Sync {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter;
}

/// Rejection-sample a point uniformly distributed inside the unit ball.
///
/// Added to the surface normal this acts as a cosine-weighted diffuse
/// surrogate. Expected draws per sample are ~2 (ball volume over cube
/// volume), so the loop is probabilistically finite.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Mirror reflection of `v` about unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Snell refraction of `v` about unit normal `n`.
///
/// Returns `None` when the discriminant is non-positive, signaling total
/// internal reflection.
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);

    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - discriminant.sqrt() * n)
    } else {
        None
    }
}

/// Schlick approximation of Fresnel reflectance.
#[inline]
pub fn schlick(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Lambertian (diffuse) material.
pub struct Lambertian<'a> {
    albedo: &'a dyn Texture,
}

impl<'a> Lambertian<'a> {
    /// Create a diffuse material with the given albedo texture.
    pub fn new(albedo: &'a dyn Texture) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian<'_> {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter {
        let direction = rec.normal + random_in_unit_sphere(rng);

        Scatter::Scattered {
            attenuation: self.albedo.value(rec.u, rec.v, rec.p),
            ray: Ray::new(rec.p, direction, ray_in.time),
        }
    }
}

/// Metal (specular) material with a fuzz radius.
pub struct Metal<'a> {
    albedo: &'a dyn Texture,
    fuzz: f32,
}

impl<'a> Metal<'a> {
    /// Create a metal material. `fuzz` is clamped into [0, 1]:
    /// 0 is a perfect mirror, 1 is very rough.
    pub fn new(albedo: &'a dyn Texture, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Effective fuzz radius after clamping.
    pub fn fuzz(&self) -> f32 {
        self.fuzz
    }
}

impl Material for Metal<'_> {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter {
        let reflected = reflect(ray_in.direction.normalize(), rec.normal);
        let direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzzing can push the reflection beneath the surface.
        if direction.dot(rec.normal) > 0.0 {
            Scatter::Scattered {
                attenuation: self.albedo.value(rec.u, rec.v, rec.p),
                ray: Ray::new(rec.p, direction, ray_in.time),
            }
        } else {
            Scatter::Absorbed
        }
    }
}

/// Dielectric (glass) material.
pub struct Dielectric {
    /// Index of refraction
    ref_idx: f32,
}

impl Dielectric {
    /// Create a dielectric material (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn new(ref_idx: f32) -> Self {
        Self { ref_idx }
    }
}

impl Material for Dielectric {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Scatter {
        // The record's normal already points against the ray; front_face
        // tells us which side we are on, so the index ratio flips with it.
        let ni_over_nt = if rec.front_face {
            1.0 / self.ref_idx
        } else {
            self.ref_idx
        };

        let unit_direction = ray_in.direction.normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);

        // Total internal reflection makes the reflect probability 1.
        let direction = match refract(unit_direction, rec.normal, ni_over_nt) {
            Some(refracted) if gen_f32(rng) >= schlick(cos_theta, ni_over_nt) => refracted,
            _ => reflect(unit_direction, rec.normal),
        };

        Scatter::Scattered {
            attenuation: Color::ONE,
            ray: Ray::new(rec.p, direction, ray_in.time),
        }
    }
}

/// Diffuse light emitter.
pub struct DiffuseLight<'a> {
    emit: &'a dyn Texture,
}

impl<'a> DiffuseLight<'a> {
    /// Create a light whose emitted radiance comes from the given texture.
    pub fn new(emit: &'a dyn Texture) -> Self {
        Self { emit }
    }
}

impl Material for DiffuseLight<'_> {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, _rng: &mut dyn RngCore) -> Scatter {
        Scatter::Emitted {
            radiance: self.emit.value(rec.u, rec.v, rec.p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolidColor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record_for<'m>(ray: &Ray, material: &'m dyn Material) -> HitRecord<'m> {
        HitRecord::new(ray, 1.0, ray.at(1.0), Vec3::Y, 0.25, 0.75, material)
    }

    #[test]
    fn test_unit_sphere_samples_inside_ball() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let p = random_in_unit_sphere(&mut rng);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_reflect_mirror() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let reflected = reflect(v, Vec3::Y);
        assert!((reflected - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Grazing exit from glass into air: no refracted ray exists.
        let v = Vec3::new(1.0, -0.05, 0.0).normalize();
        assert!(refract(v, Vec3::Y, 1.5).is_none());

        // Head-on entry always refracts.
        assert!(refract(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, 1.0 / 1.5).is_some());
    }

    #[test]
    fn test_schlick_head_on() {
        // (1 - cosine)^5 vanishes, leaving r0 = ((1-1.5)/(1+1.5))^2 = 0.04.
        let r = schlick(1.0, 1.5);
        assert!((r - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_schlick_in_unit_range() {
        for i in 0..=10 {
            let cosine = i as f32 / 10.0;
            let r = schlick(cosine, 1.5);
            assert!((0.0..=1.0).contains(&r));
        }
    }

    #[test]
    fn test_lambertian_always_scatters() {
        let tex = SolidColor::new(Vec3::new(0.8, 0.4, 0.2));
        let mat = Lambertian::new(&tex);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0), 0.5);
        let rec = record_for(&ray, &mat);
        let mut rng = StdRng::seed_from_u64(2);

        match mat.scatter(&ray, &rec, &mut rng) {
            Scatter::Scattered { attenuation, ray: scattered } => {
                assert_eq!(attenuation, Vec3::new(0.8, 0.4, 0.2));
                assert_eq!(scattered.origin, rec.p);
                // Motion sampling: the scattered ray inherits the time.
                assert_eq!(scattered.time, 0.5);
            }
            other => panic!("expected Scattered, got {:?}", other),
        }
    }

    #[test]
    fn test_metal_fuzz_is_clamped() {
        let tex = SolidColor::new(Vec3::ONE);

        assert_eq!(Metal::new(&tex, -2.0).fuzz(), 0.0);
        assert_eq!(Metal::new(&tex, 0.3).fuzz(), 0.3);
        assert_eq!(Metal::new(&tex, 7.0).fuzz(), 1.0);
    }

    #[test]
    fn test_metal_scatters_above_surface_or_absorbs() {
        let tex = SolidColor::new(Vec3::ONE);
        let mat = Metal::new(&tex, 1.0);
        // Grazing incidence, so heavy fuzz sometimes dips below the surface.
        let ray = Ray::new_simple(Vec3::new(-5.0, 0.2, 0.0), Vec3::new(1.0, -0.04, 0.0));
        let rec = record_for(&ray, &mat);
        let mut rng = StdRng::seed_from_u64(3);

        let mut absorbed = 0;
        for _ in 0..200 {
            match mat.scatter(&ray, &rec, &mut rng) {
                Scatter::Scattered { ray: scattered, .. } => {
                    assert!(scattered.direction.dot(rec.normal) > 0.0);
                }
                Scatter::Absorbed => absorbed += 1,
                Scatter::Emitted { .. } => panic!("metal never emits"),
            }
        }
        assert!(absorbed > 0, "grazing fuzzy metal should absorb sometimes");
    }

    #[test]
    fn test_dielectric_always_scatters_with_full_transmission() {
        let mat = Dielectric::new(1.5);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.3, -1.0, 0.1));
        let rec = record_for(&ray, &mat);
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..100 {
            match mat.scatter(&ray, &rec, &mut rng) {
                Scatter::Scattered { attenuation, .. } => {
                    assert_eq!(attenuation, Color::ONE);
                }
                other => panic!("expected Scattered, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_emitter_terminates_with_radiance() {
        let tex = SolidColor::new(Vec3::new(4.0, 4.0, 4.0));
        let mat = DiffuseLight::new(&tex);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let rec = record_for(&ray, &mat);
        let mut rng = StdRng::seed_from_u64(5);

        match mat.scatter(&ray, &rec, &mut rng) {
            Scatter::Emitted { radiance } => assert_eq!(radiance, Vec3::new(4.0, 4.0, 4.0)),
            other => panic!("expected Emitted, got {:?}", other),
        }
    }
}
