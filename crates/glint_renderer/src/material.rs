//! Materials and surface scattering.

use crate::{gen_f32, near_zero, random_unit_vector, HitRecord};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (linear-space RGB, components nominally 0-1)
pub type Color = Vec3;

/// Result of a scatter decision: the surviving ray and its attenuation.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Surface scattering models.
///
/// A closed variant set dispatched by match. Materials are immutable after
/// scene construction and shared between primitives through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Diffuse reflector
    Lambertian { albedo: Color },
    /// Specular reflector with adjustable roughness
    Metal { albedo: Color, fuzz: f32 },
    /// Clear refractive medium with Fresnel-approximated reflectance
    Dielectric { refractive_index: f32 },
}

impl Material {
    /// Diffuse material with the given albedo color.
    pub fn lambertian(albedo: Color) -> Self {
        Self::Lambertian { albedo }
    }

    /// Metal material. `fuzz` is clamped to [0, 1]; 0 is a perfect mirror.
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Self::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Dielectric material. `refractive_index` is relative to the
    /// surrounding medium (1.0 = none, 1.5 = glass, 2.4 = diamond).
    pub fn dielectric(refractive_index: f32) -> Self {
        Self::Dielectric { refractive_index }
    }

    /// Decide whether light continues past an intersection.
    ///
    /// Returns the attenuated outgoing ray, or None when the ray is
    /// absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut direction = rec.normal + random_unit_vector(rng);

                // Catch degenerate scatter direction
                if near_zero(direction) {
                    direction = rec.normal;
                }

                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, direction),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction().normalize(), rec.normal);
                let direction = reflected + fuzz * random_unit_vector(rng);

                // A fuzzed reflection that ends up inside the surface is
                // absorbed.
                if direction.dot(rec.normal) > 0.0 {
                    Some(Scatter {
                        attenuation: albedo,
                        scattered: Ray::new(rec.p, direction),
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { refractive_index } => {
                let refraction_ratio = if rec.front_face {
                    1.0 / refractive_index
                } else {
                    refractive_index
                };

                let unit_direction = ray_in.direction().normalize();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // Total internal reflection
                let cannot_refract = refraction_ratio * sin_theta > 1.0;

                let direction = if cannot_refract
                    || reflectance(cos_theta, refraction_ratio) > gen_f32(rng)
                {
                    reflect(unit_direction, rec.normal)
                } else {
                    refract(unit_direction, rec.normal, refraction_ratio)
                };

                Some(Scatter {
                    attenuation: Color::ONE,
                    scattered: Ray::new(rec.p, direction),
                })
            }
        }
    }
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface with the given index ratio.
///
/// The parallel term takes `sqrt(|1 - perp^2|)` so grazing-angle rounding
/// cannot produce a negative radicand.
#[inline]
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation for reflectance.
fn reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
