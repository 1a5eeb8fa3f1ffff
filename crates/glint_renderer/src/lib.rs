//! Glint - CPU path tracing.
//!
//! A Monte Carlo path tracer: camera rays are jittered per sample, scene
//! intersections are resolved linearly over a primitive list, and light
//! transport is evaluated as a depth-bounded bounce loop with material
//! scattering.

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sampling;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList, Primitive};
pub use material::{Color, Material, Scatter};
pub use output::{color_to_rgba, linear_to_gamma, save_png, write_color, write_ppm, OutputError};
pub use renderer::{ray_color, render, render_pixel, ImageBuffer};
pub use sampling::{
    gen_f32, gen_range, near_zero, random_in_unit_disk, random_in_unit_sphere,
    random_on_hemisphere, random_unit_vector,
};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
