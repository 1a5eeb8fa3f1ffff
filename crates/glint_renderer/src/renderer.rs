//! Core path tracing loop.

use crate::{Camera, Color, Hittable, Ray};
use glint_math::Interval;
use rand::RngCore;

/// Sky gradient color at the horizon (bottom of the view)
const HORIZON: Color = Color::new(0.863, 0.529, 0.173);
/// Sky gradient color at the zenith (top of the view)
const ZENITH: Color = Color::new(0.616, 0.694, 0.808);

/// Compute the color seen along a ray.
///
/// The light-transport recurrence, written as an explicit loop carrying
/// the attenuation accumulated so far, the current ray, and the remaining
/// bounce budget. The chain ends when the ray escapes to the sky, a
/// material absorbs it, or the budget runs out (treated as no light, which
/// keeps mirror-to-mirror paths finite).
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut attenuation = Color::ONE;
    let mut current = *ray;

    for _ in 0..max_depth {
        // The 0.001 lower bound ignores hits right at the scatter origin
        // (shadow acne).
        match world.hit(&current, Interval::new(0.001, f32::INFINITY)) {
            Some(rec) => match rec.material.scatter(&current, &rec, rng) {
                Some(scatter) => {
                    attenuation *= scatter.attenuation;
                    current = scatter.scattered;
                }
                // Absorbed
                None => return Color::ZERO,
            },
            None => return attenuation * sky(&current),
        }
    }

    Color::ZERO
}

/// Vertical sky gradient for rays that escape the scene.
fn sky(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * HORIZON + a * ZENITH
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        // get_ray jitters within the pixel for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Render the scene to an image buffer.
///
/// Pixels are produced in raster order: top-to-bottom, left-to-right.
/// The camera must already be initialized.
pub fn render(camera: &Camera, world: &dyn Hittable, rng: &mut dyn RngCore) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height();
    log::info!(
        "rendering {}x{} at {} samples/pixel, depth {}",
        width,
        height,
        camera.samples_per_pixel,
        camera.max_depth
    );

    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        log::debug!("scanlines remaining: {}", height - y);
        for x in 0..width {
            let color = render_pixel(camera, world, x, y, rng);
            image.set(x, y, color);
        }
    }

    log::info!("render complete");
    image
}

/// Image buffer holding linear-space pixel colors.
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

    /// Convert to 8-bit RGBA bytes (gamma corrected).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&crate::color_to_rgba(*color));
        }
        bytes
    }
}
