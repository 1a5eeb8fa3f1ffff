//! Image serialization: plain-text PPM and PNG.

use crate::{Color, ImageBuffer};
use glint_math::Interval;
use std::io::Write;
use std::path::Path;

/// Errors from serializing a rendered image.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Transform one linear-space channel to gamma space (gamma 2).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

// Clamping to 0.999 keeps the 256 scale factor from emitting 256.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Write one pixel as an ASCII "r g b" line of byte values.
pub fn write_color<W: Write>(out: &mut W, color: Color) -> std::io::Result<()> {
    let r = linear_to_gamma(color.x);
    let g = linear_to_gamma(color.y);
    let b = linear_to_gamma(color.z);

    let rbyte = (256.0 * INTENSITY.clamp(r)) as u32;
    let gbyte = (256.0 * INTENSITY.clamp(g)) as u32;
    let bbyte = (256.0 * INTENSITY.clamp(b)) as u32;

    writeln!(out, "{} {} {}", rbyte, gbyte, bbyte)
}

/// Write the image as plain-text PPM (P3): a three-line header with the
/// format tag, dimensions, and max channel value, then one triple per
/// pixel in raster order.
pub fn write_ppm<W: Write>(out: &mut W, image: &ImageBuffer) -> Result<(), OutputError> {
    writeln!(out, "P3\n{} {}\n255", image.width, image.height)?;
    for color in &image.pixels {
        write_color(out, *color)?;
    }
    Ok(())
}

/// Gamma-correct and pack a color into 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 1.0)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 1.0)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Save the image as PNG via the `image` crate.
pub fn save_png<P: AsRef<Path>>(path: P, img: &ImageBuffer) -> Result<(), OutputError> {
    let rgba = image::RgbaImage::from_fn(img.width, img.height, |x, y| {
        image::Rgba(color_to_rgba(img.get(x, y)))
    });
    rgba.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 1e-5);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_write_color_bytes() {
        let mut out = Vec::new();
        write_color(&mut out, Color::new(1.0, 0.0, 0.25)).unwrap();

        // Gamma maps 1.0 -> 1.0 (clamped to 0.999), 0.25 -> 0.5.
        assert_eq!(String::from_utf8(out).unwrap(), "255 0 128\n");
    }

    #[test]
    fn test_write_color_clamps_overbright() {
        let mut out = Vec::new();
        write_color(&mut out, Color::new(4.0, -1.0, 0.999_001)).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "255 0 255\n");
    }

    #[test]
    fn test_ppm_header_and_body() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 1.0, 1.0));
        image.set(1, 0, Color::ZERO);

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "2 1");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3], "255 255 255");
        assert_eq!(lines[4], "0 0 0");
        assert_eq!(lines.len(), 3 + 2);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::new(0.25, 1.0, 0.0)), [127, 255, 0, 255]);
        assert_eq!(color_to_rgba(Color::new(2.0, -1.0, 1.0)), [255, 0, 255, 255]);
    }
}
