//! Render the built-in scene to an image file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use glint_renderer::{render, save_png, write_ppm, Camera, Color, HittableList, Material, Sphere, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "glint", about = "A small stochastic ray tracer")]
struct Args {
    /// Rendered image width in pixels
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Samples per pixel
    #[arg(long, default_value_t = 100)]
    samples: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 60)]
    max_depth: u32,

    /// RNG seed; seeded from entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output path; a .png extension selects PNG, anything else plain PPM
    #[arg(short, long, default_value = "render.ppm")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let world = build_scene();

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, args.width)
        .with_quality(args.samples, args.max_depth)
        .with_position(
            Vec3::new(3.2, 0.4, 2.0),
            Vec3::new(-0.25, 0.6, 0.0),
            Vec3::Y,
        )
        .with_lens(20.0, 1.2, 3.775);
    camera.initialize();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let image = render(&camera, &world, &mut rng);

    match args.output.extension().and_then(|ext| ext.to_str()) {
        Some("png") => save_png(&args.output, &image)
            .with_context(|| format!("saving {}", args.output.display()))?,
        _ => {
            let file = File::create(&args.output)
                .with_context(|| format!("creating {}", args.output.display()))?;
            let mut out = BufWriter::new(file);
            write_ppm(&mut out, &image)
                .with_context(|| format!("writing {}", args.output.display()))?;
        }
    }

    log::info!("wrote {}", args.output.display());
    Ok(())
}

/// Three spheres over a large ground sphere.
fn build_scene() -> HittableList {
    let ground = Arc::new(Material::lambertian(Color::new(0.839, 0.839, 0.89)));
    let matte = Arc::new(Material::lambertian(Color::new(0.89, 0.373, 0.373)));
    let mirror = Arc::new(Material::metal(Color::ONE, 0.2));
    let glass = Arc::new(Material::dielectric(1.5));

    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::new(0.0, -500.0, 0.0), 500.0, ground));
    world.add(Sphere::new(Vec3::new(0.0, 0.5, 0.0), 0.5, matte));
    world.add(Sphere::new(Vec3::new(0.51, 0.3, 0.5), 0.3, mirror));
    world.add(Sphere::new(Vec3::new(-1.0, 0.6, 0.0), 0.6, glass));
    world
}
