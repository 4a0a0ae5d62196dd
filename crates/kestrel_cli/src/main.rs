//! Render a JSON scene file to a PNG.
//!
//! Run with: cargo run --release -- scenes/spheres.json -o spheres.png

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kestrel_core::SceneDescription;
use kestrel_renderer::{render, render_parallel, Camera, ImageBuffer, Scene, DEFAULT_BUCKET_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(about = "Recursive Whitted ray tracer", long_about = None)]
struct Cli {
    /// Scene description (.json)
    scene: PathBuf,

    /// Output image, format chosen by extension
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Render on one thread, row by row
    #[arg(long)]
    serial: bool,

    /// Tile edge length for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,
}

fn save_png(image: &ImageBuffer, exposure: f32, path: &Path) -> Result<()> {
    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.to_rgba(exposure))
        .context("image buffer size mismatch")?;
    buffer
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let desc = SceneDescription::load(&cli.scene)
        .with_context(|| format!("failed to load scene {}", cli.scene.display()))?;

    let start = Instant::now();
    let scene = Scene::from_description(&desc)?;
    log::info!("Scene built in {:?}", start.elapsed());

    let config = &desc.config;
    if config.width == 0 || config.height == 0 {
        bail!("image size must be non-zero, got {}x{}", config.width, config.height);
    }

    let aspect = config.width as f32 / config.height as f32;
    let camera = Camera::from_description(&desc.camera, aspect);

    let image = if cli.serial {
        let mut rng = StdRng::seed_from_u64(0);
        render(&scene, &camera, config, &mut rng)
    } else {
        render_parallel(&scene, &camera, config, cli.bucket_size)
    };

    save_png(&image, config.exposure, &cli.output)?;
    log::info!("Saved {}", cli.output.display());

    Ok(())
}
