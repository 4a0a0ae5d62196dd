//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Each pixel trace reads the shared scene and
//! writes nothing shared, so no locking is needed.

use std::time::Instant;

use kestrel_core::RenderConfig;
use kestrel_math::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::renderer::{render_pixel, ImageBuffer};
use crate::{Camera, Scene};

/// A tile of the image, in pixel coordinates with y counted from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from the bucket's center to `(cx, cy)`.
    fn distance_sq(&self, cx: f32, cy: f32) -> f32 {
        let bx = self.x as f32 + self.width as f32 * 0.5;
        let by = self.y as f32 + self.height as f32 * 0.5;
        (bx - cx).powi(2) + (by - cy).powi(2)
    }
}

/// Tile edge length used by the CLI.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Cover a `width` x `height` image with tiles of at most `bucket_size`
/// pixels per side, ordered center-out. Edge tiles are clipped.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y), 0)
            })
        })
        .collect();

    let (cx, cy) = (width as f32 * 0.5, height as f32 * 0.5);
    buckets.sort_by(|a, b| a.distance_sq(cx, cy).total_cmp(&b.distance_sq(cx, cy)));

    for (index, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = index;
    }

    buckets
}

/// Linear colors for one bucket, row-major within the tile.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<Color>,
}

/// Render a single bucket.
///
/// Jitter is seeded from the bucket's position, so a render is reproducible
/// regardless of scheduling.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> BucketResult {
    let seed = ((bucket.y as u64) << 32) | bucket.x as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(
                scene,
                camera,
                config,
                bucket.x + local_x,
                bucket.y + local_y,
                &mut rng,
            );
            pixels.push(color);
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
    }
}

/// Render the entire scene across all cores.
pub fn render_parallel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    bucket_size: u32,
) -> ImageBuffer {
    let start = Instant::now();
    let buckets = generate_buckets(config.width, config.height, bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets, max depth {}, {} spp",
        config.width,
        config.height,
        buckets.len(),
        config.max_depth,
        config.samples_per_pixel
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, scene, camera, config);
            log::debug!("Bucket {} done", bucket.index);
            result
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        let b = result.bucket;
        for (k, color) in result.pixels.iter().enumerate() {
            let k = k as u32;
            image.set(b.x + k % b.width, b.y + k / b.width, *color);
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());

    image
}
