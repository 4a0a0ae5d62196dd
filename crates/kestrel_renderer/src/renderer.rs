//! Core Whitted-style ray tracer.
//!
//! Implements recursive ray tracing with:
//! - Hard shadows from every light
//! - Phong diffuse and specular shading plus a global ambient term
//! - Mirror reflection and Snell refraction bounded by a maximum depth

use kestrel_core::RenderConfig;
use kestrel_math::{Color, Interval, Ray};
use rand::{Rng, RngCore};

use crate::intersection::{Intersection, Primitive};
use crate::optics::{reflect, refract};
use crate::scene::Scene;
use crate::Camera;

/// Compute the color seen by a ray.
///
/// Misses return the background. Surfaces with `kr` or `kt` spawn reflected
/// and transmitted rays while `depth < max_depth` and get no local shading;
/// every other hit, including delegating surfaces once depth runs out, is
/// shaded directly and lit by the ambient term.
pub fn trace(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    let Some(isect) = scene.intersect(ray, Interval::from_min(config.epsilon)) else {
        return config.background;
    };

    let material = isect.material;

    if material.is_delegating() && depth < config.max_depth {
        let mut color = Color::ZERO;

        if let Some(kr) = material.kr {
            // Only reflect off the side the normal faces
            if (-ray.direction()).dot(isect.normal) > 0.0 {
                let reflected = Ray::new(isect.position, reflect(-ray.direction(), isect.normal));
                color += kr * trace(&reflected, scene, depth + 1, config);
            }
        }

        if let Some(kt) = material.kt {
            if let Some(direction) = refract(ray.direction(), isect.normal, material.ior) {
                let transmitted = Ray::new(isect.position, direction);
                color += kt * trace(&transmitted, scene, depth + 1, config);
            }
        }

        return color;
    }

    let ambient = material.ka.unwrap_or(Color::ZERO) * config.ambient_light;
    shade(ray, &isect, scene, config) + ambient
}

/// Direct lighting at an intersection, summed over all lights.
///
/// A light contributes nothing if anything lies between the point and the
/// light. Diffuse uses `kd` (absent means black); specular is added only
/// when the material has `ks`.
pub fn shade(ray: &Ray, isect: &Intersection<'_>, scene: &Scene, config: &RenderConfig) -> Color {
    let material = isect.material;
    let n = isect.normal;
    let v = -ray.direction();
    let kd = material.kd.unwrap_or(Color::ZERO);

    let mut color = Color::ZERO;

    for light in scene.lights() {
        let ls = light.sample(isect.position);

        let shadow_ray = Ray::new(isect.position, ls.direction);
        let dist_to_light = (ls.position - isect.position).length();
        let occluded = scene
            .intersect(&shadow_ray, Interval::from_min(config.epsilon))
            .is_some_and(|hit| hit.t < dist_to_light);
        if occluded {
            continue;
        }

        let l = ls.direction;

        if let Some(ks) = material.ks {
            let r = reflect(l, n);
            color += ks * ls.intensity * r.dot(v).max(0.0).powf(material.p);
        }

        color += kd * ls.intensity * n.dot(l).max(0.0);
    }

    color
}

/// Render a single pixel.
///
/// One sample traces the ray through the pixel's lower-left corner
/// (`x = i/W`, `y = (H-1-j)/H`, rows counted from the top). More samples
/// jitter within the pixel and average.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.width as f32;
    let height = config.height as f32;
    let row = (config.height - 1 - j) as f32;

    if config.samples_per_pixel <= 1 {
        let ray = camera.get_ray(i as f32 / width, row / height);
        return trace(&ray, scene, 0, config);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let x = (i as f32 + rng.gen::<f32>()) / width;
        let y = (row + rng.gen::<f32>()) / height;
        pixel_color += trace(&camera.get_ray(x, y), scene, 0, config);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Map a linear channel value to 8 bits: exposure, clamp, 2.2 gamma.
#[inline]
pub fn to_display(value: f32, exposure: f32) -> u8 {
    let v = (value * exposure).clamp(0.0, 1.0);
    (v.powf(1.0 / 2.2) * 255.0) as u8
}

/// Convert a color to 8-bit RGBA.
pub fn color_to_rgba(color: Color, exposure: f32) -> [u8; 4] {
    [
        to_display(color.x, exposure),
        to_display(color.y, exposure),
        to_display(color.z, exposure),
        255,
    ]
}

/// Simple image buffer of linear colors.
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

    /// Get the pixel at (x, y), y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes with the given exposure.
    pub fn to_rgba(&self, exposure: f32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color, exposure));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; see [`crate::render_parallel`] for the bucketed version.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(config.width, config.height);

    for j in 0..config.height {
        for i in 0..config.width {
            let color = render_pixel(scene, camera, config, i, j, rng);
            image.set(i, j, color);
        }
    }

    image
}
