//! Global render settings.

use kestrel_math::Color;
use serde::Deserialize;

/// Render configuration.
///
/// Every field has a default, so a scene file may specify any subset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Color returned by rays that hit nothing
    pub background: Color,
    /// Global ambient light, scaled by each material's `ka`
    pub ambient_light: Color,
    /// Multiplier applied to linear color before clamping and gamma
    pub exposure: f32,
    /// Maximum reflection/refraction recursion depth
    pub max_depth: u32,
    /// Minimum ray parameter, keeps secondary rays off their own surface
    pub epsilon: f32,
    /// Jittered samples per pixel (1 = a single ray at the pixel corner)
    pub samples_per_pixel: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            background: Color::ZERO,
            ambient_light: Color::ZERO,
            exposure: 1.0,
            max_depth: 5,
            epsilon: 1e-4,
            samples_per_pixel: 1,
        }
    }
}
