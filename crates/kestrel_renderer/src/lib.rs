//! Kestrel Renderer - recursive Whitted-style ray tracing.
//!
//! Traces rays against spheres, planes and triangles, shades hits with
//! Phong lighting and hard shadows, and follows mirror reflection and
//! refraction up to a fixed depth.

mod bucket;
mod camera;
mod intersection;
mod light;
mod optics;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use intersection::{Intersection, Primitive};
pub use light::{area_light, Light, LightSample, PointLight, SpotLight};
pub use optics::{reflect, refract};
pub use plane::Plane;
pub use renderer::{color_to_rgba, render, render_pixel, shade, to_display, trace, ImageBuffer};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{Barycentric, Triangle};

/// Re-export the scene description types the renderer consumes
pub use kestrel_core::{Material, Mesh, RenderConfig};

/// Re-export Vec3 and common math types from kestrel_math
pub use kestrel_math::{Color, Interval, Ray, Vec3};
