//! Kestrel Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Materials**: Phong-style coefficients plus mirror/transmission toggles
//! - **Meshes**: indexed triangle geometry with optional smooth normals
//! - **Scene files**: JSON scene descriptions and OBJ mesh loading
//!
//! # Example
//!
//! ```ignore
//! use kestrel_core::SceneDescription;
//!
//! let desc = SceneDescription::load("scenes/spheres.json")?;
//! println!("{} shapes, {} lights", desc.shapes.len(), desc.lights.len());
//! ```

pub mod config;
pub mod description;
pub mod error;
pub mod material;
pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use config::RenderConfig;
pub use description::{CameraDescription, LightDescription, SceneDescription, ShapeDescription};
pub use error::{SceneError, SceneResult};
pub use material::Material;
pub use mesh::Mesh;
pub use obj::load_obj;
