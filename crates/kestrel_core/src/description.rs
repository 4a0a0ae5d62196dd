//! JSON scene descriptions.
//!
//! A description is what a scene file says: settings, camera, named
//! materials, shapes and lights. The renderer turns it into intersectable
//! primitives once, before rendering starts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec3;
use kestrel_math::Color;
use serde::Deserialize;

use crate::config::RenderConfig;
use crate::error::{SceneError, SceneResult};
use crate::material::Material;

/// Pinhole camera placement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub eye: Vec3,
    pub target: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    /// Vertical field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f32,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_fov() -> f32 {
    45.0
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: default_up(),
            fov: default_fov(),
        }
    }
}

/// A shape entry. Materials are referenced by name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        material: String,
    },
    Triangle {
        p0: Vec3,
        p1: Vec3,
        p2: Vec3,
        #[serde(default)]
        normals: Option<[Vec3; 3]>,
        material: String,
    },
    /// OBJ mesh, path relative to the scene file
    Mesh {
        path: PathBuf,
        material: String,
        #[serde(default)]
        smooth: bool,
    },
}

impl ShapeDescription {
    /// Name of the material this shape uses.
    pub fn material(&self) -> &str {
        match self {
            ShapeDescription::Sphere { material, .. }
            | ShapeDescription::Plane { material, .. }
            | ShapeDescription::Triangle { material, .. }
            | ShapeDescription::Mesh { material, .. } => material,
        }
    }
}

/// A light entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDescription {
    Point {
        position: Vec3,
        intensity: Color,
    },
    Spot {
        from: Vec3,
        to: Vec3,
        intensity: Color,
        #[serde(default)]
        exponent: f32,
        /// Cone half-angle in degrees
        cutoff: f32,
    },
    /// Square light discretized into `samples` x `samples` point lights
    Area {
        center: Vec3,
        size: f32,
        intensity: Color,
        samples: u32,
    },
}

/// A complete scene file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub config: RenderConfig,
    #[serde(default)]
    pub camera: CameraDescription,
    #[serde(default)]
    pub materials: HashMap<String, Material>,
    #[serde(default)]
    pub shapes: Vec<ShapeDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,

    /// Directory relative mesh paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl SceneDescription {
    /// Parse a scene from a JSON string. Mesh paths resolve against the
    /// working directory.
    pub fn from_json(source: &str) -> SceneResult<Self> {
        let desc: SceneDescription = serde_json::from_str(source)?;
        desc.validate()?;
        Ok(desc)
    }

    /// Load a scene file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let mut desc = Self::from_json(&source)?;
        desc.base_dir = path.parent().map(Path::to_path_buf);

        log::info!(
            "Loaded scene {}: {} materials, {} shapes, {} lights",
            path.display(),
            desc.materials.len(),
            desc.shapes.len(),
            desc.lights.len()
        );

        Ok(desc)
    }

    /// Look up a material by name.
    pub fn material(&self, name: &str) -> SceneResult<&Material> {
        self.materials
            .get(name)
            .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))
    }

    /// Resolve a path from the scene file against its directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Every shape must reference a declared material.
    fn validate(&self) -> SceneResult<()> {
        for shape in &self.shapes {
            self.material(shape.material())?;
        }
        Ok(())
    }
}
