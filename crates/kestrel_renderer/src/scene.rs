//! Runtime scene: primitives and lights, read-only while rendering.

use std::collections::HashMap;
use std::sync::Arc;

use kestrel_core::{
    load_obj, LightDescription, Material, Mesh, SceneDescription, SceneError, SceneResult,
    ShapeDescription,
};
use kestrel_math::{Interval, Ray};

use crate::intersection::{Intersection, Primitive};
use crate::light::{area_light, Light, PointLight, SpotLight};
use crate::plane::Plane;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// An ordered list of primitives and the lights illuminating them.
///
/// Nearest-hit queries scan every primitive; there is no acceleration
/// structure.
#[derive(Default)]
pub struct Scene {
    primitives: Vec<Box<dyn Primitive>>,
    lights: Vec<Box<dyn Light>>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive.
    pub fn add(&mut self, primitive: Box<dyn Primitive>) {
        self.primitives.push(primitive);
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Box<dyn Light>) {
        self.lights.push(light);
    }

    /// Add a batch of lights, e.g. a discretized area light.
    pub fn add_lights<L: Light + 'static>(&mut self, lights: impl IntoIterator<Item = L>) {
        for light in lights {
            self.add_light(Box::new(light));
        }
    }

    /// Add one triangle per mesh face. Returns the number of triangles added.
    ///
    /// With `smooth`, triangles interpolate per-vertex normals, which are
    /// computed first if the mesh does not carry them. Zero-area faces are
    /// skipped.
    pub fn add_mesh(&mut self, mesh: &Mesh, material: Arc<Material>, smooth: bool) -> usize {
        let computed;
        let normals = match &mesh.normals {
            Some(n) if smooth && n.len() == mesh.positions.len() => Some(n.as_slice()),
            _ if smooth => {
                computed = mesh.smooth_normals();
                Some(computed.as_slice())
            }
            _ => None,
        };

        let mut added = 0;
        let mut degenerate = 0;

        for [i0, i1, i2] in mesh.triangles() {
            let (p0, p1, p2) = (mesh.positions[i0], mesh.positions[i1], mesh.positions[i2]);

            if (p1 - p0).cross(p2 - p0).length_squared() == 0.0 {
                degenerate += 1;
                continue;
            }

            let triangle = match normals {
                Some(n) => {
                    Triangle::with_vertex_normals(p0, p1, p2, [n[i0], n[i1], n[i2]], material.clone())
                }
                None => Triangle::new(p0, p1, p2, material.clone()),
            };
            self.add(Box::new(triangle));
            added += 1;
        }

        if degenerate > 0 {
            log::warn!("Skipped {} degenerate mesh triangles", degenerate);
        }
        log::debug!("Added mesh: {} triangles, smooth: {}", added, smooth);

        added
    }

    /// Build the runtime scene from a description, loading any meshes.
    pub fn from_description(desc: &SceneDescription) -> SceneResult<Self> {
        let materials: HashMap<&str, Arc<Material>> = desc
            .materials
            .iter()
            .map(|(name, material)| (name.as_str(), Arc::new(material.clone())))
            .collect();

        let material = |name: &str| -> SceneResult<Arc<Material>> {
            materials
                .get(name)
                .cloned()
                .ok_or_else(|| SceneError::UnknownMaterial(name.to_string()))
        };

        let mut scene = Scene::new();

        for shape in &desc.shapes {
            let mat = material(shape.material())?;
            match shape {
                ShapeDescription::Sphere { center, radius, .. } => {
                    scene.add(Box::new(Sphere::new(*center, *radius, mat)));
                }
                ShapeDescription::Plane { point, normal, .. } => {
                    if normal.length_squared() == 0.0 {
                        log::warn!("Plane through {:?} has a zero normal and will never be hit", point);
                    }
                    scene.add(Box::new(Plane::new(*point, *normal, mat)));
                }
                ShapeDescription::Triangle { p0, p1, p2, normals, .. } => {
                    let triangle = match normals {
                        Some(n) => Triangle::with_vertex_normals(*p0, *p1, *p2, *n, mat),
                        None => Triangle::new(*p0, *p1, *p2, mat),
                    };
                    scene.add(Box::new(triangle));
                }
                ShapeDescription::Mesh { path, smooth, .. } => {
                    let mesh = load_obj(desc.resolve_path(path))?;
                    scene.add_mesh(&mesh, mat, *smooth);
                }
            }
        }

        for light in &desc.lights {
            match *light {
                LightDescription::Point { position, intensity } => {
                    scene.add_light(Box::new(PointLight::new(position, intensity)));
                }
                LightDescription::Spot { from, to, intensity, exponent, cutoff } => {
                    let spot = SpotLight::new(from, to, intensity, exponent, cutoff);
                    if !spot.has_axis() {
                        log::warn!("Spot light at {:?} is aimed at itself and will emit nothing", from);
                    }
                    scene.add_light(Box::new(spot));
                }
                LightDescription::Area { center, size, intensity, samples } => {
                    scene.add_lights(area_light(center, size, intensity, samples));
                }
            }
        }

        log::info!(
            "Built scene: {} primitives, {} lights",
            scene.len(),
            scene.light_count()
        );

        Ok(scene)
    }

    /// The scene's lights.
    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Get the number of lights.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

impl Primitive for Scene {
    /// Nearest hit across all primitives.
    ///
    /// Each accepted hit pulls `max` in to its `t`, so later primitives only
    /// report something closer.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let mut closest = None;
        let mut range = ray_t;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray, range) {
                range = range.with_max(hit.t);
                closest = Some(hit);
            }
        }

        closest
    }
}
