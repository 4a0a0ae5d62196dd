//! Infinite plane primitive.

use std::sync::Arc;

use kestrel_core::Material;
use kestrel_math::{Interval, Ray, Vec3};

use crate::intersection::{Intersection, Primitive};

/// A plane through `point` with unit normal `normal`.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }

    /// The plane's unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let denom = ray.direction().dot(self.normal);

        // Parallel to the plane
        if denom == 0.0 {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.contains(t) {
            return None;
        }

        // The configured normal is reported on both sides
        Some(Intersection {
            t,
            position: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}
