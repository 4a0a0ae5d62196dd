//! Sphere primitive for ray tracing.

use std::sync::Arc;

use kestrel_core::Material;
use kestrel_math::{Interval, Ray, Vec3};

use crate::intersection::{Intersection, Primitive};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Center of the sphere.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        // Unit direction, so the quadratic term is 1
        let oc = ray.origin() - self.center;
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b + sqrtd) / 2.0;
        let t1 = (-b - sqrtd) / 2.0;

        // Smallest root inside the range; a tangent hit has t0 == t1
        let t = match (ray_t.contains(t0), ray_t.contains(t1)) {
            (true, true) => t0.min(t1),
            (true, false) => t0,
            (false, true) => t1,
            (false, false) => return None,
        };

        let position = ray.at(t);

        // Outward even when the ray starts inside, refraction relies on it
        Some(Intersection {
            t,
            position,
            normal: (position - self.center).normalize(),
            material: &self.material,
        })
    }
}
