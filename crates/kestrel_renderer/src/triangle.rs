//! Triangle primitive for ray tracing.
//!
//! Solves `O + t*d = a*P0 + b*P1 + (1-a-b)*P2` with Cramer's rule, anchored
//! at `P2`: the system has columns `d`, `P2-P0`, `P2-P1` and right-hand side
//! `P2-O`.

use std::sync::Arc;

use kestrel_core::Material;
use kestrel_math::{Interval, Mat3, Ray, Vec3};

use crate::intersection::{Intersection, Primitive};

/// A triangle primitive with optional per-vertex normals.
pub struct Triangle {
    /// Vertices
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    /// Pre-computed face normal, `(p1 - p0) x (p2 - p0)` normalized
    normal: Vec3,
    /// Normals at p0, p1, p2 for smooth shading
    vertex_normals: Option<[Vec3; 3]>,
    material: Arc<Material>,
}

/// Barycentric hit on a triangle: `position = alpha*P0 + beta*P1 + gamma*P2`.
#[derive(Debug, Clone, Copy)]
pub struct Barycentric {
    pub t: f32,
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Triangle {
    /// Create a new flat-shaded triangle from three vertices.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, material: Arc<Material>) -> Self {
        Self {
            p0,
            p1,
            p2,
            normal: (p1 - p0).cross(p2 - p0).normalize_or_zero(),
            vertex_normals: None,
            material,
        }
    }

    /// Create a triangle whose normal is interpolated from per-vertex normals.
    pub fn with_vertex_normals(
        p0: Vec3,
        p1: Vec3,
        p2: Vec3,
        normals: [Vec3; 3],
        material: Arc<Material>,
    ) -> Self {
        Self {
            vertex_normals: Some(normals),
            ..Self::new(p0, p1, p2, material)
        }
    }

    /// The flat face normal.
    pub fn face_normal(&self) -> Vec3 {
        self.normal
    }

    /// Vertices in order.
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Solve for the ray parameter and barycentric weights.
    ///
    /// Returns `None` for parallel rays, degenerate triangles, hits outside
    /// the triangle, and `t` outside `ray_t` or behind the origin.
    pub fn barycentric(&self, ray: &Ray, ray_t: Interval) -> Option<Barycentric> {
        let a = ray.direction();
        let b = self.p2 - self.p0;
        let c = self.p2 - self.p1;
        let rhs = self.p2 - ray.origin();

        let denom = Mat3::from_cols(a, b, c).determinant();
        if denom == 0.0 {
            return None;
        }

        let t = Mat3::from_cols(rhs, b, c).determinant() / denom;
        let alpha = Mat3::from_cols(a, rhs, c).determinant() / denom;
        let beta = Mat3::from_cols(a, b, rhs).determinant() / denom;

        if alpha < 0.0 || beta < 0.0 || alpha + beta > 1.0 || t < 0.0 || !ray_t.contains(t) {
            return None;
        }

        Some(Barycentric {
            t,
            alpha,
            beta,
            gamma: 1.0 - alpha - beta,
        })
    }
}

impl Primitive for Triangle {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>> {
        let hit = self.barycentric(ray, ray_t)?;

        let normal = match self.vertex_normals {
            Some([n0, n1, n2]) => (hit.alpha * n0 + hit.beta * n1 + hit.gamma * n2).normalize(),
            None => self.normal,
        };

        Some(Intersection {
            t: hit.t,
            position: ray.at(hit.t),
            normal,
            material: &self.material,
        })
    }
}
