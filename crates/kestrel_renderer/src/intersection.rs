//! Primitive trait and Intersection record for ray-object intersection.

use kestrel_core::Material;
use kestrel_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Produced fresh by each query and never modified afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Primitive: Send + Sync {
    /// Intersect `ray` with this object.
    ///
    /// Returns the nearest hit whose `t` lies in `ray_t` (inclusive), or
    /// `None`. Numerically degenerate configurations are reported as misses.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Intersection<'_>>;
}
