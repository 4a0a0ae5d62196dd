use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// The direction is normalized once, at construction, and never again.
/// A zero direction normalizes to NaN components, which every intersection
/// routine rejects as "no hit".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit direction.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at parameter `t`. Because the direction is unit length, `t` is
    /// a world-space distance.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));

        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.direction - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -2.0));

        assert_eq!(ray.at(0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(1.0, 0.0, -2.5));
        assert_eq!(ray.at(-1.0), Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_ray_zero_direction_is_nan() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert!(ray.direction.is_nan());
    }

    #[test]
    fn test_ray_at_is_distance() {
        let ray = Ray::new(Vec3::new(2.0, 2.0, 2.0), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(ray.origin(), Vec3::splat(2.0));
        assert!(((ray.at(3.0) - ray.origin()).length() - 3.0).abs() < 1e-6);
    }
}
