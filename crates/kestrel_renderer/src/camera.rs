//! Pinhole camera for primary ray generation.

use kestrel_core::CameraDescription;
use kestrel_math::{Ray, Vec3};

/// Camera mapping normalized image coordinates to primary rays.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera at `eye` looking at `target`.
    ///
    /// `vfov` is the vertical field of view in degrees, `aspect` is width / height.
    pub fn new(eye: Vec3, target: Vec3, up: Vec3, vfov: f32, aspect: f32) -> Self {
        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * aspect;

        // Camera basis vectors
        let w = (eye - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left = eye - w - horizontal / 2.0 - vertical / 2.0;

        Self {
            eye,
            lower_left,
            horizontal,
            vertical,
        }
    }

    /// Create a camera from a scene file entry.
    pub fn from_description(desc: &CameraDescription, aspect: f32) -> Self {
        Self::new(desc.eye, desc.target, desc.up, desc.fov, aspect)
    }

    /// Primary ray through `(x, y)` in `[0, 1)^2`, `y = 0` at the bottom.
    pub fn get_ray(&self, x: f32, y: f32) -> Ray {
        let point = self.lower_left + x * self.horizontal + y * self.vertical;
        Ray::new(self.eye, point - self.eye)
    }

    /// Camera position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, 2.0)
    }

    #[test]
    fn test_center_ray_looks_at_target() {
        let ray = camera().get_ray(0.5, 0.5);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays() {
        let camera = camera();

        // 90 degree vertical fov: the viewport spans y in [-1, 1] at distance 1
        let bottom_left = camera.get_ray(0.0, 0.0).direction();
        let expected = Vec3::new(-2.0, -1.0, -1.0).normalize();
        assert!((bottom_left - expected).length() < 1e-5);

        let top = camera.get_ray(0.5, 1.0).direction();
        assert!(top.y > 0.0);
        assert!((top - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_from_description() {
        let desc = CameraDescription {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            ..Default::default()
        };
        let camera = Camera::from_description(&desc, 1.0);

        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, 5.0));
        assert!((camera.get_ray(0.5, 0.5).direction() - Vec3::NEG_Z).length() < 1e-6);
    }
}
