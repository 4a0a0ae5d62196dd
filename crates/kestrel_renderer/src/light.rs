//! Light sources.
//!
//! Every light answers the same question: how much light arrives at a
//! shading point, and from where. Area lights have no runtime type; they
//! are discretized into point lights when the scene is built.

use kestrel_math::{Color, Vec3};

/// Light arriving at a shading point from one light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Intensity after falloff
    pub intensity: Color,
    /// Position of the light
    pub position: Vec3,
    /// Unit vector from the shading point toward the light
    pub direction: Vec3,
}

/// Trait for lights that can be sampled from a shading point.
pub trait Light: Send + Sync {
    /// Sample this light as seen from `point`.
    fn sample(&self, point: Vec3) -> LightSample;
}

/// Omnidirectional light with inverse-square falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Light for PointLight {
    fn sample(&self, point: Vec3) -> LightSample {
        let to_light = self.position - point;
        LightSample {
            intensity: self.intensity / to_light.length_squared(),
            position: self.position,
            direction: to_light.normalize(),
        }
    }
}

/// Cone-restricted light at `from` aimed at `to`.
///
/// Inside the cone, intensity falls off with distance squared and with
/// `cos(angle)^exponent` away from the axis. Outside it is black. A spot
/// aimed at its own position has no axis and lights nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    from: Vec3,
    /// Unit vector from the target back to the light
    axis: Option<Vec3>,
    intensity: Color,
    exponent: f32,
    /// Cosine of the cone half-angle
    cos_cutoff: f32,
}

impl SpotLight {
    /// Create a spot light. `cutoff_degrees` is the cone half-angle.
    pub fn new(from: Vec3, to: Vec3, intensity: Color, exponent: f32, cutoff_degrees: f32) -> Self {
        Self {
            from,
            axis: (from - to).try_normalize(),
            intensity,
            exponent,
            cos_cutoff: cutoff_degrees.to_radians().cos(),
        }
    }

    /// False when `from == to`.
    pub fn has_axis(&self) -> bool {
        self.axis.is_some()
    }
}

impl Light for SpotLight {
    fn sample(&self, point: Vec3) -> LightSample {
        let to_light = self.from - point;
        let direction = to_light.normalize();

        let intensity = match self.axis {
            Some(axis) => {
                let cos_angle = axis.dot(direction);
                if cos_angle < self.cos_cutoff {
                    Color::ZERO
                } else {
                    self.intensity / to_light.length_squared() * cos_angle.max(0.0).powf(self.exponent)
                }
            }
            None => Color::ZERO,
        };

        LightSample {
            intensity,
            position: self.from,
            direction,
        }
    }
}

/// Discretize a square area light into `samples` x `samples` point lights.
///
/// The square lies in the XZ plane through `center`. Each point light carries
/// `intensity * size^2 / samples^2`, so together they emit `intensity * size^2`.
pub fn area_light(center: Vec3, size: f32, intensity: Color, samples: u32) -> Vec<PointLight> {
    if samples == 0 {
        return Vec::new();
    }

    let n = samples as f32;
    let per_light = intensity * (size * size / (n * n));

    let mut lights = Vec::with_capacity((samples * samples) as usize);
    for j in 0..samples {
        for i in 0..samples {
            let position = Vec3::new(
                center.x + (i as f32 / n - 0.5) * size,
                center.y,
                center.z + (j as f32 / n - 0.5) * size,
            );
            lights.push(PointLight::new(position, per_light));
        }
    }

    lights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_falloff() {
        let light = PointLight::new(Vec3::new(0.0, 4.0, 0.0), Color::new(16.0, 8.0, 32.0));
        let ls = light.sample(Vec3::ZERO);

        assert!((ls.intensity - Color::new(1.0, 0.5, 2.0)).length() < 1e-6);
        assert_eq!(ls.position, Vec3::new(0.0, 4.0, 0.0));
        assert!((ls.direction - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_point_light_direction_is_unit() {
        let light = PointLight::new(Vec3::new(3.0, -2.0, 7.0), Color::ONE);
        let ls = light.sample(Vec3::new(-1.0, 1.0, 0.5));

        assert!((ls.direction.length() - 1.0).abs() < 1e-6);
        let d2 = (Vec3::new(3.0, -2.0, 7.0) - Vec3::new(-1.0, 1.0, 0.5)).length_squared();
        assert!((ls.intensity.x - 1.0 / d2).abs() < 1e-6);
    }

    #[test]
    fn test_spot_light_on_axis() {
        let light = SpotLight::new(
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::ZERO,
            Color::splat(8.0),
            10.0,
            30.0,
        );
        let ls = light.sample(Vec3::ZERO);

        // cos(0)^exponent is 1, only distance falloff remains
        assert!((ls.intensity - Color::splat(2.0)).length() < 1e-5);
        assert!((ls.direction - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_spot_light_outside_cone_is_black() {
        let light = SpotLight::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::ZERO,
            Color::ONE,
            1.0,
            30.0,
        );

        // 45 degrees off axis
        let ls = light.sample(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ls.intensity, Color::ZERO);
        assert!((ls.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spot_light_exponent_falloff() {
        let light = SpotLight::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Color::ONE, 2.0, 60.0);

        // 45 degrees off axis, distance^2 = 2, cos^2 = 0.5
        let ls = light.sample(Vec3::new(1.0, 0.0, 0.0));
        assert!((ls.intensity.x - 0.25).abs() < 1e-5);

        // Exponent 0 gives a hard edge with no angular falloff
        let hard = SpotLight::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Color::ONE, 0.0, 60.0);
        let ls = hard.sample(Vec3::new(1.0, 0.0, 0.0));
        assert!((ls.intensity.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_spot_light_cutoff_boundary() {
        let cutoff = 30.0_f32;
        let light = SpotLight::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Color::ONE, 1.0, cutoff);

        let point_at = |degrees: f32| Vec3::new(degrees.to_radians().tan(), 0.0, 0.0);

        let inside = light.sample(point_at(cutoff - 0.5));
        let outside = light.sample(point_at(cutoff + 0.5));

        assert!(inside.intensity.x > 0.0);
        assert_eq!(outside.intensity, Color::ZERO);
    }

    #[test]
    fn test_spot_light_without_axis_is_black() {
        let light = SpotLight::new(Vec3::ZERO, Vec3::ZERO, Color::ONE, 0.0, 10.0);
        assert!(!light.has_axis());

        for point in [Vec3::new(5.0, -3.0, 0.0), Vec3::new(0.0, 2.0, 1.0), Vec3::NEG_Z] {
            let ls = light.sample(point);
            assert_eq!(ls.intensity, Color::ZERO);
            assert!((ls.direction.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_area_light_grid() {
        let center = Vec3::new(1.0, 5.0, -2.0);
        let lights = area_light(center, 2.0, Color::ONE, 4);

        assert_eq!(lights.len(), 16);
        assert!(lights.iter().all(|l| l.position.y == 5.0));
        assert_eq!(lights[0].position, Vec3::new(0.0, 5.0, -3.0));
        assert_eq!(lights[15].position, Vec3::new(1.5, 5.0, -1.5));
    }

    #[test]
    fn test_area_light_conserves_intensity() {
        let intensity = Color::new(3.0, 6.0, 9.0);
        let size = 1.5;

        for samples in [1, 3, 8] {
            let lights = area_light(Vec3::ZERO, size, intensity, samples);
            let total: Color = lights.iter().map(|l| l.intensity).sum();
            assert!((total - intensity * size * size).length() < 1e-4);
        }
    }

    #[test]
    fn test_area_light_zero_samples() {
        assert!(area_light(Vec3::ZERO, 1.0, Color::ONE, 0).is_empty());
    }
}
