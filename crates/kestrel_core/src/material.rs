//! Surface materials.
//!
//! A material is plain data. Which coefficients are present decides how the
//! tracer treats a hit: `kr`/`kt` make the surface spawn secondary rays,
//! everything else is shaded locally.

use kestrel_math::Color;
use serde::Deserialize;

/// Phong-style material with optional mirror and transmission terms.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Ambient coefficient
    pub ka: Option<Color>,

    /// Diffuse coefficient (absent means no diffuse contribution)
    pub kd: Option<Color>,

    /// Specular coefficient
    pub ks: Option<Color>,

    /// Specular shininess exponent
    pub p: f32,

    /// Mirror reflectance
    pub kr: Option<Color>,

    /// Transmittance
    pub kt: Option<Color>,

    /// Index of refraction, used with `kt`
    pub ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: None,
            kd: None,
            ks: None,
            p: 1.0,
            kr: None,
            kt: None,
            ior: 1.0,
        }
    }
}

impl Material {
    /// Diffuse material with the given `kd`.
    pub fn diffuse(kd: Color) -> Self {
        Self {
            kd: Some(kd),
            ..Default::default()
        }
    }

    /// Perfect mirror with reflectance `kr`.
    pub fn mirror(kr: Color) -> Self {
        Self {
            kr: Some(kr),
            ..Default::default()
        }
    }

    /// Transparent material with transmittance `kt`, plus the matching
    /// reflectance `kr` when given.
    pub fn glass(kr: Option<Color>, kt: Color, ior: f32) -> Self {
        Self {
            kr,
            kt: Some(kt),
            ior,
            ..Default::default()
        }
    }

    /// Set the ambient coefficient.
    pub fn with_ambient(mut self, ka: Color) -> Self {
        self.ka = Some(ka);
        self
    }

    /// Set the diffuse coefficient.
    pub fn with_diffuse(mut self, kd: Color) -> Self {
        self.kd = Some(kd);
        self
    }

    /// Set the specular coefficient and shininess.
    pub fn with_specular(mut self, ks: Color, p: f32) -> Self {
        self.ks = Some(ks);
        self.p = p;
        self
    }

    /// True if a hit on this material spawns reflection or refraction rays.
    pub fn is_delegating(&self) -> bool {
        self.kr.is_some() || self.kt.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black_and_opaque() {
        let m = Material::default();
        assert!(m.ka.is_none() && m.kd.is_none() && m.ks.is_none());
        assert!(!m.is_delegating());
        assert_eq!(m.ior, 1.0);
    }

    #[test]
    fn test_delegating_toggles() {
        assert!(Material::mirror(Color::ONE).is_delegating());
        assert!(Material::glass(None, Color::ONE, 1.5).is_delegating());
        assert!(!Material::diffuse(Color::ONE)
            .with_specular(Color::ONE, 20.0)
            .is_delegating());
    }

    #[test]
    fn test_deserialize_partial() {
        let m: Material =
            serde_json::from_str(r#"{ "kd": [0.5, 0.5, 0.5], "ks": [1, 1, 1], "p": 20 }"#)
                .unwrap();

        assert_eq!(m.kd, Some(Color::splat(0.5)));
        assert_eq!(m.ks, Some(Color::ONE));
        assert_eq!(m.p, 20.0);
        assert!(m.kr.is_none());
        assert_eq!(m.ior, 1.0);
    }
}
