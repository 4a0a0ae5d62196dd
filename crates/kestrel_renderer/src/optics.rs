//! Mirror reflection and Snell refraction of unit vectors.

use kestrel_math::Vec3;

/// Mirror `l` about `n`: `2(n.l)n - l`.
///
/// Both vectors point away from the surface.
#[inline]
pub fn reflect(l: Vec3, n: Vec3) -> Vec3 {
    2.0 * n.dot(l) * n - l
}

/// Bend `l` through a boundary with normal `n` and index of refraction `ior`.
///
/// `l` points into the surface and `n` away from it. When `l` and `n` are
/// opposed the ray enters the medium (relative index `1/ior`), otherwise it
/// leaves it (`ior`). Returns `None` on total internal reflection, else the
/// normalized transmitted direction.
pub fn refract(l: Vec3, n: Vec3, ior: f32) -> Option<Vec3> {
    let cos_i = l.dot(n);
    let mu = if cos_i < 0.0 { 1.0 / ior } else { ior };
    let sin2_i = (1.0 - cos_i * cos_i).max(0.0);

    if mu * mu * sin2_i > 1.0 {
        return None;
    }

    let sin_r = mu * sin2_i.sqrt();
    let cos_r = (1.0 - sin_r * sin_r).sqrt();

    let n_scale = if cos_i > 0.0 {
        -mu * cos_i + cos_r
    } else {
        -mu * cos_i - cos_r
    };

    Some((n_scale * n + mu * l).normalize())
}
