// Copyright @yucwang 2023

// Shading-frame helpers. Directions are expressed in a local frame whose
// z axis is the surface normal.

use super::constants::{ Float, Vector3f };

/// Signed cosine between `w` and the shading normal. Negative values
/// point into the surface.
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    w.z.abs()
}

/// Mirror `w` about the shading normal.
#[inline]
pub fn reflect(w: &Vector3f) -> Vector3f {
    Vector3f::new(-w.x, -w.y, w.z)
}

#[inline]
pub fn normal() -> Vector3f {
    Vector3f::new(0.0, 0.0, 1.0)
}
