// Copyright @yucwang 2023

use super::constants::{ INV_PI, PI, Float, Vector2f, Vector3f };

/// Draw a direction on the upper hemisphere with density proportional
/// to cos(theta), from two uniform numbers in [0, 1).
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let theta: Float = u.x.sqrt().asin();
    let phi: Float = 2. * PI * u.y;

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    return Vector3f::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta).normalize()
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    return cos_theta * INV_PI;
}
