// Copyright @yucwang 2026

use crate::math::constants::Float;

/// Unpolarized reflectance from the parallel and perpendicular Fresnel
/// coefficients, given both cosines on their own sides of the boundary.
pub fn dielectric_reflectance(eta_i: Float, eta_t: Float, cos_i: Float, cos_t: Float) -> Float {
    let r_parl = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let r_perp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
    0.5 * (r_parl * r_parl + r_perp * r_perp)
}

/// Fresnel reflectance of a dielectric boundary. A negative `cos_i`
/// means the ray leaves the `eta_t` side, so the indices are swapped.
pub fn fresnel_dielectric(cos_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let (eta_i, eta_t, cos_i) = if cos_i < 0.0 {
        (eta_t, eta_i, -cos_i)
    } else {
        (eta_i, eta_t, cos_i)
    };

    let sin_i = (1.0 - cos_i * cos_i).max(0.0).sqrt();
    let sin_t = eta_i / eta_t * sin_i;
    if sin_t >= 1.0 {
        return 1.0;
    }
    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    dielectric_reflectance(eta_i, eta_t, cos_i, cos_t)
}
