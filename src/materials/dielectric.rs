// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFSample, BSDFValue};
use crate::core::computation_node::ComputationNode;
use crate::materials::fresnel::dielectric_reflectance;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::frame::{abs_cos_theta, cos_theta, normal, reflect};
use crate::math::spectrum::RGBSpectrum;

/// Ideal smooth dielectric boundary. Transmits whenever refraction is
/// geometrically possible, scaled by the Fresnel transmittance, and
/// mirrors under total internal reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct DielectricBSDF {
    transmittance: RGBSpectrum,
    eta_i: Float,
    eta_t: Float,
}

impl ComputationNode for DielectricBSDF {
    fn to_string(&self) -> String {
        format!("DielectricBSDF [transmittance={:?}, eta_i={}, eta_t={}]",
                self.transmittance.to_vector().as_slice(), self.eta_i, self.eta_t)
    }
}

impl DielectricBSDF {
    pub fn new(transmittance: RGBSpectrum, eta_i: Float, eta_t: Float) -> Self {
        Self {
            transmittance,
            eta_i,
            eta_t,
        }
    }

    pub fn reflectance(&self) -> RGBSpectrum {
        self.transmittance
    }

    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> BSDFValue {
        BSDFValue::default()
    }

    // `wo` follows the path direction: a negative cosine means the path
    // crosses the boundary from the `eta_i` side. The normal term is
    // (eta * cos_i - cos_t) * (entering ? +1 : -1); the opposite sign,
    // (entering ? -1 : 1), only satisfies Snell's law at normal incidence.
    pub fn sample(&self, wo: &Vector3f, _u: &Vector2f) -> BSDFSample {
        let entering = cos_theta(wo) < 0.0;
        let (eta_i, eta_t) = if entering {
            (self.eta_i, self.eta_t)
        } else {
            (self.eta_t, self.eta_i)
        };
        let eta = eta_i / eta_t;

        let cos_i = abs_cos_theta(wo);
        let sin2_i = (1.0 - cos_i * cos_i).max(0.0);
        let sin2_t = eta * eta * sin2_i;

        if sin2_t < 1.0 {
            let cos_t = (1.0 - sin2_t).sqrt();
            let re = dielectric_reflectance(eta_i, eta_t, cos_i, cos_t);
            let side = if entering { 1.0 } else { -1.0 };
            let wi = (wo * eta + normal() * ((eta * cos_i - cos_t) * side)).normalize();
            let pdf = 1.0 - re;
            return BSDFSample::new(wi, self.transmittance * pdf / abs_cos_theta(&wi), pdf);
        }

        // Total internal reflection: all energy stays on this side.
        let re = 1.0;
        let wi = reflect(wo);
        BSDFSample::new(wi, self.transmittance * re / abs_cos_theta(&wi), re)
    }
}
