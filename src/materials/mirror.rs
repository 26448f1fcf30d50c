// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFSample, BSDFValue};
use crate::core::computation_node::ComputationNode;
use crate::math::constants::{Vector2f, Vector3f};
use crate::math::frame::{abs_cos_theta, reflect};
use crate::math::spectrum::RGBSpectrum;

/// Ideal specular reflector.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorBSDF {
    reflectance: RGBSpectrum,
}

impl MirrorBSDF {
    pub fn new(reflectance: RGBSpectrum) -> Self {
        Self { reflectance }
    }

    pub fn reflectance(&self) -> RGBSpectrum {
        self.reflectance
    }

    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> BSDFValue {
        BSDFValue::default()
    }

    // The 1/cos factor cancels the cosine applied by the integrator.
    pub fn sample(&self, wo: &Vector3f, _u: &Vector2f) -> BSDFSample {
        let wi = reflect(wo);
        BSDFSample::new(wi, self.reflectance / abs_cos_theta(&wi), 1.0)
    }
}

impl ComputationNode for MirrorBSDF {
    fn to_string(&self) -> String {
        format!("MirrorBSDF [reflectance={:?}]", self.reflectance.to_vector().as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::MirrorBSDF;
    use crate::math::constants::{Float, Vector2f, Vector3f};
    use crate::math::frame::abs_cos_theta;
    use crate::math::spectrum::RGBSpectrum;

    fn assert_close(a: Float, b: Float) {
        assert!((a - b).abs() < 1e-9, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_sample_mirrors_direction() {
        let bsdf = MirrorBSDF::new(RGBSpectrum::new(0.9, 0.8, 0.7));
        let wos = [
            Vector3f::new(0.1, -0.2, 0.97).normalize(),
            Vector3f::new(-0.5, 0.5, 0.5).normalize(),
            Vector3f::new(0.3, 0.4, -0.2).normalize(),
        ];
        for wo in wos.iter() {
            let sample = bsdf.sample(wo, &Vector2f::new(0.3, 0.7));
            assert_eq!(sample.wi.x, -wo.x);
            assert_eq!(sample.wi.y, -wo.y);
            assert_eq!(sample.wi.z, wo.z);
            assert_eq!(sample.pdf, 1.0);
        }
    }

    #[test]
    fn test_weight_cancels_cosine() {
        let r = RGBSpectrum::new(0.9, 0.8, 0.7);
        let bsdf = MirrorBSDF::new(r);
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let sample = bsdf.sample(&wo, &Vector2f::new(0.0, 0.0));
        let contribution = sample.value * abs_cos_theta(&sample.wi) / sample.pdf;
        for c in 0..3 {
            assert_close(sample.value[c], r[c] / 0.8);
            assert_close(contribution[c], r[c]);
        }
    }

    #[test]
    fn test_eval_is_black() {
        let bsdf = MirrorBSDF::new(RGBSpectrum::splat(1.0));
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let wi = Vector3f::new(-0.6, 0.0, 0.8);
        assert!(bsdf.f(&wo, &wi).is_black());
    }
}
