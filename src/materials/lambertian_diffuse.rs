// Copyright @yucwang 2023

use crate::core::bsdf::{BSDFSample, BSDFValue};
use crate::core::computation_node::ComputationNode;
use crate::math::constants::{ INV_PI, Vector2f, Vector3f };
use crate::math::frame::cos_theta;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::{ sample_cosine_hemisphere, sample_cosine_hemisphere_pdf };

#[derive(Debug, Clone, PartialEq)]
pub struct LambertianDiffuseBSDF {
    color: RGBSpectrum
}

impl ComputationNode for LambertianDiffuseBSDF {
    fn to_string(&self) -> String {
        format!("LambertianDiffuseBSDF: {{ reflectance: {:?} }}", self.color.to_vector().as_slice())
    }
}

impl LambertianDiffuseBSDF {
    pub fn new(rgb: RGBSpectrum) -> Self {
        Self {
            color: rgb,
        }
    }

    pub fn reflectance(&self) -> RGBSpectrum {
        self.color
    }

    pub fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> BSDFValue {
        self.color * INV_PI
    }

    pub fn sample(&self, wo: &Vector3f, u: &Vector2f) -> BSDFSample {
        let wi = sample_cosine_hemisphere(u);
        let pdf = sample_cosine_hemisphere_pdf(cos_theta(&wi));

        return BSDFSample::new(wi, self.f(wo, &wi), pdf)
    }
}
