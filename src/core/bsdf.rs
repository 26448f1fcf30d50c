// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::rng::PcgRng;
use crate::materials::dielectric::DielectricBSDF;
use crate::materials::lambertian_diffuse::LambertianDiffuseBSDF;
use crate::materials::mirror::MirrorBSDF;
use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::spectrum::RGBSpectrum;

// Definitions of types used in BSDF sampling and eval
// processes
pub type BSDFValue = RGBSpectrum;

/// Result of importance sampling an incoming direction. For delta
/// lobes `pdf` is a discrete selection probability, not a density.
#[derive(Debug, Clone, PartialEq)]
pub struct BSDFSample {
    pub wi: Vector3f,
    pub value: BSDFValue,
    pub pdf: Float,
}

impl Default for BSDFSample {
    fn default() -> Self {
        Self {
            wi: Vector3f::zeros(),
            value: BSDFValue::default(),
            pdf: 0.0,
        }
    }
}

impl BSDFSample {
    pub fn new(wi: Vector3f, value: BSDFValue, pdf: Float) -> Self {
        Self { wi, value, pdf }
    }
}

/// Surface scattering model. All directions live in the local shading
/// frame; instances are immutable and freely shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub enum BSDF {
    Diffuse(LambertianDiffuseBSDF),
    Reflect(MirrorBSDF),
    Refract(DielectricBSDF),
}

impl BSDF {
    pub fn name(&self) -> &'static str {
        match self {
            BSDF::Diffuse(_) => "diffuse",
            BSDF::Reflect(_) => "reflect",
            BSDF::Refract(_) => "refract",
        }
    }

    /// Evaluate the scattering function for a fixed direction pair.
    /// Delta variants return black.
    pub fn f(&self, wo: &Vector3f, wi: &Vector3f) -> BSDFValue {
        match self {
            BSDF::Diffuse(bsdf) => bsdf.f(wo, wi),
            BSDF::Reflect(bsdf) => bsdf.f(wo, wi),
            BSDF::Refract(bsdf) => bsdf.f(wo, wi),
        }
    }

    /// Sample an incoming direction for `wo` using an explicit uniform
    /// sample in [0, 1)^2.
    pub fn sample(&self, wo: &Vector3f, u: &Vector2f) -> BSDFSample {
        match self {
            BSDF::Diffuse(bsdf) => bsdf.sample(wo, u),
            BSDF::Reflect(bsdf) => bsdf.sample(wo, u),
            BSDF::Refract(bsdf) => bsdf.sample(wo, u),
        }
    }

    pub fn sample_f(&self, wo: &Vector3f, rng: &mut PcgRng) -> BSDFSample {
        let u = rng.next_2d();
        self.sample(wo, &u)
    }

    pub fn is_delta(&self) -> bool {
        match self {
            BSDF::Diffuse(_) => false,
            BSDF::Reflect(_) | BSDF::Refract(_) => true,
        }
    }

    pub fn reflectance(&self) -> RGBSpectrum {
        match self {
            BSDF::Diffuse(bsdf) => bsdf.reflectance(),
            BSDF::Reflect(bsdf) => bsdf.reflectance(),
            BSDF::Refract(bsdf) => bsdf.reflectance(),
        }
    }
}

impl ComputationNode for BSDF {
    fn to_string(&self) -> String {
        match self {
            BSDF::Diffuse(bsdf) => bsdf.to_string(),
            BSDF::Reflect(bsdf) => bsdf.to_string(),
            BSDF::Refract(bsdf) => bsdf.to_string(),
        }
    }
}

impl From<LambertianDiffuseBSDF> for BSDF {
    fn from(bsdf: LambertianDiffuseBSDF) -> Self {
        BSDF::Diffuse(bsdf)
    }
}

impl From<MirrorBSDF> for BSDF {
    fn from(bsdf: MirrorBSDF) -> Self {
        BSDF::Reflect(bsdf)
    }
}

impl From<DielectricBSDF> for BSDF {
    fn from(bsdf: DielectricBSDF) -> Self {
        BSDF::Refract(bsdf)
    }
}
