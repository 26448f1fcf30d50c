// Copyright @yucwang 2026

use crate::core::bsdf::BSDF;
use crate::core::computation_node::ComputationNode;
use crate::core::params::{ParamError, ParamList};
use crate::materials::dielectric::DielectricBSDF;
use crate::materials::lambertian_diffuse::LambertianDiffuseBSDF;
use crate::materials::mirror::MirrorBSDF;

/// Parameters: reflectance (3 floats).
pub fn new_diffuse_bsdf(params: &mut ParamList) -> Result<BSDF, ParamError> {
    let reflectance = params.next_reflectance()?;
    Ok(BSDF::Diffuse(LambertianDiffuseBSDF::new(reflectance)))
}

/// Parameters: reflectance (3 floats).
pub fn new_reflect_bsdf(params: &mut ParamList) -> Result<BSDF, ParamError> {
    let reflectance = params.next_reflectance()?;
    Ok(BSDF::Reflect(MirrorBSDF::new(reflectance)))
}

/// Parameters: transmittance (3 floats), eta_i, eta_t.
pub fn new_refract_bsdf(params: &mut ParamList) -> Result<BSDF, ParamError> {
    let transmittance = params.next_reflectance()?;
    let eta_i = params.next_ior()?;
    let eta_t = params.next_ior()?;
    Ok(BSDF::Refract(DielectricBSDF::new(transmittance, eta_i, eta_t)))
}

pub fn create_bsdf(kind: &str, params: &mut ParamList) -> Result<BSDF, ParamError> {
    let bsdf = match kind {
        "diffuse" => new_diffuse_bsdf(params)?,
        "reflect" => new_reflect_bsdf(params)?,
        "refract" => new_refract_bsdf(params)?,
        _ => return Err(ParamError::Unsupported(kind.to_string())),
    };
    if !params.is_empty() {
        log::warn!("{} unused parameter(s) after {} bsdf.", params.remaining(), kind);
    }
    log::debug!("Created {}.", bsdf.to_string());

    Ok(bsdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Float;
    use crate::math::spectrum::RGBSpectrum;

    #[test]
    fn test_create_each_variant() {
        let mut params = ParamList::parse("0.5 0.5 0.5").unwrap();
        let diffuse = create_bsdf("diffuse", &mut params).unwrap();
        assert_eq!(diffuse.name(), "diffuse");
        assert!(!diffuse.is_delta());
        assert_eq!(diffuse.reflectance(), RGBSpectrum::splat(0.5));

        let mut params = ParamList::parse("1 1 1").unwrap();
        let mirror = create_bsdf("reflect", &mut params).unwrap();
        assert_eq!(mirror, BSDF::Reflect(MirrorBSDF::new(RGBSpectrum::splat(1.0))));

        let mut params = ParamList::parse("1 0.9 0.8 1.0 1.5").unwrap();
        let glass = create_bsdf("refract", &mut params).unwrap();
        assert_eq!(glass, BSDF::Refract(DielectricBSDF::new(RGBSpectrum::new(1.0, 0.9, 0.8), 1.0, 1.5)));
        assert!(params.is_empty());
    }

    #[test]
    fn test_factories_read_in_order() {
        let mut params = ParamList::new(vec![0.1, 0.2, 0.3, 1.33, 1.0, 0.7, 0.7, 0.7]);
        let water = new_refract_bsdf(&mut params).unwrap();
        assert_eq!(water, BSDF::Refract(DielectricBSDF::new(RGBSpectrum::new(0.1, 0.2, 0.3), 1.33, 1.0)));
        let wall = new_diffuse_bsdf(&mut params).unwrap();
        assert_eq!(wall.reflectance(), RGBSpectrum::splat(0.7));
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut params = ParamList::parse("1 1 1").unwrap();
        assert_eq!(create_bsdf("glossy", &mut params), Err(ParamError::Unsupported("glossy".to_string())));

        let mut params = ParamList::parse("1 1 1 1.0").unwrap();
        assert_eq!(new_refract_bsdf(&mut params), Err(ParamError::Missing("float")));

        let mut params = ParamList::parse("1 1").unwrap();
        assert_eq!(new_reflect_bsdf(&mut params), Err(ParamError::Missing("vector")));

        let mut params = ParamList::parse("1 1 1 1.0 -1.5").unwrap();
        assert!(matches!(new_refract_bsdf(&mut params), Err(ParamError::Invalid(_))));

        let mut params = ParamList::new(vec![1.0, 1.0, 1.0, Float::NAN, 1.5]);
        assert!(matches!(new_refract_bsdf(&mut params), Err(ParamError::Invalid(_))));

        let mut params = ParamList::new(vec![1.0, 1.0, 1.0, Float::INFINITY, 1.5]);
        assert!(matches!(new_refract_bsdf(&mut params), Err(ParamError::Invalid(_))));

        let mut params = ParamList::new(vec![Float::NAN, 1.0, 1.0]);
        assert!(matches!(new_diffuse_bsdf(&mut params), Err(ParamError::Invalid(_))));
    }
}
