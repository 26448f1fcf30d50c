// Copyright @yucwang 2023

pub mod dielectric;
pub mod factory;
pub mod fresnel;
pub mod lambertian_diffuse;
pub mod mirror;
