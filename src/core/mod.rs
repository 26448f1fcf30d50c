// Copyright @yucwang 2021

pub mod bsdf;
pub mod computation_node;
pub mod params;
pub mod rng;
