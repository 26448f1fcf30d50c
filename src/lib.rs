// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod estimators;
pub mod materials;
pub mod math;
pub mod sensors;
