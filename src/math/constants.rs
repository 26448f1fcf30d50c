/* Copyright 2020 @Yuchen Wong */

use nalgebra as na;

pub type Float = f64;
pub type Int = i32;

pub type Vector2f = na::Vector2<Float>;
pub type Vector3f = na::Vector3<Float>;
pub type Vector2i = na::Vector2<Int>;

pub const PI: Float = std::f64::consts::PI;
pub const INV_PI: Float = std::f64::consts::FRAC_1_PI;
