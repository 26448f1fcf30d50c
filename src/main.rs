// Copyright 2020 TwoCookingMice

use glint::core::computation_node::ComputationNode;
use glint::core::params::ParamList;
use glint::estimators::albedo::AlbedoEstimator;
use glint::materials::factory::create_bsdf;
use glint::math::constants::{Float, Vector3f};

use std::env;

fn usage(program: &str) {
    eprintln!("Usage: {} <diffuse|reflect|refract> <params...> [--samples N] [--seed N] [--theta DEG] [--threads N] [--progress]", program);
    eprintln!("  diffuse, reflect: r g b");
    eprintln!("  refract:          r g b eta_i eta_t");
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
        std::process::exit(1);
    }

    let kind = &args[1];
    let mut samples: usize = 1 << 20;
    let mut seed: u64 = 0;
    let mut theta_deg: Float = 30.0;
    let mut threads: Option<usize> = None;
    let mut show_progress = false;
    let mut tokens: Vec<&str> = Vec::new();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--samples" => {
                i += 1;
                samples = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(samples);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(0);
            }
            "--theta" => {
                i += 1;
                theta_deg = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(theta_deg);
            }
            "--threads" => {
                i += 1;
                threads = args.get(i).and_then(|v| v.parse::<usize>().ok());
            }
            "--progress" => show_progress = true,
            token => tokens.push(token),
        }
        i += 1;
    }

    let bsdf = match ParamList::from_tokens(tokens).and_then(|mut params| create_bsdf(kind, &mut params)) {
        Ok(bsdf) => bsdf,
        Err(err) => {
            log::error!("Cannot create {} bsdf: {}.", kind, err);
            usage(&args[0]);
            std::process::exit(1);
        }
    };
    log::info!("Material: {} (delta = {}).", bsdf.to_string(), bsdf.is_delta());

    // Negative angles put wo below the surface.
    let theta = theta_deg.abs().to_radians();
    let z_sign = if theta_deg < 0.0 { -1.0 } else { 1.0 };
    let wo = Vector3f::new(theta.sin(), 0.0, z_sign * theta.cos());

    log::info!("Estimating albedo with {} samples, seed = {}, wo = ({:.4}, {:.4}, {:.4}).",
               samples, seed, wo.x, wo.y, wo.z);
    let mut estimator = AlbedoEstimator::new(samples, seed).with_progress(show_progress);
    if let Some(threads) = threads {
        estimator = estimator.with_threads(threads);
    }
    let estimate = estimator.estimate(&bsdf, &wo);

    let reference = bsdf.reflectance();
    log::info!("Albedo:      ({:.6}, {:.6}, {:.6})", estimate.albedo[0], estimate.albedo[1], estimate.albedo[2]);
    log::info!("Reflectance: ({:.6}, {:.6}, {:.6})", reference[0], reference[1], reference[2]);
    if estimate.discarded > 0 {
        log::info!("Discarded samples: {}.", estimate.discarded);
    }
}
