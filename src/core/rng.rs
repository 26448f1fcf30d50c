// Copyright @yucwang 2026

use rand::Rng;
use rand_pcg::Pcg32;

use crate::math::constants::{Float, Vector2f};

/// Explicitly owned random state. Each worker holds its own instance;
/// different `stream` values with the same seed yield uncorrelated
/// sequences.
pub struct PcgRng {
    rng: Pcg32,
}

impl PcgRng {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self { rng: Pcg32::new(seed, stream) }
    }

    /// Uniform in [0, 1).
    pub fn next_float(&mut self) -> Float {
        self.rng.gen::<Float>()
    }

    pub fn next_2d(&mut self) -> Vector2f {
        let u1 = self.next_float();
        let u2 = self.next_float();
        Vector2f::new(u1, u2)
    }
}
