// Copyright @yucwang 2026

use crate::core::bsdf::BSDF;
use crate::core::rng::PcgRng;
use crate::math::constants::{Float, Vector3f};
use crate::math::frame::abs_cos_theta;
use crate::math::spectrum::RGBSpectrum;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

const BLOCK_SIZE: usize = 4096;

/// Monte Carlo estimate of the directional albedo of a BSDF, i.e. the
/// throughput `f * |cos| / pdf` an integrator would accumulate under a
/// uniform white environment.
pub struct AlbedoEstimator {
    samples: usize,
    seed: u64,
    show_progress: bool,
    threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbedoEstimate {
    pub albedo: RGBSpectrum,
    pub samples: usize,
    pub discarded: usize,
}

impl AlbedoEstimator {
    pub fn new(samples: usize, seed: u64) -> Self {
        Self {
            samples,
            seed,
            show_progress: false,
            threads: None,
        }
    }

    /// Worker count; defaults to the available parallelism.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Each block of samples draws from its own PCG stream, so the result
    /// does not depend on how blocks are distributed over threads.
    pub fn estimate(&self, bsdf: &BSDF, wo: &Vector3f) -> AlbedoEstimate {
        if self.samples == 0 {
            return AlbedoEstimate { albedo: RGBSpectrum::default(), samples: 0, discarded: 0 };
        }

        let total_blocks = (self.samples + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let progress = if self.show_progress {
            ProgressBar::new(total_blocks as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = self.threads
            .unwrap_or_else(|| thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .min(total_blocks);
        let (tx, rx) = mpsc::channel::<(usize, RGBSpectrum, usize)>();
        let mut partial_sums = vec![(RGBSpectrum::default(), 0usize); total_blocks];

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let begin = block_index * BLOCK_SIZE;
                        let end = (begin + BLOCK_SIZE).min(self.samples);
                        let mut rng = PcgRng::new(self.seed, block_index as u64);
                        let mut sum = RGBSpectrum::default();
                        let mut discarded = 0usize;
                        for _ in begin..end {
                            let sample = bsdf.sample_f(wo, &mut rng);
                            if sample.pdf <= 0.0 {
                                discarded += 1;
                                continue;
                            }
                            let throughput = sample.value * abs_cos_theta(&sample.wi) / sample.pdf;
                            if !throughput.is_finite() {
                                discarded += 1;
                                continue;
                            }
                            sum += throughput;
                        }
                        if tx.send((block_index, sum, discarded)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for _ in 0..total_blocks {
                if let Ok((block_index, sum, discarded)) = rx.recv() {
                    partial_sums[block_index] = (sum, discarded);
                    progress.inc(1);
                }
            }
        });
        progress.finish_and_clear();

        // Summed in block order for a thread-count independent result.
        let mut sum = RGBSpectrum::default();
        let mut discarded = 0usize;
        for (block_sum, block_discarded) in partial_sums {
            sum += block_sum;
            discarded += block_discarded;
        }
        if discarded > 0 {
            log::warn!("{} bsdf: discarded {} of {} samples with zero pdf or non-finite weight.",
                       bsdf.name(), discarded, self.samples);
        }

        AlbedoEstimate {
            albedo: sum / self.samples as Float,
            samples: self.samples,
            discarded,
        }
    }
}
