//! Synthetic learning-curve generator.
//!
//! For each series `i` (target `t`, scale `s`) and iteration `j`:
//!
//! - `mean[i][j] = t * (1 - exp(-j/s)) + noise + start_shift`
//! - `std[i][j]  = |mean[i][j]| * noise_level * (1 - j/N) + STD_FLOOR`
//!
//! The noise is drawn from an injected `NoiseSource`, one draw per `(i, j)` in
//! series-major order, so a seeded source makes the whole curve set reproducible.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{CurveParams, CurveSet};
use crate::error::AppError;
use crate::math::{decay_coefficient, saturating_exp};

/// Standard deviation of the per-point Gaussian perturbation of the mean.
pub const NOISE_STD: f64 = 0.05;

/// Additive floor of the uncertainty band; `std` never drops below it.
pub const STD_FLOOR: f64 = 0.1;

/// Source of per-point noise added to the mean curve.
pub trait NoiseSource {
    fn draw(&mut self) -> f64;
}

/// Zero-mean Gaussian noise (`σ = NOISE_STD`) over a seeded `StdRng`.
pub struct GaussianNoise {
    rng: StdRng,
    normal: Normal<f64>,
}

impl GaussianNoise {
    pub fn from_seed(seed: u64) -> Result<Self, AppError> {
        let normal = Normal::new(0.0, NOISE_STD)
            .map_err(|e| AppError::runtime(format!("Noise distribution error: {e}")))?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            normal,
        })
    }
}

impl NoiseSource for GaussianNoise {
    fn draw(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }
}

/// Noise-free source: turns the generator into the bare formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn draw(&mut self) -> f64 {
        0.0
    }
}

/// Generate one mean/std trajectory per `(target, scale)` pair.
pub fn generate<N: NoiseSource + ?Sized>(params: &CurveParams, noise: &mut N) -> Result<CurveSet, AppError> {
    validate_params(params)?;

    let n = params.num_iters;
    let x: Vec<usize> = (0..n).collect();
    let mut means = Vec::with_capacity(params.targets.len());
    let mut stds = Vec::with_capacity(params.targets.len());

    for (&target, &scale) in params.targets.iter().zip(params.scales.iter()) {
        let mut mean = Vec::with_capacity(n);
        let mut std = Vec::with_capacity(n);
        for &j in &x {
            let m = saturating_exp(target, scale, j as f64) + noise.draw() + params.start_shift;
            let s = m.abs() * params.noise_level * decay_coefficient(j, n) + STD_FLOOR;
            mean.push(m);
            std.push(s);
        }
        means.push(mean);
        stds.push(std);
    }

    Ok(CurveSet { x, means, stds })
}

fn validate_params(params: &CurveParams) -> Result<(), AppError> {
    if params.num_iters == 0 {
        return Err(AppError::invalid("Iteration count must be > 0."));
    }
    if params.targets.is_empty() {
        return Err(AppError::invalid("At least one series is required."));
    }
    if params.targets.len() != params.scales.len() {
        return Err(AppError::invalid(format!(
            "Got {} targets but {} scales.",
            params.targets.len(),
            params.scales.len()
        )));
    }
    if let Some((i, s)) = params
        .scales
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.is_finite() && **s > 0.0))
    {
        return Err(AppError::invalid(format!(
            "Scale for series {i} must be finite and > 0 (got {s})."
        )));
    }
    if let Some((i, t)) = params.targets.iter().enumerate().find(|(_, t)| !t.is_finite()) {
        return Err(AppError::invalid(format!("Target for series {i} is not finite (got {t}).")));
    }
    if !(params.noise_level.is_finite() && params.noise_level >= 0.0) {
        return Err(AppError::invalid(format!(
            "Noise level must be finite and >= 0 (got {}).",
            params.noise_level
        )));
    }
    if !params.start_shift.is_finite() {
        return Err(AppError::invalid("Start shift must be finite."));
    }
    Ok(())
}
