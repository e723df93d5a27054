//! Saturating-exponential learning-curve shape.
//!
//! A learning curve is modeled as
//!
//! - `g(j; target, scale) = target * (1 - exp(-j/scale))`
//!
//! which starts at 0 for `j = 0` and approaches `target` asymptotically. A smaller
//! `scale` saturates faster.
//!
//! Numerical notes:
//! - For small `x = j/scale`, `1 - exp(-x)` suffers from catastrophic cancellation.
//!   We use the `expm1`-based form to keep precision near the origin.

/// Compute `target * (1 - exp(-j/scale))`.
///
/// `scale` must be strictly positive; callers validate it before evaluating.
pub fn saturating_exp(target: f64, scale: f64, j: f64) -> f64 {
    let x = j / scale;
    // 1 - exp(-x) computed as -expm1(-x).
    target * -(-x).exp_m1()
}

/// Linear decay coefficient `1 - j/n` used to shrink the uncertainty band.
///
/// Strictly decreasing in `j` and positive for every `j` in `0..n`.
pub fn decay_coefficient(j: usize, n: usize) -> f64 {
    1.0 - j as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_exp_starts_at_zero() {
        for &target in &[10.0, -0.05, 0.0, 3.2] {
            let v = saturating_exp(target, 5.0, 0.0);
            assert!(v.abs() < 1e-15, "g(0) should be 0, got {v}");
        }
    }

    #[test]
    fn saturating_exp_matches_closed_form() {
        for &scale in &[5.0f64, 40.0, 130.0] {
            for j in [1.0f64, 10.0, 49.0, 199.0] {
                let expected = 2.5 * (1.0 - (-j / scale).exp());
                let got = saturating_exp(2.5, scale, j);
                assert!(
                    (got - expected).abs() < 1e-12,
                    "scale={scale} j={j}: expected {expected}, got {got}"
                );
            }
        }
    }

    #[test]
    fn saturating_exp_approaches_target_monotonically() {
        let mut prev = saturating_exp(8.0, 8.0, 0.0);
        for j in 1..200 {
            let v = saturating_exp(8.0, 8.0, j as f64);
            assert!(v > prev, "curve should rise at j={j}");
            assert!(v < 8.0);
            prev = v;
        }
        assert!((8.0 - prev) < 1e-6);
    }

    #[test]
    fn smaller_scale_saturates_faster() {
        let fast = saturating_exp(1.0, 5.0, 10.0);
        let slow = saturating_exp(1.0, 40.0, 10.0);
        assert!(fast > slow);
    }

    #[test]
    fn decay_coefficient_strictly_decreasing_and_positive() {
        let n = 50;
        assert_eq!(decay_coefficient(0, n), 1.0);
        for j in 1..n {
            let prev = decay_coefficient(j - 1, n);
            let cur = decay_coefficient(j, n);
            assert!(cur < prev, "coefficient must shrink at j={j}");
            assert!(cur > 0.0, "coefficient must stay positive at j={j}");
        }
        assert!((decay_coefficient(n - 1, n) - 0.02).abs() < 1e-12);
    }
}
