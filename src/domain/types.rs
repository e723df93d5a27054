//! Shared domain types.
//!
//! The figure model (`Figure` -> `Panel` -> `Series`) is serializable so it can be:
//!
//! - rendered to an image or to the terminal
//! - exported to JSON/CSV
//! - reloaded later for re-rendering

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{LOWER_METHODS, UPPER_METHODS};
use crate::error::AppError;

/// 24-bit display color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, AppError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(AppError::invalid(format!("Invalid color '{s}': expected #rrggbb.")));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| AppError::invalid(format!("Invalid color '{s}': bad hex digits.")))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// A method (algorithm) name with its fixed legend color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method {
    pub name: &'static str,
    pub color: Rgb,
}

/// Method-to-color assignment group.
///
/// Every panel of the same tier uses the same ordered methods and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Eight methods (Cartpole, Swimmer).
    Upper,
    /// Four methods (Hopper, Walker).
    Lower,
}

impl Tier {
    pub fn methods(self) -> &'static [Method] {
        match self {
            Tier::Upper => &UPPER_METHODS,
            Tier::Lower => &LOWER_METHODS,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Tier::Upper => "upper",
            Tier::Lower => "lower",
        }
    }
}

/// Inputs to the curve generator.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveParams {
    /// Number of iterations `N` (x runs over `0..N`).
    pub num_iters: usize,
    /// Asymptotic target per series.
    pub targets: Vec<f64>,
    /// Growth-rate scale per series (strictly positive).
    pub scales: Vec<f64>,
    /// Relative size of the uncertainty band at `j = 0`.
    pub noise_level: f64,
    /// Constant offset added to every mean.
    pub start_shift: f64,
}

/// Generator output: shared x-axis plus one mean/std trajectory per series.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub x: Vec<usize>,
    pub means: Vec<Vec<f64>>,
    pub stds: Vec<Vec<f64>>,
}

impl CurveSet {
    pub fn series_count(&self) -> usize {
        self.means.len()
    }

    pub fn num_iters(&self) -> usize {
        self.x.len()
    }
}

/// One benchmark task: the literal parameters of one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSpec {
    pub name: &'static str,
    pub y_label: &'static str,
    pub tier: Tier,
    pub num_iters: usize,
    pub targets: &'static [f64],
    pub scales: &'static [f64],
    pub noise_level: f64,
    pub start_shift: f64,
    /// Draw an error bar every `step` iterations.
    pub step: usize,
}

impl TaskSpec {
    pub fn curve_params(&self) -> CurveParams {
        CurveParams {
            num_iters: self.num_iters,
            targets: self.targets.to_vec(),
            scales: self.scales.to_vec(),
            noise_level: self.noise_level,
            start_shift: self.start_shift,
        }
    }
}

/// One method's trajectory within a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub method: String,
    pub color: Rgb,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// `(iteration, mean)` pairs for line drawing.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mean.iter().enumerate().map(|(j, &m)| (j as f64, m))
    }

    /// `(iteration, mean - std, mean, mean + std)` at every `step`-th iteration,
    /// starting at 0.
    pub fn error_bars(&self, step: usize) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.mean
            .iter()
            .zip(self.std.iter())
            .enumerate()
            .step_by(step.max(1))
            .map(|(j, (&m, &s))| (j as f64, m - s, m, m + s))
    }

    /// Final `(mean, std)` of the trajectory.
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.mean.last()?, *self.std.last()?))
    }
}

/// A rendered task: title, axis labels, series and error-bar spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub step: usize,
    pub num_iters: usize,
    pub series: Vec<Series>,
}

impl Panel {
    /// Check the panel invariants: non-empty, equal lengths, finite means,
    /// finite non-negative uncertainties, positive step.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.step == 0 {
            return Err(AppError::invalid(format!("Panel '{}': step must be > 0.", self.title)));
        }
        if self.num_iters == 0 {
            return Err(AppError::invalid(format!("Panel '{}': no iterations.", self.title)));
        }
        if self.series.is_empty() {
            return Err(AppError::invalid(format!("Panel '{}': no series.", self.title)));
        }
        for s in &self.series {
            if s.mean.len() != self.num_iters || s.std.len() != self.num_iters {
                return Err(AppError::invalid(format!(
                    "Panel '{}': series '{}' has length {}/{} (expected {}).",
                    self.title,
                    s.method,
                    s.mean.len(),
                    s.std.len(),
                    self.num_iters
                )));
            }
            if s.mean.iter().any(|m| !m.is_finite()) {
                return Err(AppError::invalid(format!(
                    "Panel '{}': series '{}' has non-finite means.",
                    self.title, s.method
                )));
            }
            if s.std.iter().any(|v| !(v.is_finite() && *v >= 0.0)) {
                return Err(AppError::invalid(format!(
                    "Panel '{}': series '{}' has invalid uncertainties.",
                    self.title, s.method
                )));
            }
        }
        Ok(())
    }

    /// Min/max of `mean ± std` over all series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for s in &self.series {
            for (&m, &sd) in s.mean.iter().zip(s.std.iter()) {
                min_y = min_y.min(m - sd);
                max_y = max_y.max(m + sd);
            }
        }
        if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
            Some((min_y, max_y))
        } else {
            None
        }
    }

    /// Legend entries in series order.
    pub fn legend(&self) -> Vec<(&str, Rgb)> {
        self.series.iter().map(|s| (s.method.as_str(), s.color)).collect()
    }
}

/// The full 2x2 figure plus the seed that produced its noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub seed: u64,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.panels.is_empty() {
            return Err(AppError::invalid("Figure has no panels."));
        }
        self.panels.iter().try_for_each(Panel::validate)
    }
}

/// Settings for one `render` run (built from CLI arguments).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Noise seed; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Image path; `.svg` selects the SVG backend, anything else PNG.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
    /// Render a previously exported JSON figure instead of generating one.
    pub from: Option<PathBuf>,
    /// Print the per-series summary after rendering.
    pub summary: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            output: PathBuf::from("output.png"),
            width: 1000,
            height: 800,
            export_json: None,
            export_csv: None,
            from: None,
            summary: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(mean: Vec<f64>, std: Vec<f64>) -> Series {
        Series {
            method: "Vine".to_string(),
            color: Rgb::new(0x1f, 0x77, 0xb4),
            mean,
            std,
        }
    }

    fn panel(series: Vec<Series>, num_iters: usize) -> Panel {
        Panel {
            title: "Test".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            step: 2,
            num_iters,
            series,
        }
    }

    #[test]
    fn rgb_hex_round_trip() {
        let c = Rgb::from_hex("#e377c2").unwrap();
        assert_eq!(c, Rgb::new(0xe3, 0x77, 0xc2));
        assert_eq!(c.to_hex(), "#e377c2");
        assert_eq!(Rgb::from_hex("17BECF").unwrap(), Rgb::new(0x17, 0xbe, 0xcf));
    }

    #[test]
    fn rgb_rejects_malformed_hex() {
        for bad in ["", "#12345", "#1234567", "#gg0000", "#ééé"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert_eq!(err.exit_code(), 2, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn error_bars_follow_step() {
        let s = series(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.5; 5]);
        let bars: Vec<_> = s.error_bars(2).collect();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0], (0.0, -0.5, 0.0, 0.5));
        assert_eq!(bars[1], (2.0, 1.5, 2.0, 2.5));
        assert_eq!(bars[2], (4.0, 3.5, 4.0, 4.5));
    }

    #[test]
    fn y_range_covers_error_bands() {
        let p = panel(
            vec![series(vec![0.0, 1.0, 2.0], vec![0.5, 0.25, 0.1])],
            3,
        );
        let (lo, hi) = p.y_range().unwrap();
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 2.1).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_ragged_series() {
        let p = panel(vec![series(vec![0.0, 1.0], vec![0.1, 0.1, 0.1])], 3);
        assert_eq!(p.validate().unwrap_err().exit_code(), 2);
    }

    #[test]
    fn validate_rejects_negative_std_and_zero_step() {
        let p = panel(vec![series(vec![0.0, 1.0], vec![0.1, -0.1])], 2);
        assert!(p.validate().is_err());

        let mut p = panel(vec![series(vec![0.0, 1.0], vec![0.1, 0.1])], 2);
        assert!(p.validate().is_ok());
        p.step = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn tiers_have_expected_sizes() {
        assert_eq!(Tier::Upper.methods().len(), 8);
        assert_eq!(Tier::Lower.methods().len(), 4);
    }
}
