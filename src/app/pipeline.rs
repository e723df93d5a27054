//! Shared "figure pipeline" logic used by both the file renderer and the TUI.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! seed -> noise stream -> per-task generation -> tier pairing -> figure
//!
//! The front-ends can then focus on presentation (image file vs terminal).

use rand::Rng;
use tracing::{debug, info};

use crate::data::{GaussianNoise, NoiseSource, generate};
use crate::domain::{CurveSet, Figure, Panel, Series, TASKS, TaskSpec, X_LABEL};
use crate::error::AppError;

/// Use the configured seed, or draw a fresh one from the thread RNG.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::thread_rng().r#gen();
            info!(seed, "no seed given, drew a fresh one");
            seed
        }
    }
}

/// Generate the full four-panel figure from a seeded Gaussian noise stream.
pub fn build_figure(seed: Option<u64>) -> Result<Figure, AppError> {
    let seed = resolve_seed(seed);
    let mut noise = GaussianNoise::from_seed(seed)?;
    build_figure_with(seed, &mut noise)
}

/// Generate the figure from an injected noise source.
///
/// All tasks draw from the same source, in display order.
pub fn build_figure_with<N: NoiseSource + ?Sized>(seed: u64, noise: &mut N) -> Result<Figure, AppError> {
    let mut panels = Vec::with_capacity(TASKS.len());
    for task in &TASKS {
        let curves = generate(&task.curve_params(), &mut *noise)?;
        debug!(
            task = task.name,
            series = curves.series_count(),
            iters = curves.num_iters(),
            "generated curves"
        );
        panels.push(build_panel(task, curves)?);
    }
    Ok(Figure { seed, panels })
}

/// Pair generated series with the task tier's methods, in order.
pub fn build_panel(task: &TaskSpec, curves: CurveSet) -> Result<Panel, AppError> {
    let methods = task.tier.methods();
    if methods.len() != curves.series_count() {
        return Err(AppError::invalid(format!(
            "Task '{}' has {} series but the {} tier has {} methods.",
            task.name,
            curves.series_count(),
            task.tier.display_name(),
            methods.len()
        )));
    }

    let num_iters = curves.num_iters();
    let series = methods
        .iter()
        .zip(curves.means.into_iter().zip(curves.stds))
        .map(|(method, (mean, std))| Series {
            method: method.name.to_string(),
            color: method.color,
            mean,
            std,
        })
        .collect();

    Ok(Panel {
        title: task.name.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: task.y_label.to_string(),
        step: task.step,
        num_iters,
        series,
    })
}
