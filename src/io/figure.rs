//! Read/write figure JSON files.
//!
//! Figure JSON is the portable representation of one run:
//! - the seed that produced the noise
//! - every panel with its labels, error-bar step and series
//!
//! A saved file can be re-rendered later with `rlc render --from FILE`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Figure, Panel};
use crate::error::AppError;

/// On-disk schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub panels: Vec<Panel>,
}

impl FigureFile {
    pub fn new(figure: &Figure) -> Self {
        Self {
            tool: "rlc".to_string(),
            generated_at: Utc::now(),
            seed: figure.seed,
            panels: figure.panels.clone(),
        }
    }

    pub fn into_figure(self) -> Figure {
        Figure {
            seed: self.seed,
            panels: self.panels,
        }
    }
}

/// Write a figure JSON file.
pub fn write_figure_json(path: &Path, figure: &Figure) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::runtime(format!("Failed to create figure JSON '{}': {e}", path.display())))?;

    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, &FigureFile::new(figure))
        .map_err(|e| AppError::runtime(format!("Failed to write figure JSON: {e}")))?;
    out.flush()
        .map_err(|e| AppError::runtime(format!("Failed to write figure JSON: {e}")))?;

    info!(path = %path.display(), "figure JSON written");
    Ok(())
}

/// Read a figure JSON file and check its invariants.
pub fn read_figure_json(path: &Path) -> Result<Figure, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::invalid(format!("Failed to open figure JSON '{}': {e}", path.display())))?;
    let saved: FigureFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::invalid(format!("Invalid figure JSON: {e}")))?;

    let figure = saved.into_figure();
    figure.validate()?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_figure;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rl_curves_{}_{name}", std::process::id()))
    }

    #[test]
    fn saved_figure_reloads_unchanged() {
        let path = temp_path("reload.json");
        for seed in [0, 3, 5, 41] {
            let fig = build_figure(Some(seed)).unwrap();
            write_figure_json(&path, &fig).unwrap();
            let back = read_figure_json(&path).unwrap();
            assert_eq!(back, fig, "seed {seed} did not reload bit for bit");
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn colors_are_stored_as_hex() {
        let fig = build_figure(Some(6)).unwrap();
        let json = serde_json::to_string(&FigureFile::new(&fig)).unwrap();
        assert!(json.contains("\"color\":\"#1f77b4\""));
        assert!(json.contains("\"tool\":\"rlc\""));
    }

    #[test]
    fn rejects_malformed_files() {
        let path = temp_path("bad.json");
        std::fs::write(&path, "{\"tool\": \"rlc\"}").unwrap();
        let err = read_figure_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.exit_code(), 2);

        let missing = temp_path("missing.json");
        assert_eq!(read_figure_json(&missing).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn rejects_files_that_break_invariants() {
        let mut fig = build_figure(Some(8)).unwrap();
        fig.panels[2].series[1].std[3] = -1.0;
        let path = temp_path("negative_std.json");
        write_figure_json(&path, &fig).unwrap();
        let err = read_figure_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.exit_code(), 2);
    }
}
