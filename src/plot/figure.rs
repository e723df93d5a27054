//! Plotters rendering of the learning-curve figure.
//!
//! Panel drawing is generic over the Plotters backend so the same code renders
//! into a PNG/SVG file and into the terminal viewer. Only the `PanelStyle`
//! differs between the two.
//!
//! Per panel:
//! - one line per series in its tier color
//! - vertical error bars (`mean ± std`) every `step` iterations, no caps
//! - light gray major grid, lower-right framed legend, title caption

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::info;

use crate::domain::{Figure, Panel, Rgb};
use crate::error::AppError;

/// `lightgray`, drawn at 50 % alpha for the grid.
const LIGHT_GRAY: RGBColor = RGBColor(211, 211, 211);

/// Fraction of the y span added above and below the data.
const Y_PAD_FRAC: f64 = 0.05;

/// Visual settings for one panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelStyle {
    /// Caption font size; `None` leaves the title to the caller.
    pub title_size: Option<u32>,
    pub axis_desc_size: u32,
    pub tick_size: u32,
    pub legend_size: u32,
    pub line_width: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub ticks: usize,
    pub text: RGBColor,
    pub grid: bool,
    pub legend: bool,
    pub error_bars: bool,
}

/// Style for saved images (white paper look).
pub const FILE_STYLE: PanelStyle = PanelStyle {
    title_size: Some(17),
    axis_desc_size: 14,
    tick_size: 11,
    legend_size: 11,
    line_width: 2,
    margin: 10,
    x_label_area: 40,
    y_label_area: 55,
    ticks: 6,
    text: BLACK,
    grid: true,
    legend: true,
    error_bars: true,
};

/// Style for terminal cells: compact labels, no mesh, legend drawn by the TUI.
pub const TERMINAL_STYLE: PanelStyle = PanelStyle {
    title_size: None,
    axis_desc_size: 10,
    tick_size: 10,
    legend_size: 10,
    line_width: 1,
    margin: 1,
    x_label_area: 3,
    y_label_area: 7,
    ticks: 5,
    text: WHITE,
    grid: false,
    legend: false,
    error_bars: true,
};

/// Output format chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// Render the figure to `path` (PNG, or SVG for `.svg`).
pub fn render_figure(figure: &Figure, path: &Path, width: u32, height: u32) -> Result<(), AppError> {
    figure.validate()?;
    if width == 0 || height == 0 {
        return Err(AppError::invalid(format!(
            "Image size must be positive (got {width}x{height})."
        )));
    }

    let result = match ImageFormat::from_path(path) {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, (width, height)).into_drawing_area();
            draw_figure(&root, figure, &FILE_STYLE).map_err(|e| e.to_string())
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
            draw_figure(&root, figure, &FILE_STYLE).map_err(|e| e.to_string())
        }
    };
    result.map_err(|e| AppError::runtime(format!("Failed to render '{}': {e}", path.display())))?;

    info!(path = %path.display(), width, height, "figure written");
    Ok(())
}

/// Fill the root white and draw the panels in a two-column grid.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    style: &PanelStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let rows = figure.panels.len().div_ceil(2).max(1);
    let areas = root.split_evenly((rows, 2));
    for (area, panel) in areas.iter().zip(figure.panels.iter()) {
        draw_panel(area, panel, style)?;
    }

    root.present()?;
    Ok(())
}

/// Draw one panel into `area`.
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    style: &PanelStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let ([x0, x1], [y0, y1]) = panel_bounds(panel);
    let decimals = tick_decimals(y1 - y0);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area);
    if let Some(size) = style.title_size {
        builder.caption(
            panel.title.as_str(),
            ("sans-serif", size).into_font().color(&style.text),
        );
    }
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    let fmt_x = |v: &f64| format!("{v:.0}");
    let fmt_y = move |v: &f64| format!("{v:.decimals$}");
    let grid = LIGHT_GRAY.mix(0.5);
    let hidden = WHITE.mix(0.0);

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(panel.x_label.as_str())
            .y_desc(panel.y_label.as_str())
            .x_labels(style.ticks)
            .y_labels(style.ticks)
            .x_label_formatter(&fmt_x)
            .y_label_formatter(&fmt_y)
            .label_style(("sans-serif", style.tick_size).into_font().color(&style.text))
            .axis_desc_style(("sans-serif", style.axis_desc_size).into_font().color(&style.text))
            .axis_style(&style.text);
        if style.grid {
            mesh.bold_line_style(&grid).light_line_style(&hidden);
        } else {
            mesh.disable_x_mesh().disable_y_mesh();
        }
        mesh.draw()?;
    }

    for series in &panel.series {
        let color = plotters_color(series.color);
        let line = color.stroke_width(style.line_width);

        let anno = chart.draw_series(LineSeries::new(series.points(), line))?;
        if style.legend {
            anno.label(series.method.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));
        }

        if style.error_bars {
            chart.draw_series(series.error_bars(panel.step).map(|(x, lo, mid, hi)| {
                ErrorBar::new_vertical(x, lo, mid, hi, color.stroke_width(1), 0)
            }))?;
        }
    }

    if style.legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE)
            .border_style(&BLACK)
            .label_font(("sans-serif", style.legend_size).into_font().color(&style.text))
            .draw()?;
    }

    Ok(())
}

/// X bounds `0..N-1` and the padded y range of `mean ± std`.
pub fn panel_bounds(panel: &Panel) -> ([f64; 2], [f64; 2]) {
    let x1 = panel.num_iters.saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = panel.y_range().unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, Y_PAD_FRAC);
    ([0.0, x1], [y_min, y_max])
}

pub(crate) fn plotters_color(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

/// Decimal places for y tick labels given the axis span.
fn tick_decimals(span: f64) -> usize {
    if span >= 10.0 {
        0
    } else if span >= 1.0 {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Series;

    fn panel(mean: Vec<f64>, std: Vec<f64>) -> Panel {
        Panel {
            title: "Hopper".to_string(),
            x_label: "x".to_string(),
            y_label: "Reward".to_string(),
            step: 10,
            num_iters: mean.len(),
            series: vec![Series {
                method: "Vine".to_string(),
                color: Rgb::new(1, 2, 3),
                mean,
                std,
            }],
        }
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("out.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("OUT.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("output.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("output")), ImageFormat::Png);
    }

    #[test]
    fn bounds_pad_error_band() {
        let p = panel(vec![0.0, 1.0, 2.0], vec![0.5, 0.5, 0.5]);
        let ([x0, x1], [y0, y1]) = panel_bounds(&p);
        assert_eq!((x0, x1), (0.0, 2.0));
        // data spans [-0.5, 2.5] -> pad 0.15 each side
        assert!((y0 - -0.65).abs() < 1e-12, "y0={y0}");
        assert!((y1 - 2.65).abs() < 1e-12, "y1={y1}");
    }

    #[test]
    fn bounds_fall_back_for_degenerate_panels() {
        let p = panel(vec![1.0], vec![0.0]);
        let ([x0, x1], [y0, y1]) = panel_bounds(&p);
        assert!(x1 > x0);
        assert!(y1 > y0);
    }

    #[test]
    fn tick_precision_tracks_span() {
        assert_eq!(tick_decimals(12.0), 0);
        assert_eq!(tick_decimals(3.5), 1);
        assert_eq!(tick_decimals(0.3), 2);
    }

    #[test]
    fn writes_png_and_svg_images() {
        let fig = crate::app::pipeline::build_figure(Some(1)).unwrap();
        for name in ["figure.png", "figure.svg"] {
            let path = std::env::temp_dir().join(format!("rl_curves_{}_{name}", std::process::id()));
            render_figure(&fig, &path, 1000, 800).unwrap();
            let len = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
            let _ = std::fs::remove_file(&path);
            assert!(len > 0, "{name} is empty or missing");
        }
    }

    #[test]
    fn render_rejects_invalid_input_before_touching_disk() {
        let path = std::env::temp_dir().join("rl_curves_never_written.png");
        let empty = Figure { seed: 0, panels: vec![] };
        assert_eq!(render_figure(&empty, &path, 100, 100).unwrap_err().exit_code(), 2);

        let fig = Figure {
            seed: 0,
            panels: vec![panel(vec![0.0, 1.0], vec![0.1, 0.1])],
        };
        assert_eq!(render_figure(&fig, &path, 0, 100).unwrap_err().exit_code(), 2);
        assert!(!path.exists());
    }
}
