//! Formatted terminal output for a generated figure.
//!
//! We keep formatting code in one place so:
//! - the generator and renderer stay free of presentation concerns
//! - output changes are localized

use crate::domain::{Figure, Panel};

/// Final value of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalValue<'a> {
    pub method: &'a str,
    pub mean: f64,
    pub std: f64,
}

/// Final `(mean, std)` of every series in the panel, best (highest mean) first.
pub fn rank_final_values(panel: &Panel) -> Vec<FinalValue<'_>> {
    let mut out: Vec<FinalValue<'_>> = panel
        .series
        .iter()
        .filter_map(|s| {
            let (mean, std) = s.last()?;
            Some(FinalValue {
                method: s.method.as_str(),
                mean,
                std,
            })
        })
        .collect();
    out.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Format the run summary (seed + one table per panel).
pub fn format_figure_summary(figure: &Figure) -> String {
    let mut out = String::new();

    out.push_str("=== rlc - synthetic learning curves ===\n");
    out.push_str(&format!("Seed: {}\n", figure.seed));

    for panel in &figure.panels {
        out.push('\n');
        out.push_str(&format!(
            "{} ({}, n={}, error bars every {})\n",
            panel.title, panel.y_label, panel.num_iters, panel.step
        ));
        out.push_str(&format_table(panel));
    }

    out
}

fn format_table(panel: &Panel) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>4} {:<18} {:>10} {:>10}", "rank", "method", "final", "± std").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<4} {:-<18} {:-<10} {:-<10}", "", "", "", "").trim_end());
    out.push('\n');

    for (i, v) in rank_final_values(panel).iter().enumerate() {
        out.push_str(
            format!(
                "{:>4} {:<18} {:>10.4} {:>10.4}",
                i + 1,
                truncate(v.method, 18),
                v.mean,
                v.std
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_figure_with;
    use crate::data::ZeroNoise;

    #[test]
    fn ranking_orders_by_final_mean() {
        let fig = build_figure_with(0, &mut ZeroNoise).unwrap();
        let ranked = rank_final_values(&fig.panels[0]);
        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].method, "Vine");
        assert_eq!(ranked[7].method, "RWR");
        for w in ranked.windows(2) {
            assert!(w[0].mean >= w[1].mean);
        }
    }

    #[test]
    fn summary_lists_every_panel_and_method() {
        let fig = build_figure_with(17, &mut ZeroNoise).unwrap();
        let text = format_figure_summary(&fig);
        assert!(text.contains("Seed: 17"));
        for panel in &fig.panels {
            assert!(text.contains(&panel.title));
            for s in &panel.series {
                assert!(text.contains(&s.method), "missing {}", s.method);
            }
        }
        assert!(text.contains("Cost (- velocity ctrl)"));
    }

    #[test]
    fn truncate_marks_cut_names() {
        assert_eq!(truncate("Vine", 18), "Vine");
        assert_eq!(truncate("Natural Gradient", 8), "Natural.");
    }
}
