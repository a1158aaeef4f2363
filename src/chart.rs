use serde::Serialize;

use crate::color::{generate_palette, Rgb};
use crate::data::model::GroupCurve;

pub const TITLE: &str = "Compressive Strengths for different prompts";
pub const X_LABEL: &str = "Number of Development Cycles";
pub const Y_LABEL: &str = "Compressive Strength";
pub const TARGET_LABEL: &str = "Desired Target";

// ---------------------------------------------------------------------------
// Chart description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
}

/// One legend entry of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Series {
    Line {
        label: String,
        color: Rgb,
        style: LineStyle,
        points: Vec<[f64; 2]>,
    },
    /// Centre line with a symmetric vertical bar of `errors[i]` at each point.
    ErrorBars {
        label: String,
        color: Rgb,
        style: LineStyle,
        points: Vec<[f64; 2]>,
        errors: Vec<f64>,
    },
    HLine {
        label: String,
        color: Rgb,
        style: LineStyle,
        y: f64,
    },
}

impl Series {
    pub fn label(&self) -> &str {
        match self {
            Series::Line { label, .. }
            | Series::ErrorBars { label, .. }
            | Series::HLine { label, .. } => label,
        }
    }
}

/// Toolkit-independent chart: the UI draws it with egui_plot and the export
/// menu writes it out as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: bool,
    pub grid: bool,
    pub series: Vec<Series>,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Lay out the curves of every group plus the target line on one chart.
///
/// Per group: the mean (solid), the 10th percentile (dashed) and the mean
/// with ± one standard deviation bars (dash-dot). Steps are numbered from 1.
pub fn render_chart(curves: &[GroupCurve], target: f64) -> Chart {
    let palette = generate_palette(curves.len());
    let mut series = Vec::with_capacity(curves.len() * 3 + 1);

    for (gc, &color) in curves.iter().zip(palette.iter()) {
        let name = &gc.group;
        let curve = &gc.curve;
        let mean_points = steps(&curve.mean);

        series.push(Series::Line {
            label: format!("{name}, Runs = {}", curve.runs),
            color,
            style: LineStyle::Solid,
            points: mean_points.clone(),
        });
        series.push(Series::Line {
            label: format!("{name} 10th Percentile"),
            color,
            style: LineStyle::Dashed,
            points: steps(&curve.p10),
        });
        series.push(Series::ErrorBars {
            label: format!("{name} Mean ± Std Dev"),
            color,
            style: LineStyle::DashDot,
            points: mean_points,
            errors: curve.std_dev.clone(),
        });
    }

    series.push(Series::HLine {
        label: TARGET_LABEL.to_string(),
        color: Rgb::RED,
        style: LineStyle::Dashed,
        y: target,
    });

    Chart {
        title: TITLE.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        legend: true,
        grid: true,
        series,
    }
}

fn steps(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [(i + 1) as f64, v])
        .collect()
}
