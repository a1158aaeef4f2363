use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::ColorImage;
use serde::Serialize;

use crate::chart::Chart;
use crate::config::PlotConfig;
use crate::data::model::GroupCurve;

/// JSON document written by "Export → Chart as JSON…".
#[derive(Serialize)]
struct ChartExport<'a> {
    config: &'a PlotConfig,
    curves: &'a [GroupCurve],
    chart: &'a Chart,
}

/// Write the chart description, the curves behind it and the parameters
/// that produced them as pretty-printed JSON.
pub fn save_chart_json(
    path: &Path,
    config: &PlotConfig,
    curves: &[GroupCurve],
    chart: &Chart,
) -> Result<()> {
    let doc = ChartExport {
        config,
        curves,
        chart,
    };
    let text = serde_json::to_string_pretty(&doc).context("serialising chart")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported chart JSON to {}", path.display());
    Ok(())
}

/// Encode a viewport screenshot as PNG.
pub fn save_png(path: &Path, shot: &ColorImage) -> Result<()> {
    let [width, height] = shot.size;
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, shot.as_raw().to_vec())
        .context("screenshot buffer has unexpected size")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Saved chart image to {}", path.display());
    Ok(())
}
