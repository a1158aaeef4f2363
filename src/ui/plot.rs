use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, PlotUi};

use crate::chart::{Chart, LineStyle, Series};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Strength plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart of the last plot request.
pub fn strength_plot(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Pick a base path, tick some run groups, then press Plot Results");
        });
        return;
    };

    draw_chart(ui, &outcome.chart);
}

fn draw_chart(ui: &mut Ui, chart: &Chart) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let mut plot = Plot::new("strength_plot")
        .x_axis_label(&chart.x_label)
        .y_axis_label(&chart.y_label)
        .show_grid(chart.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            draw_series(plot_ui, series);
        }
    });
}

fn draw_series(plot_ui: &mut PlotUi, series: &Series) {
    let label = series.label();
    match series {
        Series::Line {
            color,
            style,
            points,
            ..
        } => {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name(label)
                    .color(Color32::from(*color))
                    .style(egui_style(*style))
                    .width(1.5),
            );
        }
        Series::ErrorBars {
            color,
            style,
            points,
            errors,
            ..
        } => {
            let color = Color32::from(*color);
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name(label)
                    .color(color)
                    .style(egui_style(*style))
                    .width(1.0),
            );
            // Same name so the legend shows a single entry for all bars.
            for (&[x, y], &err) in points.iter().zip(errors) {
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[x, y - err], [x, y + err]]))
                        .name(label)
                        .color(color)
                        .width(1.0),
                );
            }
        }
        Series::HLine {
            color,
            style,
            y,
            ..
        } => {
            plot_ui.hline(
                HLine::new(*y)
                    .name(label)
                    .color(Color32::from(*color))
                    .style(egui_style(*style))
                    .width(1.5),
            );
        }
    }
}

fn egui_style(style: LineStyle) -> egui_plot::LineStyle {
    match style {
        LineStyle::Solid => egui_plot::LineStyle::Solid,
        LineStyle::Dashed => egui_plot::LineStyle::dashed_loose(),
        // egui_plot has no dash-dot pattern; loose dots are the closest match.
        LineStyle::DashDot => egui_plot::LineStyle::dotted_loose(),
    }
}
