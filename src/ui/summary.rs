use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Per-group figures at the last development cycle, plus the warnings of the
/// last plot request.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    let Some(outcome) = &state.outcome else {
        return;
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .columns(Column::auto().at_least(70.0), 5)
        .header(20.0, |mut header| {
            for title in ["Run group", "Runs", "Discarded", "Final mean", "Final p10", "Final std"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for gc in &outcome.curves {
                let c = &gc.curve;
                let last = |v: &[f64]| v.last().map(|x| format!("{x:.3}")).unwrap_or_default();
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&gc.group);
                    });
                    row.col(|ui| {
                        ui.label(c.runs.to_string());
                    });
                    row.col(|ui| {
                        ui.label(c.discarded.to_string());
                    });
                    row.col(|ui| {
                        ui.label(last(&c.mean));
                    });
                    row.col(|ui| {
                        ui.label(last(&c.p10));
                    });
                    row.col(|ui| {
                        ui.label(last(&c.std_dev));
                    });
                });
            }
        });

    for warning in &outcome.warnings {
        ui.label(RichText::new(warning).color(Color32::YELLOW));
    }
}
