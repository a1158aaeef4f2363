use eframe::egui;

use crate::export;
use crate::state::AppState;
use crate::ui::{panels, plot, summary};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StrengthCurvesApp {
    pub state: AppState,
}

impl StrengthCurvesApp {
    /// Write a screenshot requested from the Export menu, if one arrived.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let image = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let (Some(image), Some(path)) = (image, self.state.pending_png.take()) else {
            return;
        };
        if let Err(e) = export::save_png(&path, &image) {
            log::error!("Failed to save chart image: {e:#}");
            self.state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

impl eframe::App for StrengthCurvesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);

        // ---- Top panel: base path + export ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: parameters and run groups ----
        egui::SidePanel::left("group_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: per-group summary ----
        if self.state.outcome.is_some() {
            egui::TopBottomPanel::bottom("summary")
                .resizable(true)
                .show(ctx, |ui| {
                    summary::summary_table(ui, &self.state);
                });
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::strength_plot(ui, &self.state);
        });
    }
}
