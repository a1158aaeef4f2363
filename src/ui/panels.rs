use std::path::Path;

use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use crate::config::BASE_PATH_PRESETS;
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – parameters and run-group selection
// ---------------------------------------------------------------------------

/// Render the left panel: plot parameters, run-group checklist, plot button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    egui::Grid::new("plot_params")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Budget");
            ui.add(DragValue::new(&mut state.config.budget).range(1..=10_000));
            ui.end_row();

            ui.label("Desired target");
            ui.add(DragValue::new(&mut state.config.desired_target).speed(0.1));
            ui.end_row();
        });

    ui.add_space(4.0);
    ui.heading("Run groups");
    ui.separator();

    if state.base_path.is_none() {
        ui.label("No base path selected.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
        ui.label(format!("{}/{}", state.selected.len(), state.groups.len()));
    });

    let plot_clicked = ui
        .add_sized([ui.available_width(), 24.0], egui::Button::new("Plot Results"))
        .clicked();

    ui.separator();

    if state.groups.is_empty() {
        ui.label("No subdirectories found.");
    }

    let mut toggled = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for group in &state.groups {
                let mut checked = state.selected.contains(group);
                if ui.checkbox(&mut checked, group.as_str()).changed() {
                    toggled = Some(group.clone());
                }
            }
        });

    if let Some(group) = toggled {
        state.toggle_group(&group);
    }
    if plot_clicked {
        state.plot();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Export", |ui: &mut Ui| {
            let has_chart = state.outcome.is_some();
            if ui
                .add_enabled(has_chart, egui::Button::new("Chart as JSON…"))
                .clicked()
            {
                export_json_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_chart, egui::Button::new("Chart as PNG…"))
                .clicked()
            {
                request_png_dialog(ui.ctx(), state);
                ui.close_menu();
            }
        });

        ui.separator();

        let current = state
            .base_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Select…".to_string());
        ui.label("Base path:");
        egui::ComboBox::from_id_salt("base_path")
            .selected_text(current)
            .show_ui(ui, |ui: &mut Ui| {
                for preset in BASE_PATH_PRESETS {
                    if ui.selectable_label(false, *preset).clicked() {
                        state.set_base_path(Path::new(preset));
                    }
                }
            });

        if ui.button("Browse…").clicked() {
            open_folder_dialog(state);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Choose results directory")
        .pick_folder();

    if let Some(path) = folder {
        state.set_base_path(&path);
    }
}

fn export_json_dialog(state: &mut AppState) {
    let Some(outcome) = &state.outcome else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export chart")
        .add_filter("JSON", &["json"])
        .set_file_name("strength_curves.json")
        .save_file();

    if let Some(path) = file {
        if let Err(e) = export::save_chart_json(&path, &state.config, &outcome.curves, &outcome.chart)
        {
            log::error!("Failed to export chart: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

/// Ask for a destination, then request a screenshot; the image arrives as an
/// input event on a later frame and is written by the app.
fn request_png_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save chart image")
        .add_filter("PNG", &["png"])
        .set_file_name("strength_curves.png")
        .save_file();

    if let Some(path) = file {
        state.pending_png = Some(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }
}
