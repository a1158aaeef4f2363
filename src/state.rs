use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::PlotConfig;
use crate::data::enumerate::sorted_run_groups;
use crate::data::error::PipelineError;
use crate::pipeline::{plot_results, PlotOutcome};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Results directory chosen by the user (None until one is picked).
    pub base_path: Option<PathBuf>,

    /// Run groups found under `base_path`, sorted.
    pub groups: Vec<String>,

    /// Run groups ticked in the side panel.
    pub selected: BTreeSet<String>,

    /// Budget and target used for the next plot.
    pub config: PlotConfig,

    /// Result of the last successful plot request.
    pub outcome: Option<PlotOutcome>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Where to save the next viewport screenshot, if one was requested.
    pub pending_png: Option<PathBuf>,
}

impl AppState {
    /// Switch to a new results directory and list its run groups.
    pub fn set_base_path(&mut self, path: &Path) {
        self.selected.clear();
        self.outcome = None;

        match sorted_run_groups(path) {
            Ok(groups) => {
                log::info!("Found {} run groups under {}", groups.len(), path.display());
                self.groups = groups
                    .iter()
                    .map(|g| g.to_string_lossy().into_owned())
                    .collect();
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to list {}: {e}", path.display());
                self.groups.clear();
                self.status_message = Some(format!("Error: {e}"));
            }
        }

        self.base_path = Some(path.to_path_buf());
    }

    /// Tick or untick a single run group.
    pub fn toggle_group(&mut self, group: &str) {
        if !self.selected.remove(group) {
            self.selected.insert(group.to_string());
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.groups.iter().cloned().collect();
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
    }

    /// Run the pipeline over the ticked groups, in the order they are listed.
    pub fn plot(&mut self) {
        let Some(base) = self.base_path.clone() else {
            self.status_message = Some("Please choose a base path first.".to_string());
            return;
        };

        let selected: Vec<&str> = self
            .groups
            .iter()
            .filter(|g| self.selected.contains(*g))
            .map(String::as_str)
            .collect();

        if selected.is_empty() {
            self.status_message = Some(PipelineError::NoSelection.to_string());
            return;
        }

        match plot_results(&base, &selected, &self.config) {
            Ok(outcome) => {
                self.status_message = None;
                self.outcome = Some(outcome);
            }
            Err(e) => {
                log::error!("Plot request failed: {e}");
                let mut message = format!("Error: {e}");
                if let PipelineError::AllGroupsEmpty { warnings } = &e {
                    for warning in warnings {
                        message.push('\n');
                        message.push_str(warning);
                    }
                }
                self.status_message = Some(message);
                self.outcome = None;
            }
        }
    }
}
