use serde::Serialize;

use crate::data::loader::DEFAULT_BUDGET;

/// Height of the "Desired Target" reference line when none is configured.
pub const DEFAULT_TARGET: f64 = 64.86370000000001;

/// Base paths offered in the top bar before the user browses elsewhere.
pub const BASE_PATH_PRESETS: &[&str] = &["Results_Concrete", "../Push results"];

/// Parameters of one plot request besides the base path and selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotConfig {
    /// Minimum run length; shorter runs are padded with their last value.
    pub budget: usize,
    /// Height of the horizontal target line.
    pub desired_target: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            desired_target: DEFAULT_TARGET,
        }
    }
}
