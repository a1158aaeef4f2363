use std::collections::BTreeMap;

use serde::Serialize;

/// Name of the measurement column every run CSV must carry.
pub const STRENGTH_COLUMN: &str = "Compressive Strength";

// ---------------------------------------------------------------------------
// Run – one CSV file
// ---------------------------------------------------------------------------

/// One independent run: compressive strength per development cycle,
/// already padded to the requested budget.
pub type Run = Vec<f64>;

/// A run that failed to load, kept so the UI can report it.
#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub file: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// LoadedGroup – every run found directly inside one run-group directory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct LoadedGroup {
    /// File name → padded run, ordered by file name.
    pub runs: BTreeMap<String, Run>,
    /// Files that were skipped because they could not be parsed.
    pub failures: Vec<FileFailure>,
}

impl LoadedGroup {
    /// Number of runs that loaded successfully.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// AggregateCurve – cross-run statistics of the running maximum
// ---------------------------------------------------------------------------

/// Per-step statistics over the running maxima of one group's runs.
///
/// `mean`, `p10` and `std_dev` always have the same length, the common
/// length of the retained runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateCurve {
    pub mean: Vec<f64>,
    /// 10th percentile, linear interpolation between order statistics.
    pub p10: Vec<f64>,
    /// Population standard deviation (divides by n).
    pub std_dev: Vec<f64>,
    /// Runs that contributed to the statistics (always ≥ 1).
    pub runs: usize,
    /// Runs dropped because their length differed from the longest run.
    pub discarded: usize,
}

impl AggregateCurve {
    /// Number of development cycles covered.
    pub fn len(&self) -> usize {
        self.mean.len()
    }
}

/// An aggregate curve tagged with the run group it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCurve {
    /// Relative path of the run group under the base path.
    pub group: String,
    pub curve: AggregateCurve,
}
