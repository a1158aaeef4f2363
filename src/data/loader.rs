use std::path::Path;

use anyhow::{bail, Context, Result};

use super::error::PipelineError;
use super::model::{FileFailure, LoadedGroup, Run, STRENGTH_COLUMN};

/// Minimum run length used when the caller does not ask for another one.
pub const DEFAULT_BUDGET: usize = 10;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every `*.csv` file sitting directly inside `dir` (no recursion).
///
/// A file that cannot be parsed is recorded in [`LoadedGroup::failures`]
/// and the remaining files are still loaded. A directory without CSV files
/// gives an empty group, not an error.
pub fn load_run_group(dir: &Path, budget: usize) -> Result<LoadedGroup, PipelineError> {
    let entries = std::fs::read_dir(dir).map_err(|e| PipelineError::io(dir, e))?;

    let mut group = LoadedGroup::default();

    for entry in entries {
        let entry = entry.map_err(|e| PipelineError::io(dir, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if !name.ends_with(".csv") || !path.is_file() {
            continue;
        }

        match load_run(&path, budget) {
            Ok(run) => {
                log::debug!("Loaded {} values from {}", run.len(), path.display());
                group.runs.insert(name, run);
            }
            Err(e) => {
                log::warn!("Skipping {}: {e}", path.display());
                group.failures.push(FileFailure {
                    file: name,
                    reason: failure_reason(e),
                });
            }
        }
    }

    Ok(group)
}

/// Load one run CSV and pad it to `budget` values.
pub fn load_run(path: &Path, budget: usize) -> Result<Run, PipelineError> {
    let values = read_strength_column(path).map_err(|e| PipelineError::Parse {
        file: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        reason: format!("{e:#}"),
    })?;
    Ok(pad_to_budget(values, budget))
}

/// Right-pad `values` with its last element (0.0 when empty) until it holds
/// `budget` values. Longer input is returned untouched.
pub fn pad_to_budget(mut values: Vec<f64>, budget: usize) -> Run {
    if values.len() < budget {
        let fill = values.last().copied().unwrap_or(0.0);
        values.resize(budget, fill);
    }
    values
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one row per development cycle.
/// Only the `Compressive Strength` column is read; other columns are ignored.
fn read_strength_column(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Fields)
        .from_path(path)
        .context("opening CSV")?;

    let column = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .position(|h| h == STRENGTH_COLUMN)
        .with_context(|| format!("CSV missing '{STRENGTH_COLUMN}' column"))?;

    let mut values = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = record.get(column).unwrap_or("");
        let value = cell
            .parse::<f64>()
            .with_context(|| format!("CSV row {row_no}: '{cell}' is not a number"))?;
        if !value.is_finite() {
            bail!("CSV row {row_no}: '{cell}' is not a finite number");
        }
        values.push(value);
    }

    Ok(values)
}

fn failure_reason(err: PipelineError) -> String {
    match err {
        PipelineError::Parse { reason, .. } => reason,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn pads_short_run_with_last_value() {
        assert_eq!(
            pad_to_budget(vec![1.0, 3.0, 2.0], 6),
            vec![1.0, 3.0, 2.0, 2.0, 2.0, 2.0]
        );
    }

    #[test]
    fn pads_empty_run_with_zero() {
        assert_eq!(pad_to_budget(Vec::new(), 4), vec![0.0; 4]);
    }

    #[test]
    fn long_run_is_not_truncated() {
        let values: Vec<f64> = (0..15).map(f64::from).collect();
        assert_eq!(pad_to_budget(values.clone(), DEFAULT_BUDGET), values);
    }

    #[test]
    fn reads_strength_column_and_ignores_others() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "run.csv",
            "Cycle,Compressive Strength,Mix\n1,10.5,a\n2, 12.0 ,b\n3,11.0,c\n",
        );

        let run = load_run(&tmp.path().join("run.csv"), 3).unwrap();
        assert_eq!(run, vec![10.5, 12.0, 11.0]);
    }

    #[test]
    fn missing_column_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "bad.csv", "Cycle,compressive strength\n1,2\n");

        match load_run(&tmp.path().join("bad.csv"), 3) {
            Err(PipelineError::Parse { file, reason }) => {
                assert_eq!(file, "bad.csv");
                assert!(reason.contains(STRENGTH_COLUMN), "{reason}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn bad_file_does_not_abort_group() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "good.csv", "Compressive Strength\n1\n2\n");
        write(tmp.path(), "bad.csv", "Compressive Strength\n1\nabc\n");
        write(tmp.path(), "readme.txt", "not a run");
        std::fs::create_dir(tmp.path().join("nested.csv")).unwrap();

        let group = load_run_group(tmp.path(), 4).unwrap();

        assert_eq!(group.len(), 1);
        assert_eq!(group.runs["good.csv"], vec![1.0, 2.0, 2.0, 2.0]);
        assert_eq!(group.failures.len(), 1);
        assert_eq!(group.failures[0].file, "bad.csv");
        assert!(group.failures[0].reason.contains("abc"));
    }

    #[test]
    fn non_finite_cells_fail_their_file() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "a_nan.csv", "Compressive Strength\nNaN\n5\n6\n");
        write(tmp.path(), "b_inf.csv", "Compressive Strength\n4\ninf\n6\n");
        write(tmp.path(), "c_huge.csv", "Compressive Strength\n1e400\n5\n6\n");
        write(tmp.path(), "d_good.csv", "Compressive Strength\n4\n5\n6\n");

        let group = load_run_group(tmp.path(), 3).unwrap();

        assert_eq!(group.len(), 1);
        assert_eq!(group.runs["d_good.csv"], vec![4.0, 5.0, 6.0]);
        let mut failed: Vec<&str> = group.failures.iter().map(|f| f.file.as_str()).collect();
        failed.sort();
        assert_eq!(failed, vec!["a_nan.csv", "b_inf.csv", "c_huge.csv"]);
        assert!(group.failures.iter().all(|f| f.reason.contains("finite")));
    }

    #[test]
    fn empty_directory_is_empty_group() {
        let tmp = tempfile::tempdir().unwrap();
        let group = load_run_group(tmp.path(), DEFAULT_BUDGET).unwrap();
        assert!(group.is_empty());
        assert!(group.failures.is_empty());
    }

    #[test]
    fn missing_directory_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_run_group(&tmp.path().join("gone"), DEFAULT_BUDGET).unwrap_err();
        assert!(matches!(err, PipelineError::NotFound { .. }));
    }

    proptest! {
        #[test]
        fn padding_reaches_budget_and_keeps_prefix(
            values in prop::collection::vec(-100.0f64..100.0, 0..30),
            budget in 0usize..25,
        ) {
            let padded = pad_to_budget(values.clone(), budget);
            prop_assert_eq!(padded.len(), values.len().max(budget));
            prop_assert_eq!(&padded[..values.len()], &values[..]);
            let fill = values.last().copied().unwrap_or(0.0);
            prop_assert!(padded[values.len()..].iter().all(|&v| v == fill));
        }
    }
}
