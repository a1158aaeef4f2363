//! One plot request: load → aggregate → render, degrading per group.

use std::path::Path;

use crate::chart::{render_chart, Chart};
use crate::config::PlotConfig;
use crate::data::aggregate::aggregate;
use crate::data::error::PipelineError;
use crate::data::loader::load_run_group;
use crate::data::model::GroupCurve;

/// Everything a front-end needs to show after a successful request.
#[derive(Debug, Clone)]
pub struct PlotOutcome {
    pub chart: Chart,
    pub curves: Vec<GroupCurve>,
    /// Skipped files, skipped groups and discarded runs, in request order.
    pub warnings: Vec<String>,
}

/// Plot the selected run groups found under `base`.
///
/// A selected directory that does not exist aborts the request. Unparseable
/// files and groups without usable runs are skipped with a warning; if no
/// group is left the request fails with [`PipelineError::AllGroupsEmpty`],
/// which carries the warnings explaining why.
pub fn plot_results<S: AsRef<str>>(
    base: &Path,
    selected: &[S],
    config: &PlotConfig,
) -> Result<PlotOutcome, PipelineError> {
    if selected.is_empty() {
        return Err(PipelineError::NoSelection);
    }

    let mut curves = Vec::with_capacity(selected.len());
    let mut warnings = Vec::new();

    for group in selected {
        let group = group.as_ref();
        let loaded = load_run_group(&base.join(group), config.budget)?;

        for failure in &loaded.failures {
            warnings.push(format!(
                "{group}: skipped {}: {}",
                failure.file, failure.reason
            ));
        }

        if loaded.is_empty() {
            let e = PipelineError::EmptyGroup {
                group: group.to_string(),
            };
            log::warn!("{e}, skipping");
            warnings.push(format!("{e}, skipped"));
            continue;
        }
        log::debug!(
            "{group}: {} run(s) loaded, {} file(s) skipped",
            loaded.len(),
            loaded.failures.len()
        );

        let curve = aggregate(group, loaded.runs.values().map(Vec::as_slice))?;

        if curve.discarded > 0 {
            log::warn!(
                "{group}: discarded {} of {} runs whose length differs from the longest ({} cycles)",
                curve.discarded,
                curve.discarded + curve.runs,
                curve.len()
            );
            warnings.push(format!(
                "{group}: discarded {} run(s) shorter than {} cycles",
                curve.discarded,
                curve.len()
            ));
        }

        curves.push(GroupCurve {
            group: group.to_string(),
            curve,
        });
    }

    if curves.is_empty() {
        return Err(PipelineError::AllGroupsEmpty { warnings });
    }

    log::info!(
        "Plotted {} run group(s) from {}",
        curves.len(),
        base.display()
    );

    Ok(PlotOutcome {
        chart: render_chart(&curves, config.desired_target),
        curves,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Series;

    fn write_run(dir: &Path, name: &str, values: &[f64]) {
        let mut writer = csv::Writer::from_path(dir.join(name)).unwrap();
        writer.write_record(["Cycle", "Compressive Strength"]).unwrap();
        for (i, v) in values.iter().enumerate() {
            writer
                .write_record([(i + 1).to_string(), v.to_string()])
                .unwrap();
        }
        writer.flush().unwrap();
    }

    fn two_group_base() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("A");
        let b = tmp.path().join("B");
        std::fs::create_dir_all(&a).unwrap();
        std::fs::create_dir_all(&b).unwrap();

        let rising: Vec<f64> = (1..=10).map(f64::from).collect();
        for name in ["run_1.csv", "run_2.csv", "run_3.csv"] {
            write_run(&a, name, &rising);
        }
        write_run(&b, "run_1.csv", &[5.0; 10]);
        tmp
    }

    #[test]
    fn end_to_end_two_groups() {
        let tmp = two_group_base();

        let outcome = plot_results(tmp.path(), &["A", "B"], &PlotConfig::default()).unwrap();

        let a = &outcome.curves[0];
        assert_eq!(a.group, "A");
        assert_eq!(a.curve.runs, 3);
        assert_eq!(a.curve.mean, (1..=10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(a.curve.std_dev, vec![0.0; 10]);

        let b = &outcome.curves[1];
        assert_eq!(b.group, "B");
        assert_eq!(b.curve.runs, 1);
        assert_eq!(b.curve.mean, vec![5.0; 10]);
        assert_eq!(b.curve.std_dev, vec![0.0; 10]);

        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.chart.series.len(), 7);
        assert_eq!(outcome.chart.series[0].label(), "A, Runs = 3");
    }

    #[test]
    fn empty_group_is_skipped_among_valid_ones() {
        let tmp = two_group_base();
        std::fs::create_dir(tmp.path().join("empty")).unwrap();

        let outcome =
            plot_results(tmp.path(), &["A", "empty", "B"], &PlotConfig::default()).unwrap();

        let groups: Vec<&str> = outcome.curves.iter().map(|c| c.group.as_str()).collect();
        assert_eq!(groups, vec!["A", "B"]);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("empty"));
    }

    #[test]
    fn all_groups_empty_fails() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("empty")).unwrap();

        let err = plot_results(tmp.path(), &["empty"], &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::AllGroupsEmpty { .. }));
    }

    #[test]
    fn all_groups_empty_keeps_file_reasons() {
        let tmp = tempfile::tempdir().unwrap();
        let g = tmp.path().join("broken");
        std::fs::create_dir(&g).unwrap();
        std::fs::write(g.join("run_1.csv"), "Compressive Strength\n1\nNaN\n").unwrap();

        match plot_results(tmp.path(), &["broken"], &PlotConfig::default()) {
            Err(PipelineError::AllGroupsEmpty { warnings }) => {
                assert_eq!(warnings.len(), 2);
                assert!(warnings[0].contains("run_1.csv"));
                assert!(warnings[0].contains("NaN"));
                assert!(warnings[1].contains("no usable runs"));
            }
            other => panic!("expected AllGroupsEmpty, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_run_is_skipped_and_curve_stays_finite() {
        let tmp = two_group_base();
        std::fs::write(
            tmp.path().join("A").join("run_nan.csv"),
            "Compressive Strength\nNaN\n5\n6\n",
        )
        .unwrap();

        let outcome = plot_results(tmp.path(), &["A"], &PlotConfig::default()).unwrap();

        let curve = &outcome.curves[0].curve;
        assert_eq!(curve.runs, 3);
        assert!(curve
            .mean
            .iter()
            .chain(&curve.p10)
            .chain(&curve.std_dev)
            .all(|v| v.is_finite()));
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("run_nan.csv"));
    }

    #[test]
    fn no_selection_is_rejected() {
        let none: [&str; 0] = [];
        let err = plot_results(Path::new("nowhere"), &none, &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::NoSelection));
        assert_eq!(err.to_string(), "Please select at least one directory.");
    }

    #[test]
    fn missing_group_directory_is_not_found() {
        let tmp = two_group_base();
        let err = plot_results(tmp.path(), &["A", "Z"], &PlotConfig::default()).unwrap_err();
        assert!(matches!(err, PipelineError::NotFound { .. }));
    }

    #[test]
    fn bad_file_and_long_run_are_reported() {
        let tmp = two_group_base();
        let a = tmp.path().join("A");
        std::fs::write(a.join("broken.csv"), "Other\n1\n").unwrap();
        write_run(&a, "run_long.csv", &[1.0; 12]);

        let outcome = plot_results(tmp.path(), &["A"], &PlotConfig::default()).unwrap();

        let curve = &outcome.curves[0].curve;
        assert_eq!(curve.len(), 12);
        assert_eq!(curve.runs, 1);
        assert_eq!(curve.discarded, 3);
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome.warnings[0].contains("broken.csv"));
        assert!(outcome.warnings[1].contains("discarded 3"));
    }

    #[test]
    fn short_runs_are_padded_to_budget() {
        let tmp = tempfile::tempdir().unwrap();
        let g = tmp.path().join("short");
        std::fs::create_dir(&g).unwrap();
        write_run(&g, "run.csv", &[2.0, 7.0, 3.0]);

        let config = PlotConfig {
            budget: 5,
            ..PlotConfig::default()
        };
        let outcome = plot_results(tmp.path(), &["short"], &config).unwrap();

        assert_eq!(outcome.curves[0].curve.mean, vec![2.0, 7.0, 7.0, 7.0, 7.0]);
        let Some(Series::HLine { y, .. }) = outcome.chart.series.last() else {
            panic!("target line must be last");
        };
        assert_eq!(*y, config.desired_target);
    }
}
