use super::error::PipelineError;
use super::model::AggregateCurve;

/// Percentile drawn as the pessimistic band of each group.
pub const LOWER_PERCENTILE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Aggregation across runs
// ---------------------------------------------------------------------------

/// Aggregate the runs of one group into per-step statistics of their
/// running maxima.
///
/// Only runs as long as the longest run are kept; shorter ones are counted
/// in [`AggregateCurve::discarded`]. `group` only labels the error returned
/// for an empty input.
pub fn aggregate<'a, I>(group: &str, runs: I) -> Result<AggregateCurve, PipelineError>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let runs: Vec<&[f64]> = runs.into_iter().collect();
    let max_len = runs
        .iter()
        .map(|r| r.len())
        .max()
        .ok_or_else(|| PipelineError::EmptyGroup {
            group: group.to_string(),
        })?;

    let cumulative: Vec<Vec<f64>> = runs
        .iter()
        .filter(|r| r.len() == max_len)
        .map(|r| running_max(r))
        .collect();
    let discarded = runs.len() - cumulative.len();

    let mut mean = Vec::with_capacity(max_len);
    let mut p10 = Vec::with_capacity(max_len);
    let mut std_dev = Vec::with_capacity(max_len);
    let mut column = Vec::with_capacity(cumulative.len());

    for step in 0..max_len {
        column.clear();
        column.extend(cumulative.iter().map(|run| run[step]));

        let (m, sd) = mean_and_std(&column);
        column.sort_by(f64::total_cmp);

        mean.push(m);
        std_dev.push(sd);
        p10.push(percentile_sorted(&column, LOWER_PERCENTILE));
    }

    Ok(AggregateCurve {
        mean,
        p10,
        std_dev,
        runs: cumulative.len(),
        discarded,
    })
}

/// Best value seen so far at each step.
pub fn running_max(values: &[f64]) -> Vec<f64> {
    let mut best = f64::NEG_INFINITY;
    values
        .iter()
        .map(|&v| {
            best = best.max(v);
            best
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Statistics helpers
// ---------------------------------------------------------------------------

/// Arithmetic mean and population standard deviation.
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Percentile `p` (0–100) of an ascending slice, interpolating linearly
/// between the two nearest order statistics.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}
