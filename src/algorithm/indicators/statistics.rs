//! Grouping and descriptive statistics
//!
//! Aggregations return `BTreeMap`s so group order is stable across runs.

use std::collections::BTreeMap;
use std::hash::Hash;

use itertools::Itertools;

/// Arithmetic mean, `0.0` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Quantile of sorted values with linear interpolation between ranks
///
/// `q` is clamped to `[0, 1]`. Returns `NaN` for an empty slice.
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Summary of a numeric column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); `0.0` for a single value
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl DescriptiveStats {
    /// Describe a set of values, `None` when empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let sorted = values
            .iter()
            .copied()
            .sorted_by(f64::total_cmp)
            .collect_vec();
        let count = sorted.len();
        let mean = mean(&sorted);
        let std = if count > 1 {
            let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Mean of `value` per group
pub fn group_mean<T, K, KF, VF>(rows: &[T], key: KF, value: VF) -> BTreeMap<K, f64>
where
    K: Ord + Hash + Eq,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    rows.iter()
        .into_group_map_by(|row| key(*row))
        .into_iter()
        .map(|(k, members)| {
            let values = members.iter().map(|row| value(*row)).collect_vec();
            (k, mean(&values))
        })
        .collect()
}

/// Sum of `value` per group
pub fn group_sum<T, K, KF, VF>(rows: &[T], key: KF, value: VF) -> BTreeMap<K, i64>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> i64,
{
    let mut sums = BTreeMap::new();
    for row in rows {
        *sums.entry(key(row)).or_insert(0) += value(row);
    }
    sums
}

/// Row count per group
pub fn group_count<T, K, KF>(rows: &[T], key: KF) -> BTreeMap<K, usize>
where
    K: Ord,
    KF: Fn(&T) -> K,
{
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(key(row)).or_insert(0) += 1;
    }
    counts
}

/// Descriptive statistics of `value` per group
pub fn group_describe<T, K, KF, VF>(rows: &[T], key: KF, value: VF) -> BTreeMap<K, DescriptiveStats>
where
    K: Ord + Hash + Eq,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> f64,
{
    rows.iter()
        .into_group_map_by(|row| key(*row))
        .into_iter()
        .filter_map(|(k, members)| {
            let values = members.iter().map(|row| value(*row)).collect_vec();
            DescriptiveStats::from_values(&values).map(|stats| (k, stats))
        })
        .collect()
}

/// Share of each group in the total, between 0 and 1
#[must_use]
pub fn proportions<K: Ord + Clone>(counts: &BTreeMap<K, usize>) -> BTreeMap<K, f64> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(k, count)| (k.clone(), *count as f64 / total as f64))
        .collect()
}
