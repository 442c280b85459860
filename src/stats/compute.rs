//! Univariate statistics from observed column values

use indexmap::IndexMap;
use crate::pmml::{Counts, DiscrStats, FieldName, NumericInfo, UnivariateStats};

/// Stats for a continuous column. NaN values count as missing.
pub fn continuous_stats(name: impl Into<FieldName>, values: &[f64]) -> UnivariateStats {
    let mut valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let missing = values.len() - valid.len();

    let counts = Counts {
        total_freq: values.len() as f64,
        missing_freq: missing as f64,
        invalid_freq: 0.0,
    };

    let stats = UnivariateStats::new(name).with_counts(counts);
    if valid.is_empty() {
        return stats;
    }

    valid.sort_by(|a, b| a.total_cmp(b));

    let n = valid.len() as f64;
    let mean = valid.iter().sum::<f64>() / n;
    let variance = valid.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

    stats.with_numeric_info(NumericInfo {
        minimum: valid.first().copied(),
        maximum: valid.last().copied(),
        mean: Some(mean),
        standard_deviation: Some(variance.sqrt()),
        median: Some(quantile(&valid, 0.5)),
        interquartile_range: Some(quantile(&valid, 0.75) - quantile(&valid, 0.25)),
    })
}

/// Stats for a categorical column. `None` values count as missing.
///
/// Distinct values are listed in first-seen order.
pub fn categorical_stats(name: impl Into<FieldName>, values: &[Option<&str>]) -> UnivariateStats {
    let mut frequencies: IndexMap<&str, u64> = IndexMap::new();
    let mut missing = 0usize;

    for value in values {
        match value {
            Some(v) => *frequencies.entry(*v).or_insert(0) += 1,
            None => missing += 1,
        }
    }

    let counts = Counts {
        total_freq: values.len() as f64,
        missing_freq: missing as f64,
        invalid_freq: 0.0,
    };

    UnivariateStats::new(name).with_counts(counts).with_discr_stats(DiscrStats {
        values: frequencies.keys().map(|v| v.to_string()).collect(),
        counts: frequencies.values().copied().collect(),
    })
}

/// Linear-interpolation quantile of sorted, non-empty data
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_continuous_stats() {
        let stats = continuous_stats("x", &[4.0, 1.0, f64::NAN, 3.0, 2.0]);
        let counts = stats.counts.as_ref().unwrap();
        assert_eq!(counts.total_freq, 5.0);
        assert_eq!(counts.missing_freq, 1.0);

        let info = stats.numeric_info.as_ref().unwrap();
        assert_eq!(info.minimum, Some(1.0));
        assert_eq!(info.maximum, Some(4.0));
        assert!(approx_eq(info.mean.unwrap(), 2.5));
        assert!(approx_eq(info.standard_deviation.unwrap(), 1.25f64.sqrt()));
        assert!(approx_eq(info.median.unwrap(), 2.5));
        // q1 = 1.75, q3 = 3.25
        assert!(approx_eq(info.interquartile_range.unwrap(), 1.5));
    }

    #[test]
    fn test_continuous_all_missing() {
        let stats = continuous_stats("x", &[f64::NAN, f64::NAN]);
        assert_eq!(stats.counts.as_ref().unwrap().missing_freq, 2.0);
        assert!(stats.numeric_info.is_none());
    }

    #[test]
    fn test_categorical_stats() {
        let stats = categorical_stats("color", &[Some("red"), Some("blue"), None, Some("red")]);
        let counts = stats.counts.as_ref().unwrap();
        assert_eq!(counts.total_freq, 4.0);
        assert_eq!(counts.missing_freq, 1.0);

        let discr = stats.discr_stats.as_ref().unwrap();
        assert_eq!(discr.values, vec!["red", "blue"]);
        assert_eq!(discr.counts, vec![2, 1]);
        assert!(stats.numeric_info.is_none());
    }
}
