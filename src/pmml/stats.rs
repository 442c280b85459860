//! Model statistics

use serde::{Deserialize, Serialize};
use super::field::FieldName;

/// Frequency counts for a single field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub total_freq: f64,
    #[serde(default)]
    pub missing_freq: f64,
    #[serde(default)]
    pub invalid_freq: f64,
}

/// Summary of a continuous field's distribution
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericInfo {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub mean: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub median: Option<f64>,
    pub interquartile_range: Option<f64>,
}

/// Value frequencies of a categorical field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscrStats {
    pub values: Vec<String>,
    pub counts: Vec<u64>,
}

/// Descriptive statistics for one field in isolation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnivariateStats {
    pub field: FieldName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<Counts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_info: Option<NumericInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discr_stats: Option<DiscrStats>,
}

impl UnivariateStats {
    pub fn new(field: impl Into<FieldName>) -> Self {
        Self {
            field: field.into(),
            counts: None,
            numeric_info: None,
            discr_stats: None,
        }
    }

    pub fn with_counts(mut self, counts: Counts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_numeric_info(mut self, numeric_info: NumericInfo) -> Self {
        self.numeric_info = Some(numeric_info);
        self
    }

    pub fn with_discr_stats(mut self, discr_stats: DiscrStats) -> Self {
        self.discr_stats = Some(discr_stats);
        self
    }
}

/// Statistics container of a model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStats {
    pub univariate_stats: Vec<UnivariateStats>,
}

impl ModelStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_univariate_stats(&mut self, stats: UnivariateStats) {
        self.univariate_stats.push(stats);
    }

    /// Get the stats recorded for a field
    pub fn get(&self, field: &str) -> Option<&UnivariateStats> {
        self.univariate_stats.iter().find(|s| s.field.as_str() == field)
    }

    pub fn len(&self) -> usize {
        self.univariate_stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.univariate_stats.is_empty()
    }
}
