//! Integration tests for stats computed from column values
//!
//! Builders feed the encoder the same way fixture records do.

mod common;

use common::{attached_stats, linear_model};
use skpmml::stats::{categorical_stats, continuous_stats};
use skpmml::{emit_json, DataType, DocumentEncoder, OpType, SkLearnEncoder};

#[test]
fn test_computed_stats_reach_document() {
    let mut encoder = SkLearnEncoder::new();
    encoder.create_data_field("income").unwrap();
    encoder
        .base_mut()
        .create_data_field("region", OpType::Categorical, DataType::String)
        .unwrap();

    encoder.put_univariate_stats(continuous_stats("income", &[30_000.0, f64::NAN, 52_000.0, 41_000.0]));
    encoder.put_univariate_stats(categorical_stats("region", &[Some("north"), Some("south"), Some("north")]));

    let pmml = encoder.encode_pmml(linear_model("final", &["income"], None)).unwrap();
    assert_eq!(attached_stats(&pmml), vec!["income", "region"]);

    let json: serde_json::Value = serde_json::from_str(&emit_json(&pmml).unwrap()).unwrap();
    let stats = &json["models"][0]["modelStats"]["univariateStats"];
    assert_eq!(stats[0]["counts"]["missingFreq"], 1.0);
    assert_eq!(stats[0]["numericInfo"]["maximum"], 52_000.0);
    assert_eq!(stats[1]["discrStats"]["counts"][0], 2);
}

#[test]
fn test_later_stats_replace_earlier() {
    let mut encoder = SkLearnEncoder::new();
    encoder.create_data_field("x").unwrap();
    encoder.put_univariate_stats(continuous_stats("x", &[1.0, 2.0]));
    encoder.put_univariate_stats(continuous_stats("x", &[10.0, 20.0, 30.0]));

    let pmml = encoder.encode_pmml(linear_model("final", &["x"], None)).unwrap();
    let stats = pmml.model().unwrap().model_stats.as_ref().unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats.get("x").unwrap().counts.as_ref().unwrap().total_freq, 3.0);
}
