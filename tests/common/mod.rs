//! Shared test utilities for integration tests

#![allow(dead_code)]

use skpmml::pmml::{
    MiningField, MiningSchema, NumericPredictor, OutputField, RegressionTable,
};
use skpmml::{parser, DataType, EncoderConfig, FieldName, Model, OpType, SkLearnEncoder, UnivariateStats};

/// Input columns of the iris fixture, in declaration order
pub const IRIS_FEATURES: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// Load stats records from the tests/test_data directory
pub fn load_stats(name: &str) -> Vec<UnivariateStats> {
    let path = format!("tests/test_data/{}", name);
    parser::parse_stats_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load an encoder configuration from the tests/test_data directory
pub fn load_config(name: &str) -> EncoderConfig {
    let path = format!("tests/test_data/{}", name);
    parser::parse_config_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Encoder with the iris inputs and target declared, and all fixture stats registered
pub fn iris_encoder(config: EncoderConfig) -> SkLearnEncoder {
    let mut encoder = SkLearnEncoder::with_config(config);
    for name in IRIS_FEATURES {
        encoder.create_data_field(name).unwrap();
    }
    encoder
        .base_mut()
        .create_data_field("species", OpType::Categorical, DataType::String)
        .unwrap();

    for stats in load_stats("iris_stats.yaml") {
        encoder.put_univariate_stats(stats);
    }
    encoder
}

/// Linear model over `inputs`, optionally publishing its prediction as `output`
pub fn linear_model(name: &str, inputs: &[&str], output: Option<&str>) -> Model {
    let mining_fields = inputs.iter().map(|input| MiningField::active(*input)).collect();
    let table = RegressionTable {
        intercept: 0.5,
        numeric_predictors: inputs
            .iter()
            .map(|input| NumericPredictor {
                name: FieldName::from(*input),
                coefficient: 1.0,
            })
            .collect(),
    };

    let model = Model::regression(MiningSchema::new(mining_fields), table).with_name(name);
    match output {
        Some(output) => model.with_output(vec![OutputField::new(output, OpType::Continuous, DataType::Double)]),
        None => model,
    }
}

/// Field names of the stats attached to a document's model, in order
pub fn attached_stats(pmml: &skpmml::Pmml) -> Vec<String> {
    pmml.model()
        .and_then(|m| m.model_stats.as_ref())
        .map(|s| s.univariate_stats.iter().map(|u| u.field.to_string()).collect())
        .unwrap_or_default()
}
