//! Model types

use serde::{Deserialize, Serialize};
use super::field::FieldName;
use super::stats::ModelStats;
use super::types::{DataType, OpType};

/// What kind of prediction a model makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MiningFunction {
    Regression,
    Classification,
}

/// How a model uses a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UsageType {
    #[default]
    Active,
    Target,
    Supplementary,
}

/// A field as seen by one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningField {
    pub name: FieldName,
    #[serde(default)]
    pub usage_type: UsageType,
}

impl MiningField {
    pub fn active(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            usage_type: UsageType::Active,
        }
    }

    pub fn target(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            usage_type: UsageType::Target,
        }
    }
}

/// The fields a model reads
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiningSchema {
    pub mining_fields: Vec<MiningField>,
}

impl MiningSchema {
    pub fn new(mining_fields: Vec<MiningField>) -> Self {
        Self { mining_fields }
    }

    pub fn contains(&self, name: &FieldName) -> bool {
        self.mining_fields.iter().any(|f| &f.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.mining_fields.is_empty()
    }
}

/// What an output field reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultFeature {
    #[default]
    PredictedValue,
    Probability,
    TransformedValue,
}

/// A value a model makes available to later models in a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputField {
    pub name: FieldName,
    pub op_type: OpType,
    pub data_type: DataType,
    #[serde(default)]
    pub result_feature: ResultFeature,
}

impl OutputField {
    pub fn new(name: impl Into<FieldName>, op_type: OpType, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            op_type,
            data_type,
            result_feature: ResultFeature::PredictedValue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub output_fields: Vec<OutputField>,
}

/// A single numeric predictor term: coefficient * field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericPredictor {
    pub name: FieldName,
    pub coefficient: f64,
}

/// Linear regression equation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionTable {
    pub intercept: f64,
    pub numeric_predictors: Vec<NumericPredictor>,
}

/// How segment results are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultipleModelMethod {
    /// Segments run in order, each seeing the outputs of the ones before it
    ModelChain,
    Sum,
    Average,
    MajorityVote,
    SelectFirst,
}

/// Segment guard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Predicate {
    True,
    False,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub predicate: Predicate,
    pub model: Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segmentation {
    pub multiple_model_method: MultipleModelMethod,
    pub segments: Vec<Segment>,
}

/// Model body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    /// Linear regression
    Regression(RegressionTable),
    /// Ensemble or chain of nested models
    Mining(Segmentation),
}

/// A predictive model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    pub mining_function: MiningFunction,
    pub mining_schema: MiningSchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_stats: Option<ModelStats>,
    pub kind: ModelKind,
}

impl Model {
    pub fn new(mining_function: MiningFunction, mining_schema: MiningSchema, kind: ModelKind) -> Self {
        Self {
            model_name: None,
            mining_function,
            mining_schema,
            output: None,
            model_stats: None,
            kind,
        }
    }

    /// Create a regression model
    pub fn regression(mining_schema: MiningSchema, table: RegressionTable) -> Self {
        Self::new(MiningFunction::Regression, mining_schema, ModelKind::Regression(table))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    pub fn with_output(mut self, output_fields: Vec<OutputField>) -> Self {
        self.output = Some(Output { output_fields });
        self
    }

    /// Names of the fields this model exposes through its output
    pub fn output_field_names(&self) -> Vec<&FieldName> {
        self.output
            .as_ref()
            .map(|o| o.output_fields.iter().map(|f| &f.name).collect())
            .unwrap_or_default()
    }

    /// Get the segmentation of a mining model
    pub fn segmentation(&self) -> Option<&Segmentation> {
        match &self.kind {
            ModelKind::Mining(segmentation) => Some(segmentation),
            ModelKind::Regression(_) => None,
        }
    }

    /// Is this a mining model chaining its segments?
    pub fn is_model_chain(&self) -> bool {
        self.segmentation()
            .map(|s| s.multiple_model_method == MultipleModelMethod::ModelChain)
            .unwrap_or(false)
    }

    /// Get the statistics container, creating it if absent
    pub fn model_stats_mut(&mut self) -> &mut ModelStats {
        self.model_stats.get_or_insert_with(ModelStats::new)
    }
}
