//! PMML document model (noun module)
//!
//! The subset of the PMML object model the encoder produces.

mod document;
mod expr;
mod field;
mod model;
mod stats;
mod types;

pub use document::{Application, DataDictionary, Header, Pmml, TransformationDictionary, PMML_VERSION};
pub use expr::{Constant, Expression, LinearNorm};
pub use field::{DataField, DerivedField, FieldName};
pub use model::{
    MiningField, MiningFunction, MiningSchema, Model, ModelKind, MultipleModelMethod,
    NumericPredictor, Output, OutputField, Predicate, RegressionTable, ResultFeature, Segment,
    Segmentation, UsageType,
};
pub use stats::{Counts, DiscrStats, ModelStats, NumericInfo, UnivariateStats};
pub use types::{DataType, OpType, ParseTypeError};
