//! skpmml - Encode fitted scikit-learn pipelines as PMML documents
//!
//! Step converters walk a fitted pipeline and record what they find on a
//! [`SkLearnEncoder`]: input fields, derived fields, precursor models and
//! per-field statistics. Once the final estimator is converted,
//! [`DocumentEncoder::encode_pmml`] assembles the PMML document.
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `pmml/` - PMML document model (Pmml, DataField, DerivedField, Model, ModelStats, ...)
//! - `feature/` - features, schemas and the `Transformer` type capability
//!
//! **Verb modules** (transformations):
//! - `encoder/` - registries + final model → Pmml
//! - `chain/` - models → model chain
//! - `stats/` - column values → UnivariateStats
//! - `parser/` - YAML → EncoderConfig, UnivariateStats
//! - `emitter/` - Pmml → JSON / YAML
//!
//! # Example
//!
//! ```ignore
//! use skpmml::{DocumentEncoder, Feature, SkLearnEncoder, TypeDeclaration, OpType, DataType};
//!
//! let mut encoder = SkLearnEncoder::new();
//! let field = encoder.create_data_field("age")?.clone();
//! let mut features = vec![Feature::wildcard(&field)];
//! encoder.update_features(&mut features, &TypeDeclaration::new(OpType::Continuous, DataType::Integer))?;
//! encoder.put_univariate_stats(skpmml::stats::continuous_stats("age", &ages));
//! let pmml = encoder.encode_pmml(model)?;
//! ```

pub mod chain;
pub mod config;
pub mod emitter;
pub mod encoder;
pub mod error;
pub mod feature;
pub mod parallel;
pub mod parser;
pub mod pmml;
pub mod stats;

// Re-export commonly used types
pub use chain::{create_model_chain, ChainError};
pub use config::EncoderConfig;
pub use emitter::{emit_json, emit_yaml, EmitError};
pub use encoder::{DocumentEncoder, EncodeError, ModelEncoder, SkLearnEncoder};
pub use error::ParseError;
pub use feature::{Feature, FeatureKind, Label, Schema, Transformer, TypeDeclaration};
pub use parallel::Parallelism;
pub use pmml::{
    DataField, DataType, DerivedField, Expression, FieldName, Model, ModelStats, OpType, Pmml,
    UnivariateStats,
};
