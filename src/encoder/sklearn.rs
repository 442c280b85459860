//! Encoder used while converting a scikit-learn pipeline
//!
//! Upstream step converters register fields, precursor models and field
//! statistics here. `encode_pmml` splices all of it into the final document.

use indexmap::IndexMap;
use tracing::{debug, trace};
use crate::chain::create_model_chain;
use crate::config::EncoderConfig;
use crate::feature::{Feature, Schema, Transformer};
use crate::pmml::{
    DataField, DataType, DerivedField, Expression, FieldName, Model, OpType, Pmml,
    UnivariateStats,
};
use super::base::{DocumentEncoder, ModelEncoder};
use super::error::EncodeError;

#[derive(Debug, Clone, Default)]
pub struct SkLearnEncoder {
    base: ModelEncoder,
    /// Models that run before the final model, in registration order
    transformers: Vec<Model>,
    univariate_stats: IndexMap<FieldName, UnivariateStats>,
}

impl SkLearnEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            base: ModelEncoder::with_config(config),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        self.base.config()
    }

    /// The field registries
    pub fn base(&self) -> &ModelEncoder {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ModelEncoder {
        &mut self.base
    }

    pub fn get_data_field(&self, name: &FieldName) -> Option<&DataField> {
        self.base.get_data_field(name)
    }

    pub fn get_derived_field(&self, name: &FieldName) -> Option<&DerivedField> {
        self.base.get_derived_field(name)
    }

    /// Propagate a step's declared types onto the input fields behind its wildcard features.
    ///
    /// Both types must be declared; if the step reports either as unknown
    /// nothing changes. Non-wildcard features are left alone. Every wildcard
    /// feature must name a data field, checked before anything is updated.
    pub fn update_features<T>(&mut self, features: &mut [Feature], transformer: &T) -> Result<(), EncodeError>
    where
        T: Transformer + ?Sized,
    {
        let (Some(op_type), Some(data_type)) = (transformer.op_type(), transformer.data_type()) else {
            debug!("step declares no complete type, skipping type propagation");
            return Ok(());
        };

        if let Some(unknown) = features
            .iter()
            .filter(|f| f.is_wildcard())
            .find(|f| self.base.get_data_field(f.name()).is_none())
        {
            return Err(EncodeError::UnknownField(unknown.name().clone()));
        }

        for feature in features.iter_mut().filter(|f| f.is_wildcard()) {
            self.update_type(feature.name(), op_type, data_type)?;
            feature.set_types(op_type, data_type);
        }

        Ok(())
    }

    /// Overwrite the types of a declared data field
    pub fn update_type(&mut self, name: &FieldName, op_type: OpType, data_type: DataType) -> Result<(), EncodeError> {
        let field = self
            .base
            .get_data_field_mut(name)
            .ok_or_else(|| EncodeError::UnknownField(name.clone()))?;

        trace!(field = %name, %op_type, %data_type, "updating field type");
        field.op_type = op_type;
        field.data_type = data_type;
        Ok(())
    }

    /// Declare a continuous double input field
    pub fn create_data_field(&mut self, name: impl Into<FieldName>) -> Result<&DataField, EncodeError> {
        self.base.create_data_field(name, OpType::Continuous, DataType::Double)
    }

    /// Declare a continuous double derived field
    pub fn create_derived_field(
        &mut self,
        name: impl Into<FieldName>,
        expression: Expression,
    ) -> Result<&DerivedField, EncodeError> {
        self.base.create_derived_field(name, OpType::Continuous, DataType::Double, expression)
    }

    /// Rename a feature backed by a derived field.
    ///
    /// The registry key, the derived field's name and the feature's name
    /// change together. All checks run before anything is touched, so on
    /// error the encoder and the feature are unchanged.
    pub fn rename_feature(&mut self, feature: &mut Feature, new_name: impl Into<FieldName>) -> Result<(), EncodeError> {
        let new_name = new_name.into();
        let old_name = feature.name().clone();

        if self.base.get_derived_field(&old_name).is_none() {
            return Err(EncodeError::UnknownField(old_name));
        }
        if new_name == old_name {
            return Ok(());
        }
        if self.base.has_field(&new_name) {
            return Err(EncodeError::DuplicateField(new_name));
        }

        let mut derived_field = self
            .base
            .remove_derived_field(&old_name)
            .ok_or_else(|| EncodeError::Internal(format!("derived field '{}' vanished during rename", old_name)))?;

        derived_field.name = new_name.clone();
        feature.set_name(new_name);
        self.base.add_derived_field(derived_field)?;

        debug!(from = %old_name, to = %feature.name(), "renamed feature");
        Ok(())
    }

    /// Register a model that runs before the final model
    pub fn add_transformer(&mut self, model: Model) {
        self.transformers.push(model);
    }

    pub fn transformers(&self) -> &[Model] {
        &self.transformers
    }

    pub fn get_univariate_stats(&self, name: &FieldName) -> Option<&UnivariateStats> {
        self.univariate_stats.get(name)
    }

    /// Register stats under the field they describe
    pub fn put_univariate_stats(&mut self, stats: UnivariateStats) {
        let name = stats.field.clone();
        self.put_univariate_stats_for(name, stats);
    }

    /// Register stats under an explicit name, replacing earlier ones
    pub fn put_univariate_stats_for(&mut self, name: impl Into<FieldName>, stats: UnivariateStats) {
        self.univariate_stats.insert(name.into(), stats);
    }

    pub fn univariate_stats(&self) -> impl Iterator<Item = (&FieldName, &UnivariateStats)> {
        self.univariate_stats.iter()
    }
}

impl DocumentEncoder for SkLearnEncoder {
    /// Assemble the document around `model`.
    ///
    /// With precursor models registered, the document holds a chain of the
    /// precursors followed by `model`. Registered stats for every data
    /// dictionary field are attached to the document's model, in dictionary
    /// order.
    fn encode_pmml(&self, model: Model) -> Result<Pmml, EncodeError> {
        let model = if self.transformers.is_empty() {
            model
        } else {
            let mut models = self.transformers.clone();
            models.push(model);

            // The chain derives its own mining schema from the members
            create_model_chain(models, &Schema::empty())?
        };

        let mut pmml = self.base.encode_pmml(model)?;

        let config = self.config();
        let data_fields = &pmml.data_dictionary.data_fields;
        let parallelism = config.parallelism.resolve(data_fields.len(), config.parallel_threshold);

        let attached: Vec<UnivariateStats> = parallelism
            .maybe_par_filter_map(data_fields, |field| self.univariate_stats.get(&field.name).cloned());

        debug!(
            stats = attached.len(),
            fields = data_fields.len(),
            parallel = parallelism.is_parallel(),
            "attaching univariate stats"
        );

        let model_stats = pmml
            .model_mut()
            .ok_or_else(|| EncodeError::Internal("encoded document has no model".to_string()))?
            .model_stats_mut();
        for stats in attached {
            model_stats.add_univariate_stats(stats);
        }

        Ok(pmml)
    }
}
