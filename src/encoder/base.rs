//! Base document encoder: field registries and document assembly

use indexmap::IndexMap;
use tracing::trace;
use crate::config::EncoderConfig;
use crate::pmml::{
    DataDictionary, DataField, DataType, DerivedField, Expression, FieldName, Header, Model,
    OpType, Pmml, TransformationDictionary, PMML_VERSION,
};
use super::error::EncodeError;

/// Turns a finished model into a PMML document
pub trait DocumentEncoder {
    fn encode_pmml(&self, model: Model) -> Result<Pmml, EncodeError>;
}

/// Holds the data and derived fields declared during a conversion.
///
/// Names are unique across both registries. Both keep insertion order,
/// which is the order fields appear in the produced document.
#[derive(Debug, Clone, Default)]
pub struct ModelEncoder {
    config: EncoderConfig,
    data_fields: IndexMap<FieldName, DataField>,
    derived_fields: IndexMap<FieldName, DerivedField>,
}

impl ModelEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Is the name taken by either a data field or a derived field?
    pub fn has_field(&self, name: &FieldName) -> bool {
        self.data_fields.contains_key(name) || self.derived_fields.contains_key(name)
    }

    fn check_name(&self, name: &FieldName) -> Result<(), EncodeError> {
        if self.has_field(name) {
            return Err(EncodeError::DuplicateField(name.clone()));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Data fields
    // ------------------------------------------------------------------

    pub fn add_data_field(&mut self, field: DataField) -> Result<&DataField, EncodeError> {
        self.check_name(&field.name)?;
        trace!(field = %field.name, op_type = %field.op_type, data_type = %field.data_type, "declaring data field");
        let entry = self.data_fields.entry(field.name.clone()).or_insert(field);
        Ok(&*entry)
    }

    pub fn create_data_field(
        &mut self,
        name: impl Into<FieldName>,
        op_type: OpType,
        data_type: DataType,
    ) -> Result<&DataField, EncodeError> {
        self.add_data_field(DataField::new(name, op_type, data_type))
    }

    pub fn get_data_field(&self, name: &FieldName) -> Option<&DataField> {
        self.data_fields.get(name)
    }

    pub fn get_data_field_mut(&mut self, name: &FieldName) -> Option<&mut DataField> {
        self.data_fields.get_mut(name)
    }

    pub fn data_fields(&self) -> impl Iterator<Item = &DataField> {
        self.data_fields.values()
    }

    // ------------------------------------------------------------------
    // Derived fields
    // ------------------------------------------------------------------

    pub fn add_derived_field(&mut self, field: DerivedField) -> Result<&DerivedField, EncodeError> {
        self.check_name(&field.name)?;
        trace!(field = %field.name, "declaring derived field");
        let entry = self.derived_fields.entry(field.name.clone()).or_insert(field);
        Ok(&*entry)
    }

    pub fn create_derived_field(
        &mut self,
        name: impl Into<FieldName>,
        op_type: OpType,
        data_type: DataType,
        expression: Expression,
    ) -> Result<&DerivedField, EncodeError> {
        self.add_derived_field(DerivedField::new(name, op_type, data_type, expression))
    }

    pub fn get_derived_field(&self, name: &FieldName) -> Option<&DerivedField> {
        self.derived_fields.get(name)
    }

    pub fn get_derived_field_mut(&mut self, name: &FieldName) -> Option<&mut DerivedField> {
        self.derived_fields.get_mut(name)
    }

    /// Unregister a derived field, keeping the order of the others
    pub fn remove_derived_field(&mut self, name: &FieldName) -> Option<DerivedField> {
        self.derived_fields.shift_remove(name)
    }

    pub fn derived_fields(&self) -> impl Iterator<Item = &DerivedField> {
        self.derived_fields.values()
    }
}

impl DocumentEncoder for ModelEncoder {
    fn encode_pmml(&self, model: Model) -> Result<Pmml, EncodeError> {
        Ok(Pmml {
            version: PMML_VERSION.to_string(),
            header: Header {
                application: self.config.application.clone(),
            },
            data_dictionary: DataDictionary {
                data_fields: self.data_fields.values().cloned().collect(),
            },
            transformation_dictionary: TransformationDictionary {
                derived_fields: self.derived_fields.values().cloned().collect(),
            },
            models: vec![model],
        })
    }
}
