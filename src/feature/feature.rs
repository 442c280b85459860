//! Features: typed references to fields

use crate::pmml::{DataField, DataType, FieldName, OpType};

/// Feature variants
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureKind {
    /// Stands in directly for an input field, no transformation applied
    Wildcard,
    /// Numeric feature
    Continuous,
    /// Feature taking one of a fixed set of values
    Categorical { values: Vec<String> },
}

/// A reference to a field plus its classification
///
/// The name can only be changed from inside the crate, through
/// `SkLearnEncoder::rename_feature`, which keeps the field registry in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: FieldName,
    op_type: OpType,
    data_type: DataType,
    kind: FeatureKind,
}

impl Feature {
    /// A pass-through feature for a declared data field
    pub fn wildcard(field: &DataField) -> Self {
        Self {
            name: field.name.clone(),
            op_type: field.op_type,
            data_type: field.data_type,
            kind: FeatureKind::Wildcard,
        }
    }

    pub fn continuous(name: impl Into<FieldName>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            op_type: OpType::Continuous,
            data_type,
            kind: FeatureKind::Continuous,
        }
    }

    pub fn categorical(name: impl Into<FieldName>, data_type: DataType, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            op_type: OpType::Categorical,
            data_type,
            kind: FeatureKind::Categorical { values },
        }
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn op_type(&self) -> OpType {
        self.op_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn kind(&self) -> &FeatureKind {
        &self.kind
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.kind, FeatureKind::Wildcard)
    }

    pub(crate) fn set_name(&mut self, name: FieldName) {
        self.name = name;
    }

    pub(crate) fn set_types(&mut self, op_type: OpType, data_type: DataType) {
        self.op_type = op_type;
        self.data_type = data_type;
    }
}
