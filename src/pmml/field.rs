//! Field names and field declarations

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use super::expr::Expression;
use super::types::{DataType, OpType};

/// Case-sensitive identifier of a modeled variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A field declared in the data dictionary (a model input or target)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataField {
    pub name: FieldName,
    pub op_type: OpType,
    pub data_type: DataType,
    /// Valid category values, for categorical and ordinal fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl DataField {
    pub fn new(name: impl Into<FieldName>, op_type: OpType, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            op_type,
            data_type,
            values: Vec::new(),
        }
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}

/// A field computed from other fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedField {
    pub name: FieldName,
    pub op_type: OpType,
    pub data_type: DataType,
    pub expression: Expression,
}

impl DerivedField {
    pub fn new(
        name: impl Into<FieldName>,
        op_type: OpType,
        data_type: DataType,
        expression: Expression,
    ) -> Self {
        Self {
            name: name.into(),
            op_type,
            data_type,
            expression,
        }
    }
}
