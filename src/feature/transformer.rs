//! Type metadata reported by pipeline steps

use serde::{Deserialize, Serialize};
use crate::pmml::{DataType, OpType};

/// A pipeline step that may declare the types of the columns it consumes.
///
/// `None` means the step cannot tell. Callers treat that as "leave the
/// types alone", never as a default.
pub trait Transformer {
    fn op_type(&self) -> Option<OpType>;

    fn data_type(&self) -> Option<DataType>;
}

/// Explicit type declaration, as carried by domain decorators and column mappers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclaration {
    #[serde(default)]
    pub op_type: Option<OpType>,
    #[serde(default)]
    pub data_type: Option<DataType>,
}

impl TypeDeclaration {
    pub fn new(op_type: OpType, data_type: DataType) -> Self {
        Self {
            op_type: Some(op_type),
            data_type: Some(data_type),
        }
    }

    /// A step that declares nothing
    pub fn undeclared() -> Self {
        Self::default()
    }
}

impl Transformer for TypeDeclaration {
    fn op_type(&self) -> Option<OpType> {
        self.op_type
    }

    fn data_type(&self) -> Option<DataType> {
        self.data_type
    }
}
