//! Encoder errors

use crate::chain::ChainError;
use crate::pmml::FieldName;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// No declared or derived field has this name
    #[error("Unknown field '{0}'")]
    UnknownField(FieldName),
    /// The name is already registered
    #[error("Field '{0}' is already defined")]
    DuplicateField(FieldName),
    /// Building the model chain failed
    #[error(transparent)]
    Chain(#[from] ChainError),
    /// Registry state the encoder itself should have prevented
    #[error("Internal encoder error: {0}")]
    Internal(String),
}
