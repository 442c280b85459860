//! PMML document serialization

use crate::pmml::Pmml;
use super::error::EmitError;

/// Serialize a document as pretty-printed JSON
pub fn emit_json(pmml: &Pmml) -> Result<String, EmitError> {
    Ok(serde_json::to_string_pretty(pmml)?)
}

/// Serialize a document as YAML
pub fn emit_yaml(pmml: &Pmml) -> Result<String, EmitError> {
    Ok(serde_yaml::to_string(pmml)?)
}
