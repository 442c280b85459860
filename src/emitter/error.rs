//! Emitter errors

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// JSON serialization failed
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML serialization failed
    #[error("Failed to write YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
