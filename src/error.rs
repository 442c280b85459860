//! Error types for loading configuration and statistics files

/// Errors that can occur during parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// YAML deserialization error
    #[error("Invalid YAML: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io {
            path: String::new(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = ParseError::Io {
            path: "missing.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read 'missing.yaml': gone");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml::from_str::<Vec<u32>>("[1, two").unwrap_err();
        let err: ParseError = yaml_err.into();
        assert!(err.to_string().starts_with("Invalid YAML"));
    }
}
