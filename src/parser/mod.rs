//! Configuration and statistics parser (verb module)
//!
//! Transforms YAML files into `EncoderConfig` and `UnivariateStats` records.

use std::path::Path;
use crate::config::EncoderConfig;
use crate::error::ParseError;
use crate::pmml::UnivariateStats;

fn read_file<P: AsRef<Path>>(path: P) -> Result<String, ParseError> {
    let path_str = path.as_ref().display().to_string();
    std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })
}

/// Parse encoder configuration from a YAML file
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<EncoderConfig, ParseError> {
    parse_config_str(&read_file(path)?)
}

/// Parse encoder configuration from a YAML string
pub fn parse_config_str(yaml: &str) -> Result<EncoderConfig, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a list of univariate stats records from a YAML file
pub fn parse_stats_file<P: AsRef<Path>>(path: P) -> Result<Vec<UnivariateStats>, ParseError> {
    parse_stats_str(&read_file(path)?)
}

/// Parse a list of univariate stats records from a YAML string
pub fn parse_stats_str(yaml: &str) -> Result<Vec<UnivariateStats>, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}
