//! Encoder configuration

use serde::{Deserialize, Serialize};
use crate::parallel::Parallelism;
use crate::pmml::Application;

/// Default minimum data dictionary size for the parallel stats scan
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Settings shared by one conversion
///
/// Every key is optional in YAML:
///
/// ```yaml
/// application:
///   name: my-converter
///   version: "1.2.0"
/// parallelism: parallel
/// parallel_threshold: 16
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Written into the document header
    pub application: Application,
    /// How the stats scan in `encode_pmml` runs
    pub parallelism: Parallelism,
    pub parallel_threshold: usize,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            application: Application::default(),
            parallelism: Parallelism::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EncoderConfig {
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
