//! Root PMML document

use serde::{Deserialize, Serialize};
use super::field::{DataField, DerivedField};
use super::model::Model;

/// PMML schema version written into every document
pub const PMML_VERSION: &str = "4.4";

/// Producer of the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub application: Application,
}

/// Declared input and target fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDictionary {
    pub data_fields: Vec<DataField>,
}

impl DataDictionary {
    pub fn get(&self, name: &str) -> Option<&DataField> {
        self.data_fields.iter().find(|f| f.name.as_str() == name)
    }
}

/// Document-level derived fields shared by all models
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationDictionary {
    pub derived_fields: Vec<DerivedField>,
}

impl TransformationDictionary {
    pub fn get(&self, name: &str) -> Option<&DerivedField> {
        self.derived_fields.iter().find(|f| f.name.as_str() == name)
    }
}

/// A complete PMML document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pmml {
    pub version: String,
    pub header: Header,
    pub data_dictionary: DataDictionary,
    #[serde(default)]
    pub transformation_dictionary: TransformationDictionary,
    pub models: Vec<Model>,
}

impl Pmml {
    /// The top-level model (the one a consumer scores)
    pub fn model(&self) -> Option<&Model> {
        self.models.first()
    }

    pub fn model_mut(&mut self) -> Option<&mut Model> {
        self.models.first_mut()
    }
}
