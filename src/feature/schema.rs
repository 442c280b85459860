//! Model schema: the label and features a model is built against

use crate::pmml::{DataType, FieldName, MiningField, MiningSchema};
use super::feature::Feature;

/// Target of a supervised model
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub name: FieldName,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub label: Option<Label>,
    pub features: Vec<Feature>,
}

impl Schema {
    pub fn new(label: Option<Label>, features: Vec<Feature>) -> Self {
        Self { label, features }
    }

    /// A schema with no label and no features
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.features.is_empty()
    }

    /// Mining schema declaring the label as target and every feature as active
    pub fn to_mining_schema(&self) -> MiningSchema {
        let mut fields = Vec::with_capacity(self.features.len() + 1);
        if let Some(label) = &self.label {
            fields.push(MiningField::target(label.name.clone()));
        }
        for feature in &self.features {
            if !fields.iter().any(|f: &MiningField| &f.name == feature.name()) {
                fields.push(MiningField::active(feature.name().clone()));
            }
        }
        MiningSchema::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pmml::UsageType;

    #[test]
    fn test_empty_schema() {
        let schema = Schema::empty();
        assert!(schema.is_empty());
        assert!(schema.to_mining_schema().is_empty());
    }

    #[test]
    fn test_mining_schema_target_first() {
        let schema = Schema::new(
            Some(Label {
                name: FieldName::from("y"),
                data_type: DataType::Double,
            }),
            vec![
                Feature::continuous("a", DataType::Double),
                Feature::continuous("b", DataType::Double),
                Feature::continuous("a", DataType::Double),
            ],
        );
        let mining = schema.to_mining_schema();
        assert_eq!(mining.mining_fields.len(), 3);
        assert_eq!(mining.mining_fields[0].usage_type, UsageType::Target);
        assert_eq!(mining.mining_fields[2].name.as_str(), "b");
    }
}
