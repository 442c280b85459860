//! Model chain construction

use std::collections::HashSet;
use tracing::debug;
use crate::feature::Schema;
use crate::pmml::{
    FieldName, MiningField, MiningSchema, Model, ModelKind, MultipleModelMethod, Predicate,
    Segment, Segmentation,
};
use super::error::ChainError;

/// Wrap `models` into a single mining model whose segments run in order.
///
/// The chain predicts what its last member predicts. When `schema` carries
/// a label or features, the chain's mining schema is built from it;
/// otherwise it is derived from the members (see [`derive_mining_schema`]).
pub fn create_model_chain(models: Vec<Model>, schema: &Schema) -> Result<Model, ChainError> {
    let last = models.last().ok_or(ChainError::EmptyChain)?;
    let mining_function = last.mining_function;

    let mining_schema = if schema.is_empty() {
        derive_mining_schema(&models)
    } else {
        schema.to_mining_schema()
    };

    let segments: Vec<Segment> = models
        .into_iter()
        .enumerate()
        .map(|(i, model)| Segment {
            id: (i + 1).to_string(),
            predicate: Predicate::True,
            model,
        })
        .collect();

    debug!(segments = segments.len(), fields = mining_schema.mining_fields.len(), "built model chain");

    Ok(Model::new(
        mining_function,
        mining_schema,
        ModelKind::Mining(Segmentation {
            multiple_model_method: MultipleModelMethod::ModelChain,
            segments,
        }),
    ))
}

/// Collect the fields a chain reads from outside.
///
/// Walks the members in order and keeps each mining field once. Fields that
/// an earlier member publishes as an output field are produced inside the
/// chain and are skipped.
pub fn derive_mining_schema(models: &[Model]) -> MiningSchema {
    let mut produced: HashSet<&FieldName> = HashSet::new();
    let mut fields: Vec<MiningField> = Vec::new();

    for model in models {
        for field in &model.mining_schema.mining_fields {
            if produced.contains(&field.name) {
                continue;
            }
            if fields.iter().any(|f| f.name == field.name) {
                continue;
            }
            fields.push(field.clone());
        }
        produced.extend(model.output_field_names());
    }

    MiningSchema::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{Feature, Label};
    use crate::pmml::{DataType, MiningFunction, OpType, OutputField, RegressionTable, UsageType};

    fn regression(fields: Vec<MiningField>, outputs: &[&str]) -> Model {
        Model::regression(MiningSchema::new(fields), RegressionTable::default()).with_output(
            outputs
                .iter()
                .map(|name| OutputField::new(*name, OpType::Continuous, DataType::Double))
                .collect(),
        )
    }

    #[test]
    fn test_empty_chain_fails() {
        let result = create_model_chain(Vec::new(), &Schema::empty());
        assert!(matches!(result, Err(ChainError::EmptyChain)));
    }

    #[test]
    fn test_segments_in_order() {
        let first = regression(vec![MiningField::active("x")], &["t1"]).with_name("first");
        let second = regression(vec![MiningField::active("t1")], &[]).with_name("second");

        let chain = create_model_chain(vec![first, second], &Schema::empty()).unwrap();
        assert!(chain.is_model_chain());

        let segmentation = chain.segmentation().unwrap();
        let ids: Vec<&str> = segmentation.segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(segmentation.segments[1].model.model_name.as_deref(), Some("second"));
        assert!(segmentation.segments.iter().all(|s| s.predicate == Predicate::True));
    }

    #[test]
    fn test_mining_function_from_last_member() {
        let mut classifier = regression(vec![MiningField::active("x")], &[]);
        classifier.mining_function = MiningFunction::Classification;
        let chain = create_model_chain(
            vec![regression(vec![MiningField::active("x")], &[]), classifier],
            &Schema::empty(),
        )
        .unwrap();
        assert_eq!(chain.mining_function, MiningFunction::Classification);
    }

    #[test]
    fn test_derived_schema_skips_chain_internal_fields() {
        let first = regression(vec![MiningField::active("x1"), MiningField::active("x2")], &["t1"]);
        let second = regression(
            vec![MiningField::target("y"), MiningField::active("t1"), MiningField::active("x2")],
            &[],
        );

        let schema = derive_mining_schema(&[first, second]);
        let names: Vec<&str> = schema.mining_fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["x1", "x2", "y"]);
        assert_eq!(schema.mining_fields[2].usage_type, UsageType::Target);
    }

    #[test]
    fn test_explicit_schema_wins() {
        let schema = Schema::new(
            Some(Label {
                name: FieldName::from("y"),
                data_type: DataType::Double,
            }),
            vec![Feature::continuous("z", DataType::Double)],
        );
        let chain = create_model_chain(vec![regression(vec![MiningField::active("x")], &[])], &schema).unwrap();
        let names: Vec<&str> = chain.mining_schema.mining_fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["y", "z"]);
    }
}
