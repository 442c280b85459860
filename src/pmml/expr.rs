//! Expression trees for derived fields

use serde::{Deserialize, Serialize};
use super::field::FieldName;

/// A constant value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Constant {
    Missing,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
}

/// One point of a piecewise linear normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearNorm {
    pub orig: f64,
    pub norm: f64,
}

/// Expression that computes a derived field's value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Expression {
    /// Reference to another field
    FieldRef(FieldName),
    /// Constant value
    Constant(Constant),
    /// Built-in or user-defined function call (e.g., "+", "log", "isMissing")
    Apply {
        function: String,
        arguments: Vec<Expression>,
    },
    /// Piecewise linear normalization of a continuous field
    NormContinuous {
        field: FieldName,
        points: Vec<LinearNorm>,
    },
    /// Indicator: 1 if the field equals `value`, 0 otherwise
    NormDiscrete {
        field: FieldName,
        value: String,
    },
}

impl Expression {
    pub fn field(name: impl Into<FieldName>) -> Self {
        Expression::FieldRef(name.into())
    }

    pub fn double(value: f64) -> Self {
        Expression::Constant(Constant::Double(value))
    }

    pub fn apply(function: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Apply {
            function: function.into(),
            arguments,
        }
    }

    /// Addition: a + b
    pub fn add(left: Expression, right: Expression) -> Self {
        Self::apply("+", vec![left, right])
    }

    /// Subtraction: a - b
    pub fn subtract(left: Expression, right: Expression) -> Self {
        Self::apply("-", vec![left, right])
    }

    /// Multiplication: a * b
    pub fn multiply(left: Expression, right: Expression) -> Self {
        Self::apply("*", vec![left, right])
    }

    /// Division: a / b
    pub fn divide(left: Expression, right: Expression) -> Self {
        Self::apply("/", vec![left, right])
    }

    /// Standard scaling: (field - mean) / scale
    pub fn standardize(field: impl Into<FieldName>, mean: f64, scale: f64) -> Self {
        Self::divide(
            Self::subtract(Self::field(field), Self::double(mean)),
            Self::double(scale),
        )
    }

    /// Field names this expression reads, in first-seen order
    pub fn referenced_fields(&self) -> Vec<&FieldName> {
        let mut names = Vec::new();
        self.collect_fields(&mut names);
        names
    }

    fn collect_fields<'a>(&'a self, names: &mut Vec<&'a FieldName>) {
        match self {
            Expression::FieldRef(name)
            | Expression::NormContinuous { field: name, .. }
            | Expression::NormDiscrete { field: name, .. } => {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
            Expression::Constant(_) => {}
            Expression::Apply { arguments, .. } => {
                for arg in arguments {
                    arg.collect_fields(names);
                }
            }
        }
    }
}
