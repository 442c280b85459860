//! Operational and value types for PMML fields

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a field's values are to be interpreted by a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    /// Unordered set of values
    Categorical,
    /// Ordered set of values
    Ordinal,
    /// Numeric value on a continuous scale
    Continuous,
}

impl Default for OpType {
    fn default() -> Self {
        OpType::Continuous
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpType::Categorical => write!(f, "categorical"),
            OpType::Ordinal => write!(f, "ordinal"),
            OpType::Continuous => write!(f, "continuous"),
        }
    }
}

/// Error when parsing an operational or data type string
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid {kind} '{input}'")]
pub struct ParseTypeError {
    pub kind: &'static str,
    pub input: String,
}

impl FromStr for OpType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "categorical" => Ok(OpType::Categorical),
            "ordinal" => Ok(OpType::Ordinal),
            "continuous" => Ok(OpType::Continuous),
            _ => Err(ParseTypeError {
                kind: "operational type",
                input: s.to_string(),
            }),
        }
    }
}

/// Value representation of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Integer,
    Float,
    Double,
    Boolean,
    Date,
    Time,
    DateTime,
}

impl Default for DataType {
    fn default() -> Self {
        DataType::Double
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "string"),
            DataType::Integer => write!(f, "integer"),
            DataType::Float => write!(f, "float"),
            DataType::Double => write!(f, "double"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Date => write!(f, "date"),
            DataType::Time => write!(f, "time"),
            DataType::DateTime => write!(f, "dateTime"),
        }
    }
}

impl FromStr for DataType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" | "str" | "object" => Ok(DataType::String),
            "integer" | "int" | "long" | "i32" | "i64" | "int64" => Ok(DataType::Integer),
            "float" | "f32" | "float32" => Ok(DataType::Float),
            "double" | "f64" | "float64" => Ok(DataType::Double),
            "boolean" | "bool" => Ok(DataType::Boolean),
            "date" => Ok(DataType::Date),
            "time" => Ok(DataType::Time),
            "datetime" => Ok(DataType::DateTime),
            _ => Err(ParseTypeError {
                kind: "data type",
                input: s.to_string(),
            }),
        }
    }
}

impl DataType {
    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float | DataType::Double)
    }

    /// Check if this is a temporal type
    pub fn is_temporal(&self) -> bool {
        matches!(self, DataType::Date | DataType::Time | DataType::DateTime)
    }

    /// The operational type a field of this data type gets when nothing else is known
    pub fn default_op_type(&self) -> OpType {
        if self.is_numeric() {
            OpType::Continuous
        } else {
            OpType::Categorical
        }
    }
}

// Both types travel as their display strings

impl<'de> Deserialize<'de> for OpType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OpType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for OpType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DataType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("double", DataType::Double)]
    #[case("F64", DataType::Double)]
    #[case("int", DataType::Integer)]
    #[case("int64", DataType::Integer)]
    #[case("str", DataType::String)]
    #[case("bool", DataType::Boolean)]
    #[case("dateTime", DataType::DateTime)]
    fn test_parse_data_type(#[case] input: &str, #[case] expected: DataType) {
        assert_eq!(input.parse::<DataType>().unwrap(), expected);
    }

    #[test]
    fn test_parse_op_type() {
        assert_eq!("categorical".parse::<OpType>().unwrap(), OpType::Categorical);
        assert_eq!("ORDINAL".parse::<OpType>().unwrap(), OpType::Ordinal);
        assert_eq!("continuous".parse::<OpType>().unwrap(), OpType::Continuous);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "decimal".parse::<DataType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid data type 'decimal'");
        assert!("nominal".parse::<OpType>().is_err());
    }

    #[test]
    fn test_display_uses_pmml_spelling() {
        assert_eq!(DataType::DateTime.to_string(), "dateTime");
        assert_eq!(OpType::Continuous.to_string(), "continuous");
    }

    #[test]
    fn test_serde_as_strings() {
        let json = serde_json::to_string(&DataType::Integer).unwrap();
        assert_eq!(json, "\"integer\"");
        let parsed: OpType = serde_json::from_str("\"categorical\"").unwrap();
        assert_eq!(parsed, OpType::Categorical);
    }

    #[test]
    fn test_type_predicates() {
        assert!(DataType::Float.is_numeric());
        assert!(!DataType::String.is_numeric());
        assert!(DataType::Date.is_temporal());
        assert_eq!(DataType::Integer.default_op_type(), OpType::Continuous);
        assert_eq!(DataType::Boolean.default_op_type(), OpType::Categorical);
    }
}
