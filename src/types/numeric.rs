//! Numeric types grouped by category.

use super::DefaultValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericCategory {
    Integer,
    FloatingPoint,
    BigNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    BigDecimal,
    BigInteger,
}

/// Table order is lookup order: integers, then floating point, then big numbers.
static NUMERIC_NAMES: &[(&str, NumericType)] = &[
    ("int", NumericType::Int),
    ("integer", NumericType::Int),
    ("long", NumericType::Long),
    ("short", NumericType::Short),
    ("byte", NumericType::Byte),
    ("float", NumericType::Float),
    ("double", NumericType::Double),
    ("bigdecimal", NumericType::BigDecimal),
    ("biginteger", NumericType::BigInteger),
];

impl NumericType {
    pub fn find(normalized: &str) -> Option<Self> {
        NUMERIC_NAMES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, ty)| *ty)
    }

    pub fn category(self) -> NumericCategory {
        match self {
            NumericType::Int | NumericType::Long | NumericType::Short | NumericType::Byte => {
                NumericCategory::Integer
            }
            NumericType::Float | NumericType::Double => NumericCategory::FloatingPoint,
            NumericType::BigDecimal | NumericType::BigInteger => NumericCategory::BigNumber,
        }
    }

    pub fn default_value(self) -> DefaultValue {
        match self {
            NumericType::BigDecimal => DefaultValue::Text("0.00".to_string()),
            NumericType::BigInteger => DefaultValue::Text("0".to_string()),
            other => match other.category() {
                NumericCategory::FloatingPoint => DefaultValue::Float(0.0),
                _ => DefaultValue::Integer(0),
            },
        }
    }
}
