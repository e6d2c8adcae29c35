//! Primitive and boxed scalar types.

use super::DefaultValue;

/// A primitive scalar, in either its keyword, Kotlin or boxed-wrapper spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Long,
    Short,
    Byte,
    Float,
    Double,
    Boolean,
    Char,
}

/// Normalized (lowercase simple) names of primitive types.
static PRIMITIVE_NAMES: &[(&str, PrimitiveType)] = &[
    ("int", PrimitiveType::Int),
    ("integer", PrimitiveType::Int),
    ("long", PrimitiveType::Long),
    ("short", PrimitiveType::Short),
    ("byte", PrimitiveType::Byte),
    ("float", PrimitiveType::Float),
    ("double", PrimitiveType::Double),
    ("boolean", PrimitiveType::Boolean),
    ("char", PrimitiveType::Char),
    ("character", PrimitiveType::Char),
];

/// Java keyword spellings. These can never hold null.
static KEYWORDS: &[&str] = &[
    "int", "long", "short", "byte", "float", "double", "boolean", "char",
];

impl PrimitiveType {
    /// Looks up a normalized type name (see [`super::normalize`]).
    pub fn find(normalized: &str) -> Option<Self> {
        PRIMITIVE_NAMES
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, ty)| *ty)
    }

    /// True for the lowercase Java keyword spelling (`int`, not `Integer` or `Int`).
    pub fn is_keyword(raw_type: &str) -> bool {
        KEYWORDS.contains(&raw_type.trim())
    }

    pub fn default_value(self) -> DefaultValue {
        match self {
            PrimitiveType::Int
            | PrimitiveType::Long
            | PrimitiveType::Short
            | PrimitiveType::Byte => DefaultValue::Integer(0),
            PrimitiveType::Float | PrimitiveType::Double => DefaultValue::Float(0.0),
            PrimitiveType::Boolean => DefaultValue::Boolean(false),
            PrimitiveType::Char => DefaultValue::Char(' '),
        }
    }
}
