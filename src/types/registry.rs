//! Classification of raw type names into semantic categories.

use std::fmt;

use super::collection::{base_type_name, is_collection_type};
use super::{DateTimeKind, NumericCategory, NumericType, PrimitiveType};
use crate::util::simple_name;

/// Semantic category of a raw type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCategory {
    Primitive(PrimitiveType),
    Numeric(NumericType),
    DateTime(DateTimeKind),
    Collection,
    String,
    Boolean,
    Character,
    /// Not a known scalar; carries the raw type name for the caller to resolve.
    Custom(String),
}

/// Default value for a type, used for sample data and documentation.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Char(char),
    Text(String),
    /// No known default: the type name itself.
    TypeName(String),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Integer(v) => write!(f, "{}", v),
            DefaultValue::Float(v) => write!(f, "{:.1}", v),
            DefaultValue::Boolean(v) => write!(f, "{}", v),
            DefaultValue::Char(c) => write!(f, "{}", c),
            DefaultValue::Text(s) | DefaultValue::TypeName(s) => f.write_str(s),
        }
    }
}

/// Lowercase simple name without generics or nullable suffix.
pub fn normalize(raw_type: &str) -> String {
    simple_name(base_type_name(raw_type)).to_ascii_lowercase()
}

/// Classifies a raw type name. Every input resolves; unknown names become [`TypeCategory::Custom`].
pub fn classify(raw_type: &str) -> TypeCategory {
    let normalized = normalize(raw_type);

    if let Some(primitive) = PrimitiveType::find(&normalized) {
        return TypeCategory::Primitive(primitive);
    }
    if let Some(numeric) = NumericType::find(&normalized) {
        return TypeCategory::Numeric(numeric);
    }
    if let Some(kind) = DateTimeKind::find(base_type_name(raw_type)) {
        return TypeCategory::DateTime(kind);
    }
    if is_collection_type(raw_type) {
        return TypeCategory::Collection;
    }

    match normalized.as_str() {
        "string" | "charsequence" => TypeCategory::String,
        "boolean" | "bool" => TypeCategory::Boolean,
        "char" | "character" => TypeCategory::Character,
        _ => TypeCategory::Custom(raw_type.trim().to_string()),
    }
}

/// Default value per category: primitive, numeric, date-time, string, else the type name.
pub fn default_value(raw_type: &str) -> DefaultValue {
    match classify(raw_type) {
        TypeCategory::Primitive(p) => p.default_value(),
        TypeCategory::Numeric(n) => n.default_value(),
        TypeCategory::DateTime(kind) => kind.default_value(),
        TypeCategory::String => DefaultValue::Text(String::new()),
        TypeCategory::Boolean => DefaultValue::Boolean(false),
        TypeCategory::Character => DefaultValue::Char(' '),
        TypeCategory::Collection | TypeCategory::Custom(_) => {
            DefaultValue::TypeName(raw_type.trim().to_string())
        }
    }
}

impl TypeCategory {
    /// Numeric view of the category, folding primitive spellings into it.
    pub fn numeric(&self) -> Option<NumericType> {
        match self {
            TypeCategory::Numeric(n) => Some(*n),
            TypeCategory::Primitive(p) => match p {
                PrimitiveType::Int => Some(NumericType::Int),
                PrimitiveType::Long => Some(NumericType::Long),
                PrimitiveType::Short => Some(NumericType::Short),
                PrimitiveType::Byte => Some(NumericType::Byte),
                PrimitiveType::Float => Some(NumericType::Float),
                PrimitiveType::Double => Some(NumericType::Double),
                PrimitiveType::Boolean | PrimitiveType::Char => None,
            },
            _ => None,
        }
    }

    pub fn is_long(&self) -> bool {
        self.numeric() == Some(NumericType::Long)
    }

    /// Any integer width, including long. Check [`Self::is_long`] first when the width matters.
    pub fn is_integer(&self) -> bool {
        self.numeric()
            .is_some_and(|n| n.category() == NumericCategory::Integer)
    }

    pub fn is_floating_point(&self) -> bool {
        self.numeric()
            .is_some_and(|n| n.category() == NumericCategory::FloatingPoint)
    }

    pub fn is_big_number(&self) -> bool {
        self.numeric()
            .is_some_and(|n| n.category() == NumericCategory::BigNumber)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TypeCategory::String)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            TypeCategory::Boolean | TypeCategory::Primitive(PrimitiveType::Boolean)
        )
    }

    pub fn is_char(&self) -> bool {
        matches!(
            self,
            TypeCategory::Character | TypeCategory::Primitive(PrimitiveType::Char)
        )
    }

    pub fn date_time(&self) -> Option<DateTimeKind> {
        match self {
            TypeCategory::DateTime(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, TypeCategory::Collection)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, TypeCategory::Custom(_))
    }
}
