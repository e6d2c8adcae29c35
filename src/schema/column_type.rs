//! Dialect-neutral column types.

use crate::model::{EntityField, UNSPECIFIED};
use crate::types::{normalize, DateTimeKind, NumericType};

/// Default VARCHAR size for types with no better guess.
pub const DEFAULT_VARCHAR_LENGTH: u32 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigInt,
    Integer,
    SmallInt,
    TinyInt,
    Decimal { precision: u32, scale: u32 },
    Float,
    Double,
    Varchar(u32),
    Char(u32),
    /// Large text (CLOB / TEXT)
    Text,
    Date,
    Time,
    Timestamp,
    Boolean,
    Uuid,
}

impl ColumnType {
    /// Maps a field to a column type.
    ///
    /// Long is checked before the other integer widths. Unknown types become
    /// `VARCHAR(255)`.
    pub fn for_field(field: &EntityField) -> ColumnType {
        let category = field.category();
        let normalized = normalize(&field.type_name);

        if normalized == "uuid" || (field.is_uuid() && category.is_string()) {
            return ColumnType::Uuid;
        }
        if category.is_long() {
            return ColumnType::BigInt;
        }
        if let Some(numeric) = category.numeric() {
            return match numeric {
                NumericType::Long => ColumnType::BigInt,
                NumericType::Int => ColumnType::Integer,
                NumericType::Short => ColumnType::SmallInt,
                NumericType::Byte => ColumnType::TinyInt,
                NumericType::Float => ColumnType::Float,
                NumericType::Double => ColumnType::Double,
                NumericType::BigDecimal => decimal(field.precision(), field.scale(), 10, 2),
                NumericType::BigInteger => decimal(field.precision(), field.scale(), 38, 0),
            };
        }
        if category.is_string() {
            if field.is_text() {
                return ColumnType::Text;
            }
            return ColumnType::Varchar(varchar_length(field.effective_length()));
        }
        if let Some(kind) = category.date_time() {
            return match kind {
                DateTimeKind::Date => ColumnType::Date,
                DateTimeKind::Time => ColumnType::Time,
                DateTimeKind::DateTime => ColumnType::Timestamp,
            };
        }
        if category.is_boolean() {
            return ColumnType::Boolean;
        }
        if category.is_char() {
            return ColumnType::Char(1);
        }
        ColumnType::Varchar(DEFAULT_VARCHAR_LENGTH)
    }

    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            ColumnType::BigInt | ColumnType::Integer | ColumnType::SmallInt | ColumnType::TinyInt
        )
    }
}

fn decimal(precision: i64, scale: i64, default_precision: u32, default_scale: u32) -> ColumnType {
    let precision = u32::try_from(precision)
        .ok()
        .filter(|p| *p > 0)
        .unwrap_or(default_precision);
    let scale = u32::try_from(scale).unwrap_or(default_scale).min(precision);
    ColumnType::Decimal { precision, scale }
}

fn varchar_length(length: i64) -> u32 {
    if length == UNSPECIFIED || length <= 0 {
        return DEFAULT_VARCHAR_LENGTH;
    }
    u32::try_from(length).unwrap_or(DEFAULT_VARCHAR_LENGTH)
}
