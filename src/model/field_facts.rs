//! Facts derived from a field's type and markers.

use crate::markers::vocabulary::{
    COLUMN, GENERATED_VALUE, ID, KEY, LENGTH, LOB, PRECISION, SCALE, TEXT_COLUMN_DEFINITIONS,
    TRANSIENT, UNIQUE,
};
use crate::markers::{find_named, resolve_column_name, resolve_field_comment, Marker};
use crate::types::{classify, nullability_from_markers, PrimitiveType, TypeCategory};
use crate::util::{contains_ci, parse_int, strip_quotes};

use super::{EntityField, GenerationStrategy};

/// Strings longer than this are stored as large text.
pub const TEXT_LENGTH_THRESHOLD: i64 = 1000;

/// Returned by [`EntityField::length`], [`EntityField::precision`] and
/// [`EntityField::scale`] when nothing is declared.
pub const UNSPECIFIED: i64 = -1;

impl EntityField {
    pub fn category(&self) -> TypeCategory {
        classify(&self.type_name)
    }

    pub fn marker(&self, simple: &str) -> Option<&Marker> {
        find_named(&self.markers, simple)
    }

    pub fn has_marker(&self, simple: &str) -> bool {
        self.marker(simple).is_some()
    }

    /// The generic persistence column marker (`@Column` from any package).
    pub fn column_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.is_any_package(COLUMN))
    }

    pub fn is_transient(&self) -> bool {
        self.markers.iter().any(|m| m.is_any_package(TRANSIENT))
    }

    /// Not static, not a collection and not transient.
    pub fn is_db_field(&self) -> bool {
        !self.is_static && !self.is_collection && !self.is_transient()
    }

    /// An identifier marker, or a field literally named `id`.
    pub fn is_primary_key(&self) -> bool {
        self.has_marker(ID) || self.name.eq_ignore_ascii_case("id")
    }

    pub fn is_unique(&self) -> bool {
        self.has_marker(UNIQUE) || self.column_marker().is_some_and(|m| m.flag("unique"))
    }

    pub fn is_key(&self) -> bool {
        self.has_marker(KEY)
    }

    pub fn key_group(&self) -> Option<String> {
        self.marker(KEY)
            .and_then(|m| m.non_blank_attribute("group"))
            .map(strip_quotes)
    }

    /// Declared length: `@Length(value)`, then `@Length(max)`, then `@Column(length)`.
    pub fn length(&self) -> i64 {
        let from_length = self.marker(LENGTH).and_then(|m| {
            m.attribute("value")
                .and_then(parse_int)
                .or_else(|| m.attribute("max").and_then(parse_int))
        });
        from_length
            .or_else(|| {
                self.column_marker()
                    .and_then(|m| m.attribute("length"))
                    .and_then(parse_int)
            })
            .unwrap_or(UNSPECIFIED)
    }

    /// Length to use when nothing is declared, sized for the field's type.
    pub fn guess_length(&self) -> i64 {
        let category = self.category();
        if category.is_string() {
            255
        } else if category.is_long() {
            20
        } else if category.is_integer() {
            11
        } else if category.is_floating_point() {
            10
        } else if category.is_boolean() {
            0
        } else if category.date_time().is_some() {
            19
        } else {
            255
        }
    }

    /// Declared length, or the guessed one when none is declared.
    pub fn effective_length(&self) -> i64 {
        match self.length() {
            UNSPECIFIED => self.guess_length(),
            declared => declared,
        }
    }

    pub fn precision(&self) -> i64 {
        self.numeric_marker_value(PRECISION, "precision")
    }

    pub fn scale(&self) -> i64 {
        self.numeric_marker_value(SCALE, "scale")
    }

    fn numeric_marker_value(&self, marker: &str, column_attribute: &str) -> i64 {
        self.marker(marker)
            .and_then(|m| m.attribute("value"))
            .and_then(parse_int)
            .or_else(|| {
                self.column_marker()
                    .and_then(|m| m.attribute(column_attribute))
                    .and_then(parse_int)
                    .filter(|v| *v > 0)
            })
            .unwrap_or(UNSPECIFIED)
    }

    /// A string stored as large text: `@Lob`, a text-like column definition, or length over 1000.
    pub fn is_text(&self) -> bool {
        if !self.category().is_string() {
            return false;
        }
        if self.has_marker(LOB) {
            return true;
        }
        let text_definition = self
            .column_marker()
            .and_then(|m| m.attribute("columnDefinition"))
            .is_some_and(|def| {
                TEXT_COLUMN_DEFINITIONS
                    .iter()
                    .any(|keyword| contains_ci(def, keyword))
            });
        text_definition || self.length() > TEXT_LENGTH_THRESHOLD
    }

    /// Generation strategy from the `@GeneratedValue` marker.
    ///
    /// Without a strategy attribute the column is auto-increment.
    pub fn generation(&self) -> GenerationStrategy {
        let Some(marker) = self.marker(GENERATED_VALUE) else {
            return GenerationStrategy::None;
        };

        let strategy = marker.non_blank_attribute("strategy").map(strip_quotes);
        if strategy
            .as_deref()
            .is_some_and(|s| contains_ci(s, "SEQUENCE"))
        {
            let name = marker
                .non_blank_attribute("generatorName")
                .or_else(|| marker.non_blank_attribute("generator"))
                .map(strip_quotes);
            return GenerationStrategy::Sequence { name };
        }
        if strategy.as_deref().is_some_and(|s| contains_ci(s, "UUID")) {
            return GenerationStrategy::Uuid;
        }

        let generator_type = marker
            .non_blank_attribute("generatorType")
            .map(strip_quotes)
            .filter(|t| !t.eq_ignore_ascii_case("void") && !t.ends_with(".Void"));
        match generator_type {
            Some(t) if contains_ci(&t, "UUIDIdGenerator") => GenerationStrategy::Uuid,
            Some(t) => GenerationStrategy::Custom { generator_type: t },
            None => GenerationStrategy::AutoIncrement,
        }
    }

    pub fn is_auto_increment(&self) -> bool {
        self.generation().is_auto_increment()
    }

    pub fn is_sequence(&self) -> bool {
        self.generation().is_sequence()
    }

    pub fn is_uuid(&self) -> bool {
        self.generation().is_uuid()
    }

    pub fn has_custom_generator(&self) -> bool {
        self.generation().has_custom_generator()
    }

    pub fn sequence_name(&self) -> Option<String> {
        match self.generation() {
            GenerationStrategy::Sequence { name } => name,
            _ => None,
        }
    }

    pub fn custom_generator_type(&self) -> Option<String> {
        match self.generation() {
            GenerationStrategy::Custom { generator_type } => Some(generator_type),
            _ => None,
        }
    }

    /// Nullability: keyword primitives never, then markers, then the column
    /// marker's `nullable`, then what the type system declared, else nullable.
    pub fn is_nullable(&self) -> bool {
        if PrimitiveType::is_keyword(&self.type_name) {
            return false;
        }
        if let Some(nullable) =
            nullability_from_markers(self.markers.iter().map(|m| m.simple_name.as_str()))
        {
            return nullable;
        }
        if let Some(column) = self.column_marker() {
            if column
                .attribute("nullable")
                .is_some_and(|v| strip_quotes(v).eq_ignore_ascii_case("false"))
            {
                return false;
            }
        }
        self.declared_nullable.unwrap_or(true)
    }

    pub fn column_name(&self) -> String {
        resolve_column_name(&self.markers, &self.name)
    }

    pub fn comment(&self) -> Option<String> {
        resolve_field_comment(&self.markers, self.documentation.as_deref())
    }
}
