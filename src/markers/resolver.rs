//! Resolves table names, column names and comments from competing marker vocabularies.

use super::vocabulary::{
    CLASS_COMMENT_RULES, COLUMN_NAME_RULES, FIELD_COMMENT_RULES, TABLE_NAME_RULES,
};
use super::Marker;
use crate::util::{is_blank, strip_quotes, to_underline_lower};

/// First non-blank, quote-stripped attribute value, walking `rules` in priority order.
pub fn first_rule_value(markers: &[Marker], rules: &[(&str, &str)]) -> Option<String> {
    rules.iter().find_map(|(marker_name, attribute)| {
        markers
            .iter()
            .filter(|m| m.is(marker_name))
            .filter_map(|m| m.attribute(attribute))
            .map(strip_quotes)
            .find(|v| !v.is_empty())
    })
}

/// Explicit table name, if any marker declares one.
pub fn explicit_table_name(markers: &[Marker]) -> Option<String> {
    first_rule_value(markers, TABLE_NAME_RULES)
}

/// Table name: the explicit marker value verbatim, else `class_simple_name` in underline-lower form.
pub fn resolve_table_name(markers: &[Marker], class_simple_name: &str) -> String {
    explicit_table_name(markers).unwrap_or_else(|| to_underline_lower(class_simple_name))
}

/// Column name: the explicit marker value verbatim, else `field_name` in underline-lower form.
pub fn resolve_column_name(markers: &[Marker], field_name: &str) -> String {
    first_rule_value(markers, COLUMN_NAME_RULES).unwrap_or_else(|| to_underline_lower(field_name))
}

/// Field comment: documentation markers first, then the field's documentation text.
pub fn resolve_field_comment(markers: &[Marker], documentation: Option<&str>) -> Option<String> {
    first_rule_value(markers, FIELD_COMMENT_RULES).or_else(|| doc_comment(documentation))
}

/// Class comment: documentation markers first, then the class's documentation text.
pub fn resolve_class_comment(markers: &[Marker], documentation: Option<&str>) -> Option<String> {
    first_rule_value(markers, CLASS_COMMENT_RULES).or_else(|| doc_comment(documentation))
}

/// First non-empty line of documentation text, with comment decoration removed.
fn doc_comment(documentation: Option<&str>) -> Option<String> {
    let doc = documentation?;
    doc.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches("/**")
                .trim_start_matches("*/")
                .trim_start_matches('*')
                .trim()
        })
        .find(|line| !is_blank(line) && !line.starts_with('@'))
        .map(str::to_string)
}
