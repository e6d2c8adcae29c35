//! Shared utility helpers.

use heck::ToSnakeCase;

/// Case-insensitive substring search without allocating an uppercase copy.
#[inline]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle_bytes = needle.as_bytes();
    let haystack_bytes = haystack.as_bytes();
    if needle_bytes.len() > haystack_bytes.len() {
        return false;
    }
    haystack_bytes
        .windows(needle_bytes.len())
        .any(|window| window.eq_ignore_ascii_case(needle_bytes))
}

/// Case-insensitive ends_with check without allocating.
#[inline]
pub fn ends_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[haystack.len() - needle.len()..]
            .eq_ignore_ascii_case(needle.as_bytes())
}

/// Last segment of a dotted name: `java.lang.String` -> `String`.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Strips surrounding whitespace and any quote characters from a marker value.
///
/// Annotation processors hand over string literals in several forms
/// (`"sys_user"`, `'sys_user'`, `` `sys_user` ``); all collapse to `sys_user`.
pub fn strip_quotes(value: &str) -> String {
    value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .trim()
        .to_string()
}

/// Converts a camel/pascal case identifier to `underline_lower` form.
pub fn to_underline_lower(name: &str) -> String {
    name.to_snake_case()
}

/// Lenient integer parsing for marker attribute values such as `2000`, `2000L` or `"20"`.
pub fn parse_int(value: &str) -> Option<i64> {
    let cleaned = strip_quotes(value);
    let digits = cleaned.trim_end_matches(['L', 'l']);
    digits.parse::<i64>().ok()
}

/// True when the value is absent in practice: empty or whitespace only.
#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Escapes a value for use inside a single-quoted SQL string literal.
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}
