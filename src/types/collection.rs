//! Collection and array type recognition, plus generic argument extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::util::simple_name;

static COLLECTION_PREFIXES: &[&str] = &[
    "java.util.List",
    "java.util.Set",
    "java.util.Map",
    "java.util.Collection",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.TreeSet",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.TreeMap",
    "java.lang.Iterable",
    "kotlin.collections.List",
    "kotlin.collections.Set",
    "kotlin.collections.Map",
    "kotlin.collections.Collection",
    "kotlin.collections.Iterable",
    "kotlin.collections.MutableList",
    "kotlin.collections.MutableSet",
    "kotlin.collections.MutableMap",
    "kotlin.collections.MutableCollection",
    "kotlin.collections.ArrayList",
    "kotlin.collections.HashSet",
    "kotlin.collections.HashMap",
];

/// Unqualified container names, as adapters sometimes report them.
static COLLECTION_SIMPLE_NAMES: &[&str] = &[
    "List",
    "Set",
    "Map",
    "Collection",
    "Iterable",
    "ArrayList",
    "LinkedList",
    "HashSet",
    "LinkedHashSet",
    "TreeSet",
    "HashMap",
    "LinkedHashMap",
    "TreeMap",
    "MutableList",
    "MutableSet",
    "MutableMap",
    "MutableCollection",
];

/// `Outer<Args>` with an optional trailing nullable marker.
static GENERIC_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([\w.$]+)\s*<(.*)>\s*\??\s*$").unwrap());

/// True for arrays written either as `Array<T>` or `T[]`.
pub fn is_array_type(raw_type: &str) -> bool {
    let trimmed = raw_type.trim().trim_end_matches('?');
    trimmed.starts_with("Array<")
        || trimmed.starts_with("kotlin.Array<")
        || trimmed.ends_with("[]")
}

/// True for known containers (qualified or unqualified) and arrays.
pub fn is_collection_type(raw_type: &str) -> bool {
    if is_array_type(raw_type) {
        return true;
    }
    let base = base_type_name(raw_type);
    COLLECTION_PREFIXES.contains(&base) || COLLECTION_SIMPLE_NAMES.contains(&simple_name(base))
}

/// The type name without generic arguments or nullable suffix.
pub fn base_type_name(raw_type: &str) -> &str {
    let trimmed = raw_type.trim();
    let without_generics = match trimmed.find('<') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };
    without_generics.trim().trim_end_matches('?')
}

/// Top-level generic arguments: `Map<String, List<Role>>` -> `["String", "List<Role>"]`.
pub fn generic_arguments(raw_type: &str) -> Vec<String> {
    let Some(caps) = GENERIC_TYPE_RE.captures(raw_type) else {
        return Vec::new();
    };
    split_top_level(&caps[2])
}

/// Element type of an array or single-argument container.
pub fn element_type(raw_type: &str) -> Option<String> {
    let trimmed = raw_type.trim().trim_end_matches('?');
    if let Some(element) = trimmed.strip_suffix("[]") {
        return Some(element.trim().to_string());
    }
    generic_arguments(trimmed).into_iter().next()
}

fn split_top_level(args: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for c in args.chars() {
        match c {
            '<' => {
                depth += 1;
                current.push(c);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }

    // Kotlin variance and wildcard bounds do not change the element type
    parts
        .into_iter()
        .map(|p| {
            p.trim_start_matches("out ")
                .trim_start_matches("in ")
                .trim_start_matches("? extends ")
                .trim()
                .to_string()
        })
        .filter(|p| !p.is_empty())
        .collect()
}
