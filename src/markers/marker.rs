//! Read-only snapshot of an annotation attached to a class or field.

use indexmap::IndexMap;

use crate::util::{ends_with_ci, simple_name};

/// Attribute value: annotation processors report either a scalar or an array of scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerValue {
    Scalar(String),
    Array(Vec<String>),
}

impl MarkerValue {
    /// Scalar view. Arrays flatten to their first element.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            MarkerValue::Scalar(value) => Some(value),
            MarkerValue::Array(values) => values.first().map(String::as_str),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            MarkerValue::Scalar(value) => vec![value.as_str()],
            MarkerValue::Array(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub qualified_name: String,
    pub simple_name: String,
    /// Attributes in declaration order
    pub attributes: IndexMap<String, MarkerValue>,
}

impl Marker {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = simple_name(&qualified_name).to_string();
        Self {
            qualified_name,
            simple_name,
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into(), MarkerValue::Scalar(value.into()));
        self
    }

    pub fn with_array_attr<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.attributes.insert(name.into(), MarkerValue::Array(values));
        self
    }

    /// Scalar attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(MarkerValue::as_scalar)
    }

    /// Attribute lookup that treats blank values as absent.
    pub fn non_blank_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|v| !crate::util::is_blank(v))
    }

    /// Boolean attribute; anything other than `true` is false.
    pub fn flag(&self, name: &str) -> bool {
        self.attribute(name)
            .map(|v| crate::util::strip_quotes(v).eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    pub fn is(&self, qualified_name: &str) -> bool {
        self.qualified_name == qualified_name
    }

    /// Case-insensitive simple-name match, so `@Id`, `@ID` and `@id` all count.
    pub fn is_named(&self, simple: &str) -> bool {
        self.simple_name.eq_ignore_ascii_case(simple)
    }

    /// Matches `pkg.Name` for any package, or a bare `Name`.
    pub fn is_any_package(&self, simple: &str) -> bool {
        self.qualified_name == simple || ends_with_ci(&self.qualified_name, &format!(".{}", simple))
    }
}

/// First marker with the given simple name, case-insensitively.
pub fn find_named<'a>(markers: &'a [Marker], simple: &str) -> Option<&'a Marker> {
    markers.iter().find(|m| m.is_named(simple))
}

/// First marker whose qualified name is one of `names`.
pub fn find_any<'a>(markers: &'a [Marker], names: &[&str]) -> Option<&'a Marker> {
    markers
        .iter()
        .find(|m| names.iter().any(|name| m.is(name)))
}
