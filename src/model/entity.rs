//! Structural view of classes and fields, as handed over by the language adapters.

use crate::markers::Marker;
use crate::types::{generic_arguments, is_collection_type};
use crate::util::simple_name;

/// Kind of declaration a class comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl std::str::FromStr for ClassKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(ClassKind::Class),
            "interface" => Ok(ClassKind::Interface),
            "enum" => Ok(ClassKind::Enum),
            _ => Err(format!("Unknown class kind: {}", s)),
        }
    }
}

/// A class (or interface, or enum) from the source model
#[derive(Debug, Clone, PartialEq)]
pub struct EntityClass {
    /// Fully qualified name (e.g., "com.example.User")
    pub qualified_name: String,
    /// Simple name (e.g., "User")
    pub simple_name: String,
    pub kind: ClassKind,
    pub is_abstract: bool,
    /// Declared as a language-level data class (e.g., a Kotlin `data class`)
    pub is_data_class: bool,
    /// Class-level markers in declaration order
    pub markers: Vec<Marker>,
    /// Fields in declaration order
    pub fields: Vec<EntityField>,
    /// Qualified names of direct super classes, nearest first
    pub super_classes: Vec<String>,
    /// Qualified names of implemented interfaces
    pub interfaces: Vec<String>,
    /// Documentation text attached to the class
    pub documentation: Option<String>,
}

impl EntityClass {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = simple_name(&qualified_name).to_string();
        Self {
            qualified_name,
            simple_name,
            kind: ClassKind::Class,
            is_abstract: false,
            is_data_class: false,
            markers: Vec::new(),
            fields: Vec::new(),
            super_classes: Vec::new(),
            interfaces: Vec::new(),
            documentation: None,
        }
    }

    pub fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_data_class(mut self, is_data_class: bool) -> Self {
        self.is_data_class = is_data_class;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_field(mut self, field: EntityField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_super_class(mut self, qualified_name: impl Into<String>) -> Self {
        self.super_classes.push(qualified_name.into());
        self
    }

    pub fn with_doc(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    pub fn field(&self, name: &str) -> Option<&EntityField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A field (or property) declared on a class
#[derive(Debug, Clone, PartialEq)]
pub struct EntityField {
    pub name: String,
    /// Raw type text as the adapter reports it (e.g., "java.util.List<com.example.Role>")
    pub type_name: String,
    /// Generic type arguments, outermost level only
    pub type_arguments: Vec<String>,
    /// Field-level markers in declaration order
    pub markers: Vec<Marker>,
    pub is_static: bool,
    pub is_constant: bool,
    /// Mutable property (`var`) rather than read-only (`val`)
    pub is_var: bool,
    pub is_collection: bool,
    /// Nullability declared by the type system itself (e.g., Kotlin `String?`), if known
    pub declared_nullable: Option<bool>,
    /// Qualified name of the model class this field's type resolves to
    pub resolved_type: Option<String>,
    pub documentation: Option<String>,
}

impl EntityField {
    /// Creates a field, deriving collection-ness and type arguments from the raw type text.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let declared_nullable = type_name.trim().ends_with('?').then_some(true);
        Self {
            name: name.into(),
            is_collection: is_collection_type(&type_name),
            type_arguments: generic_arguments(&type_name),
            type_name,
            markers: Vec::new(),
            is_static: false,
            is_constant: false,
            is_var: true,
            declared_nullable,
            resolved_type: None,
            documentation: None,
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_constant(mut self, is_constant: bool) -> Self {
        self.is_constant = is_constant;
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.declared_nullable = Some(nullable);
        self
    }

    pub fn with_type_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_doc(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}
