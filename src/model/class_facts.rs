//! Facts derived from a class and its ancestors.

use std::collections::HashSet;
use std::ops::Deref;

use crate::markers::vocabulary::{ClassMarkerRole, CLASS_MARKERS};
use crate::markers::{resolve_class_comment, resolve_table_name};

use super::{EntityClass, EntityField, EntityModel};

/// Where inherited columns go relative to a class's own columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrder {
    /// Own fields, then each super class's fields (recursively), in declaration order
    #[default]
    OwnFirst,
    /// Super class fields (recursively) before own fields
    AncestorsFirst,
}

impl std::str::FromStr for FieldOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "ownfirst" => Ok(FieldOrder::OwnFirst),
            "ancestorsfirst" => Ok(FieldOrder::AncestorsFirst),
            _ => Err(format!("Unknown field order: {}", s)),
        }
    }
}

/// A database field together with the class that declares it.
#[derive(Debug, Clone, Copy)]
pub struct DbField<'a> {
    pub declaring_class: &'a EntityClass,
    pub field: &'a EntityField,
}

impl Deref for DbField<'_> {
    type Target = EntityField;

    fn deref(&self) -> &EntityField {
        self.field
    }
}

impl EntityClass {
    fn marker_roles(&self) -> impl Iterator<Item = ClassMarkerRole> + '_ {
        self.markers.iter().filter_map(|m| {
            CLASS_MARKERS
                .iter()
                .find(|(name, _)| m.is(name))
                .map(|(_, role)| *role)
        })
    }

    /// Schema eligibility.
    ///
    /// Enums never qualify. Interfaces and abstract classes need an entity or
    /// table marker; concrete classes also qualify through a data-class marker.
    pub fn is_entity(&self) -> bool {
        if self.is_enum() {
            return false;
        }
        let mut explicit = false;
        let mut data_class = self.is_data_class;
        for role in self.marker_roles() {
            match role {
                ClassMarkerRole::Entity
                | ClassMarkerRole::MappedSuperclass
                | ClassMarkerRole::Table => explicit = true,
                ClassMarkerRole::DataClass => data_class = true,
            }
        }
        if self.is_interface() || self.is_abstract {
            explicit
        } else {
            explicit || data_class
        }
    }

    /// Mapped superclasses contribute columns to subclasses but get no table of their own.
    pub fn is_mapped_superclass(&self) -> bool {
        self.marker_roles()
            .any(|role| role == ClassMarkerRole::MappedSuperclass)
    }

    /// An entity that gets its own table.
    pub fn has_table(&self) -> bool {
        self.is_entity() && !self.is_mapped_superclass()
    }

    pub fn table_name(&self) -> String {
        resolve_table_name(&self.markers, &self.simple_name)
    }

    pub fn comment(&self) -> Option<String> {
        resolve_class_comment(&self.markers, self.documentation.as_deref())
    }
}

impl EntityModel {
    /// The class's own database fields.
    pub fn db_fields<'a>(&self, class: &'a EntityClass) -> Vec<DbField<'a>> {
        class
            .fields
            .iter()
            .filter(|f| f.is_db_field())
            .map(|field| DbField {
                declaring_class: class,
                field,
            })
            .collect()
    }

    /// Own and inherited database fields.
    ///
    /// Each class in the hierarchy is visited once, so cyclic super-class links
    /// terminate. A field name already collected hides later fields of the same name.
    pub fn all_db_fields<'a>(&'a self, class: &'a EntityClass, order: FieldOrder) -> Vec<DbField<'a>> {
        let mut visited = HashSet::new();
        let mut fields = Vec::new();
        self.collect_db_fields(class, order, &mut visited, &mut fields);

        let mut seen = HashSet::new();
        fields.retain(|f| seen.insert(f.field.name.as_str()));
        fields
    }

    /// Database fields satisfying the primary-key predicate, in column order.
    pub fn primary_key_candidates<'a>(
        &'a self,
        class: &'a EntityClass,
        order: FieldOrder,
    ) -> Vec<DbField<'a>> {
        self.all_db_fields(class, order)
            .into_iter()
            .filter(|f| f.is_primary_key())
            .collect()
    }

    /// Column name of the primary key, first candidate wins.
    pub fn primary_key_column(&self, class: &EntityClass, order: FieldOrder) -> Option<String> {
        self.primary_key_candidates(class, order)
            .first()
            .map(|f| f.column_name())
    }

    fn collect_db_fields<'a>(
        &'a self,
        class: &'a EntityClass,
        order: FieldOrder,
        visited: &mut HashSet<&'a str>,
        out: &mut Vec<DbField<'a>>,
    ) {
        if !visited.insert(class.qualified_name.as_str()) {
            return;
        }
        if order == FieldOrder::OwnFirst {
            out.extend(self.db_fields(class));
        }
        for parent in self.super_classes(class) {
            self.collect_db_fields(parent, order, visited, out);
        }
        if order == FieldOrder::AncestorsFirst {
            out.extend(self.db_fields(class));
        }
    }
}
