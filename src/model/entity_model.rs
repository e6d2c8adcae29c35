//! The complete structural snapshot

use indexmap::IndexMap;

use super::{EntityClass, EntityField};
use crate::types::{base_type_name, TypeCategory};
use crate::util::simple_name;

/// All classes handed over by the adapters, in input order.
///
/// Classes refer to each other by qualified name; lookups go through the model.
#[derive(Debug, Clone, Default)]
pub struct EntityModel {
    classes: Vec<EntityClass>,
    by_qualified_name: IndexMap<String, usize>,
    by_simple_name: IndexMap<String, usize>,
}

impl EntityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model and resolves every non-collection field type that names a known class.
    pub fn from_classes(classes: Vec<EntityClass>) -> Self {
        let mut model = Self::new();
        for class in classes {
            model.add_class(class);
        }
        model.resolve_field_types();
        model
    }

    /// Adds a class. A later class with an already-known qualified name is ignored.
    pub fn add_class(&mut self, class: EntityClass) {
        if self.by_qualified_name.contains_key(&class.qualified_name) {
            return;
        }
        let idx = self.classes.len();
        self.by_qualified_name
            .insert(class.qualified_name.clone(), idx);
        self.by_simple_name
            .entry(class.simple_name.clone())
            .or_insert(idx);
        self.classes.push(class);
    }

    /// Fills [`EntityField::resolved_type`] where the adapter left it empty.
    pub fn resolve_field_types(&mut self) {
        let mut resolutions = Vec::new();
        for (class_idx, class) in self.classes.iter().enumerate() {
            for (field_idx, field) in class.fields.iter().enumerate() {
                if field.resolved_type.is_some() || field.is_collection {
                    continue;
                }
                if let Some(target) = self.find_class(&field.type_name) {
                    resolutions.push((class_idx, field_idx, target.qualified_name.clone()));
                }
            }
        }
        for (class_idx, field_idx, qualified_name) in resolutions {
            self.classes[class_idx].fields[field_idx].resolved_type = Some(qualified_name);
        }
    }

    pub fn classes(&self) -> &[EntityClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Finds a class by qualified name, then by simple name. Generic arguments
    /// and a nullable suffix on `name` are ignored.
    pub fn find_class(&self, name: &str) -> Option<&EntityClass> {
        let base = base_type_name(name);
        self.by_qualified_name
            .get(base)
            .or_else(|| self.by_simple_name.get(simple_name(base)))
            .map(|&idx| &self.classes[idx])
    }

    /// Direct super classes that are part of the model, nearest first.
    pub fn super_classes<'a>(
        &'a self,
        class: &'a EntityClass,
    ) -> impl Iterator<Item = &'a EntityClass> + 'a {
        class
            .super_classes
            .iter()
            .filter_map(move |name| self.find_class(name))
    }

    /// The model class a field's type resolves to.
    pub fn resolved_type(&self, field: &EntityField) -> Option<&EntityClass> {
        field
            .resolved_type
            .as_deref()
            .and_then(|name| self.find_class(name))
    }

    /// True when the field holds a single nested custom object from the model.
    pub fn is_nested_object(&self, field: &EntityField) -> bool {
        !field.is_collection
            && matches!(field.category(), TypeCategory::Custom(_))
            && self.resolved_type(field).is_some()
    }
}
