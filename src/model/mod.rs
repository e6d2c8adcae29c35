//! Entity model: the structural snapshot and the facts derived from it

mod class_facts;
mod elements;
mod entity;
mod entity_model;
mod field_facts;

pub use class_facts::{DbField, FieldOrder};
pub use elements::*;
pub use entity::{ClassKind, EntityClass, EntityField};
pub use entity_model::EntityModel;
pub use field_facts::{TEXT_LENGTH_THRESHOLD, UNSPECIFIED};
