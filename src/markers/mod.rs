//! Marker vocabularies and name/comment resolution.

mod marker;
mod resolver;
pub mod vocabulary;

pub use marker::{find_any, find_named, Marker, MarkerValue};
pub use resolver::{
    explicit_table_name, first_rule_value, resolve_class_comment, resolve_column_name,
    resolve_field_comment, resolve_table_name,
};
