//! Type registry: raw type names to semantic categories and default values.

mod collection;
mod datetime;
mod nullability;
mod numeric;
mod primitive;
mod registry;

pub use collection::{
    base_type_name, element_type, generic_arguments, is_array_type, is_collection_type,
};
pub use datetime::DateTimeKind;
pub use nullability::nullability_from_markers;
pub use numeric::{NumericCategory, NumericType};
pub use primitive::PrimitiveType;
pub use registry::{classify, default_value, normalize, DefaultValue, TypeCategory};
