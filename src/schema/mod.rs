//! Dialect-neutral schema derived from the entity model

mod builder;
mod column_type;
mod elements;

pub use builder::{build_schema, build_table, SchemaOptions};
pub use column_type::{ColumnType, DEFAULT_VARCHAR_LENGTH};
pub use elements::{ColumnDef, SchemaDef, TableDef};
